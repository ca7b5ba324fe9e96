//! # Ticket Proxy
//!
//! One upgradeable lottery instance. It owns the [`LotteryState`] and a
//! pointer to the current logic version, and forwards every lottery
//! operation to that logic together with its own state.
//!
//! | Phase        | Entry Point(s)                                           |
//! |--------------|----------------------------------------------------------|
//! | Binding      | `bind`, `upgrade` (factory only)                         |
//! | Round        | `init`, `buy_ticket`, `pick_surprise_winner`, `pick_winner` |
//! | Queries      | `get_players`, `get_winning_price`, `get_ticket_price`, `get_sale_deadline`, `get_implementation` |
//! | Generic      | `call`                                                   |
//!
//! ## Dispatch
//!
//! 1. The operation must appear in the logic's operation table
//!    (`UnknownOperation`); attached value requires a payable entry
//!    (`NotPayable`).
//! 2. Mutating operations require the caller's authorization; a payable
//!    operation moves the attached value from the caller to the instance.
//! 3. The logic computes the next state. Only mutating operations write it
//!    back, pay out any winner and publish the event. Reads never touch
//!    storage.
//!
//! Any error returned from an entry point rolls back every write, transfer
//! and event of that call.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};
use ticket_lottery::{
    events, resolve_logic, settle, Call, CallOutput, Error, LotteryInstance, LotteryLogicClient,
    LotteryState, Operation, Payout,
};

mod storage;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

#[contract]
pub struct TicketProxy;

#[contractimpl]
impl LotteryInstance for TicketProxy {
    /// Bind a freshly deployed instance to its factory, logic and token.
    ///
    /// - `factory` must authorize; it becomes the only address allowed to upgrade.
    /// - State starts zero-initialized at the logic's ticket price.
    fn bind(
        env: Env,
        factory: Address,
        logic: Address,
        token: Address,
        entropy: Option<Address>,
    ) -> Result<(), Error> {
        if storage::is_bound(&env) {
            return Err(Error::AlreadyBound);
        }
        factory.require_auth();
        let (schema, ticket_price) = resolve_logic(&env, &logic)?;

        storage::save_binding(&env, &factory, &token, &entropy);
        storage::set_implementation(&env, &logic);
        storage::set_schema(&env, &schema);
        storage::save_state(&env, &LotteryState::new(&env, ticket_price));
        Ok(())
    }

    /// Point the instance at another logic version.
    ///
    /// The new logic must declare the same storage layout. The ticket price
    /// is restamped from it; players and pool carry over.
    fn upgrade(env: Env, factory: Address, logic: Address) -> Result<(), Error> {
        if storage::factory(&env)? != factory {
            return Err(Error::NotOwner);
        }
        factory.require_auth();
        let (schema, ticket_price) = resolve_logic(&env, &logic)?;
        storage::schema(&env)?.check_compatible(&schema)?;

        let from = storage::implementation(&env)?;
        let mut state = storage::load_state(&env)?;
        state.ticket_price = ticket_price;
        storage::save_state(&env, &state);
        storage::set_schema(&env, &schema);
        storage::set_implementation(&env, &logic);

        events::publish_logic_upgraded(&env, from, logic);
        Ok(())
    }

    fn get_implementation(env: Env) -> Result<Address, Error> {
        storage::implementation(&env)
    }
}

#[contractimpl]
impl TicketProxy {
    /// Forward `operation` with `value` attached on behalf of `caller`.
    pub fn call(
        env: Env,
        caller: Address,
        operation: Operation,
        value: i128,
    ) -> Result<CallOutput, Error> {
        dispatch(&env, caller, operation, value)
    }

    pub fn init(env: Env, caller: Address) -> Result<(), Error> {
        dispatch(&env, caller, Operation::Init, 0).map(|_| ())
    }

    /// Buy one ticket; `payment` must equal the current ticket price.
    pub fn buy_ticket(env: Env, buyer: Address, payment: i128) -> Result<(), Error> {
        dispatch(&env, buyer, Operation::BuyTicket, payment).map(|_| ())
    }

    pub fn pick_surprise_winner(env: Env, caller: Address) -> Result<Payout, Error> {
        match dispatch(&env, caller, Operation::PickSurpriseWinner, 0)? {
            CallOutput::Payout(payout) => Ok(payout),
            _ => Err(Error::UnexpectedOutput),
        }
    }

    pub fn pick_winner(env: Env, caller: Address) -> Result<Payout, Error> {
        match dispatch(&env, caller, Operation::PickWinner, 0)? {
            CallOutput::Payout(payout) => Ok(payout),
            _ => Err(Error::UnexpectedOutput),
        }
    }

    pub fn get_players(env: Env) -> Result<Vec<Address>, Error> {
        match read(&env, Operation::GetPlayers)? {
            CallOutput::Players(players) => Ok(players),
            _ => Err(Error::UnexpectedOutput),
        }
    }

    /// Current pool, i.e. what a final winner would receive now.
    pub fn get_winning_price(env: Env) -> Result<i128, Error> {
        match read(&env, Operation::GetWinningPrice)? {
            CallOutput::Amount(amount) => Ok(amount),
            _ => Err(Error::UnexpectedOutput),
        }
    }

    /// Only answered by logic versions that publish the accessor.
    pub fn get_ticket_price(env: Env) -> Result<i128, Error> {
        match read(&env, Operation::GetTicketPrice)? {
            CallOutput::Amount(price) => Ok(price),
            _ => Err(Error::UnexpectedOutput),
        }
    }

    /// Only answered by logic versions that publish the accessor.
    pub fn get_sale_deadline(env: Env) -> Result<u64, Error> {
        match read(&env, Operation::GetSaleDeadline)? {
            CallOutput::Timestamp(deadline) => Ok(deadline),
            _ => Err(Error::UnexpectedOutput),
        }
    }
}

fn read(env: &Env, operation: Operation) -> Result<CallOutput, Error> {
    dispatch(env, env.current_contract_address(), operation, 0)
}

fn dispatch(
    env: &Env,
    caller: Address,
    operation: Operation,
    value: i128,
) -> Result<CallOutput, Error> {
    let logic = LotteryLogicClient::new(env, &storage::implementation(env)?);
    let spec = logic
        .operations()
        .iter()
        .find(|spec| spec.operation == operation)
        .ok_or(Error::UnknownOperation)?;
    if value != 0 && !spec.payable {
        return Err(Error::NotPayable);
    }

    let this = env.current_contract_address();
    if spec.mutating {
        caller.require_auth();
    }
    if spec.payable && value > 0 {
        move_funds(env, &caller, &this, value)?;
    }

    let call = Call { operation, caller, value, entropy: storage::entropy(env) };
    let outcome = settle(
        logic.try_execute(&storage::load_state(env)?, &call),
        Error::LogicFailed,
    )?;
    if !spec.mutating {
        return Ok(outcome.output);
    }

    if let CallOutput::Payout(payout) = &outcome.output {
        move_funds(env, &this, &payout.winner, payout.amount)?;
    }
    storage::save_state(env, &outcome.state);
    if let Some(event) = &outcome.event {
        events::publish_lottery_event(env, event);
    }
    Ok(outcome.output)
}

fn move_funds(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token = token::Client::new(env, &storage::token(env)?);
    match token.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
