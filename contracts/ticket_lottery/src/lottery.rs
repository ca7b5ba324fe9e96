//! Lottery rules shared by every ticket logic version.
//!
//! Check order is fixed per operation:
//!
//! | Operation              | Checks, in order                          |
//! |------------------------|-------------------------------------------|
//! | `init`                 | AlreadyInitialized                        |
//! | `buy_ticket`           | SaleClosed, WrongPrice, OwnerNotAllowed   |
//! | `pick_surprise_winner` | NotOwner, SaleClosed, NoPlayers           |
//! | `pick_winner`          | NotOwner, SaleStillActive, NoPlayers      |

use soroban_sdk::{vec, Address, Env, Vec};

use crate::events::{Initialized, LotteryEvent, TicketBought};
use crate::interfaces::EntropySourceClient;
use crate::types::{Call, CallOutput, LotteryState, Operation, OperationSpec, Outcome, Payout};
use crate::Error;

/// Length of the ticket sale in ledger seconds, counted from `init`.
pub const SALE_WINDOW: u64 = 30;

pub fn init(env: &Env, state: &mut LotteryState, caller: &Address) -> Result<Initialized, Error> {
    if state.is_initialized() {
        return Err(Error::AlreadyInitialized);
    }
    let sale_deadline = env.ledger().timestamp().saturating_add(SALE_WINDOW);
    state.owner = Some(caller.clone());
    state.sale_deadline = sale_deadline;
    Ok(Initialized { owner: caller.clone(), sale_deadline })
}

pub fn buy_ticket(
    env: &Env,
    state: &mut LotteryState,
    buyer: &Address,
    payment: i128,
) -> Result<TicketBought, Error> {
    if !state.is_open(env.ledger().timestamp()) {
        return Err(Error::SaleClosed);
    }
    if payment != state.ticket_price {
        return Err(Error::WrongPrice);
    }
    if state.is_owner(buyer) {
        return Err(Error::OwnerNotAllowed);
    }
    state.players.add(buyer.clone());
    state.pool += payment;
    Ok(TicketBought { player: buyer.clone(), price: payment })
}

/// Pays half the pool (rounded down) to a randomly drawn player and drops
/// that player from the round.
pub fn pick_surprise_winner(
    env: &Env,
    state: &mut LotteryState,
    caller: &Address,
    entropy: &Option<Address>,
) -> Result<Payout, Error> {
    if !state.is_owner(caller) {
        return Err(Error::NotOwner);
    }
    if !state.is_open(env.ledger().timestamp()) {
        return Err(Error::SaleClosed);
    }
    let winner = draw_winner(env, state, entropy)?;
    let amount = state.pool / 2;
    state.pool -= amount;
    Ok(Payout { winner, amount })
}

/// Pays the whole pool to a randomly drawn player and ends the round.
pub fn pick_winner(
    env: &Env,
    state: &mut LotteryState,
    caller: &Address,
    entropy: &Option<Address>,
) -> Result<Payout, Error> {
    if !state.is_owner(caller) {
        return Err(Error::NotOwner);
    }
    if state.is_open(env.ledger().timestamp()) {
        return Err(Error::SaleStillActive);
    }
    let winner = draw_winner(env, state, entropy)?;
    let amount = state.pool;
    state.pool = 0;
    state.players.clear();
    Ok(Payout { winner, amount })
}

fn draw_winner(
    env: &Env,
    state: &mut LotteryState,
    entropy: &Option<Address>,
) -> Result<Address, Error> {
    if state.players.is_empty() {
        return Err(Error::NoPlayers);
    }
    let index = draw_index(env, entropy, state.players.len());
    state.players.remove_at(index)
}

/// Uniform index in `[0, len)`. Uses the configured entropy contract when
/// present, the host PRNG otherwise. `len` must be non-zero.
pub fn draw_index(env: &Env, entropy: &Option<Address>, len: u32) -> u32 {
    match entropy {
        Some(source) => EntropySourceClient::new(env, source).draw_index(&len) % len,
        None => env.prng().gen_range::<u64>(0..u64::from(len)) as u32,
    }
}

/// Operations every ticket version supports.
pub fn core_operations(env: &Env) -> Vec<OperationSpec> {
    vec![
        env,
        OperationSpec::mutating(Operation::Init),
        OperationSpec::payable(Operation::BuyTicket),
        OperationSpec::mutating(Operation::PickSurpriseWinner),
        OperationSpec::mutating(Operation::PickWinner),
        OperationSpec::read(Operation::GetPlayers),
        OperationSpec::read(Operation::GetWinningPrice),
    ]
}

/// Executes one of the [`core_operations`]. Anything else is `UnknownOperation`.
pub fn execute_core(env: &Env, mut state: LotteryState, call: &Call) -> Result<Outcome, Error> {
    let (output, event) = match call.operation {
        Operation::Init => {
            let event = init(env, &mut state, &call.caller)?;
            (CallOutput::Unit, LotteryEvent::Initialized(event))
        }
        Operation::BuyTicket => {
            let event = buy_ticket(env, &mut state, &call.caller, call.value)?;
            (CallOutput::Unit, LotteryEvent::TicketBought(event))
        }
        Operation::PickSurpriseWinner => {
            let payout = pick_surprise_winner(env, &mut state, &call.caller, &call.entropy)?;
            (CallOutput::Payout(payout.clone()), LotteryEvent::SurpriseWinnerPaid(payout))
        }
        Operation::PickWinner => {
            let payout = pick_winner(env, &mut state, &call.caller, &call.entropy)?;
            (CallOutput::Payout(payout.clone()), LotteryEvent::WinnerPaid(payout))
        }
        Operation::GetPlayers => {
            let players = state.players.to_vec();
            return Ok(Outcome::read(state, CallOutput::Players(players)));
        }
        Operation::GetWinningPrice => {
            let pool = state.pool;
            return Ok(Outcome::read(state, CallOutput::Amount(pool)));
        }
        _ => return Err(Error::UnknownOperation),
    };
    Ok(Outcome { state, output, event: Some(event) })
}
