//! # Ticket logic, version 1
//!
//! Stateless [`LotteryLogic`] implementation with the core operation set:
//! `Init`, `BuyTicket`, `PickSurpriseWinner`, `PickWinner`, `GetPlayers`,
//! `GetWinningPrice`. Instances bound to it sell tickets at
//! [`TICKET_PRICE`].

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol, Vec};
use ticket_lottery::{
    lottery, lottery_schema, Call, Error, LotteryLogic, LotteryState, OperationSpec, Outcome,
    StorageSchema,
};

/// 0.001 of a 10^18-unit asset.
pub const TICKET_PRICE: i128 = 1_000_000_000_000_000;

#[contract]
pub struct TicketV1;

#[contractimpl]
impl LotteryLogic for TicketV1 {
    fn version(_env: Env) -> Symbol {
        symbol_short!("ticket_v1")
    }

    fn schema(env: Env) -> StorageSchema {
        lottery_schema(&env)
    }

    fn ticket_price(_env: Env) -> i128 {
        TICKET_PRICE
    }

    fn operations(env: Env) -> Vec<OperationSpec> {
        lottery::core_operations(&env)
    }

    fn execute(env: Env, state: LotteryState, call: Call) -> Result<Outcome, Error> {
        lottery::execute_core(&env, state, &call)
    }
}

#[cfg(test)]
mod test;
