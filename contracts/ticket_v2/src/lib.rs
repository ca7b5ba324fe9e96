//! # Ticket logic, version 2
//!
//! Same rules and storage layout as version 1 at twice the price, plus two
//! read accessors: `GetTicketPrice` and `GetSaleDeadline`.

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol, Vec};
use ticket_lottery::{
    lottery, lottery_schema, Call, CallOutput, Error, LotteryLogic, LotteryState, Operation,
    OperationSpec, Outcome, StorageSchema,
};

pub const TICKET_PRICE: i128 = 2_000_000_000_000_000;

#[contract]
pub struct TicketV2;

#[contractimpl]
impl LotteryLogic for TicketV2 {
    fn version(_env: Env) -> Symbol {
        symbol_short!("ticket_v2")
    }

    fn schema(env: Env) -> StorageSchema {
        lottery_schema(&env)
    }

    fn ticket_price(_env: Env) -> i128 {
        TICKET_PRICE
    }

    fn operations(env: Env) -> Vec<OperationSpec> {
        let mut ops = lottery::core_operations(&env);
        ops.push_back(OperationSpec::read(Operation::GetTicketPrice));
        ops.push_back(OperationSpec::read(Operation::GetSaleDeadline));
        ops
    }

    fn execute(env: Env, state: LotteryState, call: Call) -> Result<Outcome, Error> {
        match call.operation {
            Operation::GetTicketPrice => {
                let price = state.ticket_price;
                Ok(Outcome::read(state, CallOutput::Amount(price)))
            }
            Operation::GetSaleDeadline => {
                let deadline = state.sale_deadline;
                Ok(Outcome::read(state, CallOutput::Timestamp(deadline)))
            }
            _ => lottery::execute_core(&env, state, &call),
        }
    }
}
