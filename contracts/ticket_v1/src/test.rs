extern crate std;

use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};
use ticket_lottery::{
    lottery_schema, Call, CallOutput, Error, LotteryState, Operation, OperationSpec,
};

use crate::{TicketV1, TicketV1Client, TICKET_PRICE};

fn setup() -> (Env, TicketV1Client<'static>) {
    let env = Env::default();
    let contract_id = env.register(TicketV1, ());
    let client = TicketV1Client::new(&env, &contract_id);
    (env, client)
}

fn call(env: &Env, operation: Operation, value: i128) -> Call {
    Call { operation, caller: Address::generate(env), value, entropy: None }
}

#[test]
fn test_describes_itself() {
    let (env, client) = setup();

    assert_eq!(client.version(), symbol_short!("ticket_v1"));
    assert_eq!(client.ticket_price(), TICKET_PRICE);
    assert_eq!(client.schema(), lottery_schema(&env));

    let ops = client.operations();
    assert_eq!(ops.len(), 6);
    assert!(ops.contains(OperationSpec::payable(Operation::BuyTicket)));
    assert!(ops.contains(OperationSpec::read(Operation::GetWinningPrice)));
}

#[test]
fn test_execute_returns_next_state_without_storing_it() {
    let (env, client) = setup();
    let state = LotteryState::new(&env, TICKET_PRICE);
    let init = call(&env, Operation::Init, 0);

    let outcome = client.execute(&state, &init);
    assert!(outcome.state.is_owner(&init.caller));
    assert!(outcome.event.is_some());

    // The logic holds nothing: the original state can be initialized again.
    let again = client.execute(&state, &call(&env, Operation::Init, 0));
    assert!(again.state.is_initialized());
    assert_eq!(
        client.try_execute(&outcome.state, &call(&env, Operation::Init, 0)),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_v2_only_reads_are_unknown() {
    let (env, client) = setup();
    let state = LotteryState::new(&env, TICKET_PRICE);

    assert_eq!(
        client.try_execute(&state, &call(&env, Operation::GetTicketPrice, 0)),
        Err(Ok(Error::UnknownOperation))
    );
    assert_eq!(
        client.execute(&state, &call(&env, Operation::GetWinningPrice, 0)).output,
        CallOutput::Amount(0)
    );
}
