//! Cross-contract interfaces.
//!
//! Each trait generates a typed client (`*Client`) used by the contract on
//! the calling side; the implementing contract uses `#[contractimpl]` on the
//! trait itself so both sides stay in lockstep.

use soroban_sdk::{contractclient, Address, BytesN, Env, InvokeError, Symbol, Vec};

use crate::schema::StorageSchema;
use crate::types::{Call, LotteryState, OperationSpec, Outcome};
use crate::Error;

/// A published version of the lottery rules. Holds no state of its own.
#[contractclient(name = "LotteryLogicClient")]
pub trait LotteryLogic {
    fn version(env: Env) -> Symbol;

    /// Storage layout this version reads and writes.
    fn schema(env: Env) -> StorageSchema;

    fn ticket_price(env: Env) -> i128;

    fn operations(env: Env) -> Vec<OperationSpec>;

    /// Runs `call` against `state` and returns the next state. The caller
    /// decides whether that state is persisted.
    fn execute(env: Env, state: LotteryState, call: Call) -> Result<Outcome, Error>;
}

/// The factory-facing side of a lottery instance.
#[contractclient(name = "LotteryInstanceClient")]
pub trait LotteryInstance {
    /// One-time binding performed by the factory right after deployment.
    fn bind(
        env: Env,
        factory: Address,
        logic: Address,
        token: Address,
        entropy: Option<Address>,
    ) -> Result<(), Error>;

    /// Retargets the logic pointer. Only the binding factory may call this.
    fn upgrade(env: Env, factory: Address, logic: Address) -> Result<(), Error>;

    fn get_implementation(env: Env) -> Result<Address, Error>;
}

/// Hands out instance addresses to a factory.
#[contractclient(name = "InstanceDeployerClient")]
pub trait InstanceDeployer {
    fn deploy(env: Env, salt: BytesN<32>) -> Address;
}

/// Injectable winner draw.
#[contractclient(name = "EntropySourceClient")]
pub trait EntropySource {
    /// Returns an index; the caller reduces it modulo `len`.
    fn draw_index(env: Env, len: u32) -> u32;
}

/// Flattens a `try_*` client result.
///
/// A contract error raised by the callee is passed through unchanged; a
/// host-level failure maps to `fallback`.
pub fn settle<T, C>(
    result: Result<Result<T, C>, Result<Error, InvokeError>>,
    fallback: Error,
) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(Error::UnexpectedOutput),
        Err(Ok(error)) => Err(error),
        Err(Err(_)) => Err(fallback),
    }
}

/// Reads the schema and ticket price of a logic version, failing with
/// `UnknownLogic` when `logic` is not a deployed lottery logic.
pub fn resolve_logic(env: &Env, logic: &Address) -> Result<(StorageSchema, i128), Error> {
    let client = LotteryLogicClient::new(env, logic);
    let schema = match client.try_schema() {
        Ok(Ok(schema)) => schema,
        _ => return Err(Error::UnknownLogic),
    };
    let ticket_price = match client.try_ticket_price() {
        Ok(Ok(price)) => price,
        _ => return Err(Error::UnknownLogic),
    };
    Ok((schema, ticket_price))
}
