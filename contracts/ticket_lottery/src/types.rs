//! Data types shared by the logic versions, the instance and the factory.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::address_set::AddressSet;

/// Operations an instance can forward to its logic.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Init,
    BuyTicket,
    PickSurpriseWinner,
    PickWinner,
    GetPlayers,
    GetWinningPrice,
    GetTicketPrice,
    GetSaleDeadline,
}

/// One entry of a logic version's operation table.
///
/// `payable` operations accept attached value; `mutating` operations require
/// the caller's authorization and have their resulting state written back.
/// Everything else is answered without touching instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationSpec {
    pub operation: Operation,
    pub payable: bool,
    pub mutating: bool,
}

impl OperationSpec {
    pub fn mutating(operation: Operation) -> Self {
        OperationSpec { operation, payable: false, mutating: true }
    }

    pub fn payable(operation: Operation) -> Self {
        OperationSpec { operation, payable: true, mutating: true }
    }

    pub fn read(operation: Operation) -> Self {
        OperationSpec { operation, payable: false, mutating: false }
    }
}

/// Persistent state of one lottery instance.
///
/// Field order is the storage layout every logic version must agree on
/// (see [`crate::lottery_schema`]).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryState {
    /// Set once by `init`; `None` until then.
    pub owner: Option<Address>,
    /// Restamped from the logic version on bind and on every upgrade.
    pub ticket_price: i128,
    /// Zero until `init`.
    pub sale_deadline: u64,
    pub players: AddressSet,
    pub pool: i128,
}

impl LotteryState {
    /// Zero-initialized state of a freshly bound instance.
    pub fn new(env: &Env, ticket_price: i128) -> Self {
        LotteryState {
            owner: None,
            ticket_price,
            sale_deadline: 0,
            players: AddressSet::new(env),
            pool: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        self.owner.as_ref() == Some(caller)
    }

    /// Open while `now < sale_deadline`; exactly at the deadline the sale is closed.
    pub fn is_open(&self, now: u64) -> bool {
        self.is_initialized() && now < self.sale_deadline
    }
}

/// A forwarded operation together with its caller and attached value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub operation: Operation,
    pub caller: Address,
    pub value: i128,
    /// Entropy contract configured on the instance, if any.
    pub entropy: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CallOutput {
    Unit,
    Players(Vec<Address>),
    Amount(i128),
    Timestamp(u64),
    Payout(Payout),
}

/// What a logic version hands back for one call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub state: LotteryState,
    pub output: CallOutput,
    pub event: Option<crate::events::LotteryEvent>,
}

impl Outcome {
    /// Outcome of a read: state passed through, nothing to publish.
    pub fn read(state: LotteryState, output: CallOutput) -> Self {
        Outcome { state, output, event: None }
    }
}

/// How the factory obtains the code of a new instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InstanceSource {
    /// Deploy uploaded instance wasm with a salt derived from the index.
    Wasm(BytesN<32>),
    /// Ask an [`crate::InstanceDeployer`] contract for the next instance.
    Deployer(Address),
}
