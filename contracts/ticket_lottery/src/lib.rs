//! # Ticket Lottery
//!
//! Shared core of the upgradeable ticket lottery. Nothing in this crate is a
//! deployable contract on its own; it carries what every contract in the
//! workspace agrees on:
//!
//! | Piece          | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | State          | [`LotteryState`], [`AddressSet`], [`StorageSchema`]         |
//! | Rules          | [`lottery`]: init, buy, surprise winner, final winner       |
//! | Wire types     | [`Operation`], [`Call`], [`CallOutput`], [`Outcome`]        |
//! | Interfaces     | [`LotteryLogic`], [`LotteryInstance`], [`InstanceDeployer`], [`EntropySource`] |
//! | Events         | [`events`]: topics and publish helpers                      |
//!
//! ## Architecture
//!
//! Logic versions (`ticket_v1`, `ticket_v2`) are stateless contracts. The
//! instance (`ticket_proxy`) owns the [`LotteryState`], hands it to its
//! current logic through [`LotteryLogicClient::execute`] and writes back the
//! returned state for mutating operations only. The factory
//! (`ticket_factory`) deploys instances and retargets their logic pointer.

#![no_std]

use soroban_sdk::contracterror;

mod address_set;
pub mod events;
mod interfaces;
pub mod lottery;
mod schema;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use address_set::AddressSet;
pub use interfaces::{
    resolve_logic, settle, EntropySource, EntropySourceClient, InstanceDeployer,
    InstanceDeployerClient, LotteryInstance, LotteryInstanceClient, LotteryLogic,
    LotteryLogicClient,
};
pub use lottery::SALE_WINDOW;
pub use schema::{lottery_schema, FieldKind, FieldLayout, StorageSchema};
pub use types::{
    Call, CallOutput, InstanceSource, LotteryState, Operation, OperationSpec, Outcome, Payout,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner            = 1,
    OwnerNotAllowed     = 2,
    SaleClosed          = 3,
    SaleStillActive     = 4,
    AlreadyInitialized  = 5,
    NoPlayers           = 6,
    WrongPrice          = 7,
    IndexOutOfRange     = 8,
    UnknownOperation    = 9,
    NotPayable          = 10,
    UnexpectedOutput    = 11,
    TransferFailed      = 12,
    UnknownLogic        = 13,
    IncompatibleSchema  = 14,
    // Instance binding:
    AlreadyBound        = 15,
    NotBound            = 16,
    LogicFailed         = 17,
}
