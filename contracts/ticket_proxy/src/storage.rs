//! # Storage
//!
//! Everything an instance keeps lives in instance storage:
//!
//! | Key              | Type             | Description                              |
//! |------------------|------------------|------------------------------------------|
//! | `Factory`        | `Address`        | Factory that bound this instance         |
//! | `Implementation` | `Address`        | Current logic version                    |
//! | `Token`          | `Address`        | Asset tickets are paid in                |
//! | `Entropy`        | `Address`        | Optional entropy contract                |
//! | `Schema`         | `StorageSchema`  | Layout recorded at bind / last upgrade   |
//! | `State`          | `LotteryState`   | Owner, price, deadline, players, pool    |
//!
//! TTL is bumped by **7 days** whenever it falls below 1 day remaining, on
//! writes only. Read paths leave storage untouched.

use soroban_sdk::{contracttype, Address, Env};
use ticket_lottery::{Error, LotteryState, StorageSchema};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Factory,
    Implementation,
    Token,
    Entropy,
    Schema,
    State,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_bound(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Factory)
}

pub fn save_binding(env: &Env, factory: &Address, token: &Address, entropy: &Option<Address>) {
    let store = env.storage().instance();
    store.set(&DataKey::Factory, factory);
    store.set(&DataKey::Token, token);
    if let Some(entropy) = entropy {
        store.set(&DataKey::Entropy, entropy);
    }
    bump_instance(env);
}

pub fn factory(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Factory)
        .ok_or(Error::NotBound)
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotBound)
}

pub fn entropy(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Entropy)
}

pub fn implementation(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Implementation)
        .ok_or(Error::NotBound)
}

pub fn set_implementation(env: &Env, logic: &Address) {
    env.storage().instance().set(&DataKey::Implementation, logic);
    bump_instance(env);
}

pub fn schema(env: &Env) -> Result<StorageSchema, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Schema)
        .ok_or(Error::NotBound)
}

pub fn set_schema(env: &Env, schema: &StorageSchema) {
    env.storage().instance().set(&DataKey::Schema, schema);
    bump_instance(env);
}

pub fn load_state(env: &Env) -> Result<LotteryState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotBound)
}

pub fn save_state(env: &Env, state: &LotteryState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}
