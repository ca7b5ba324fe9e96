//! # Storage
//!
//! ## Instance storage
//!
//! | Key             | Type             | Description                            |
//! |-----------------|------------------|----------------------------------------|
//! | `Admin`         | `Address`        | Deployer; the only address allowed to upgrade |
//! | `Token`         | `Address`        | Asset every instance sells tickets in  |
//! | `Logic`         | `Address`        | Logic bound to newly created instances |
//! | `Source`        | `InstanceSource` | Where instance code comes from         |
//! | `Entropy`       | `Address`        | Optional entropy contract passed to instances |
//! | `InstanceCount` | `u32`            | Next instance index                    |
//!
//! ## Persistent storage
//!
//! | Key             | Type      | Description                      |
//! |-----------------|-----------|----------------------------------|
//! | `Instance(i)`   | `Address` | Instance created at index `i`    |
//!
//! Indices are dense, zero-based and never reused.

use soroban_sdk::{contracttype, Address, Env};
use ticket_lottery::{Error, InstanceSource};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Token,
    Logic,
    Source,
    Entropy,
    InstanceCount,
    Instance(u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn init(
    env: &Env,
    admin: &Address,
    token: &Address,
    logic: &Address,
    source: &InstanceSource,
    entropy: &Option<Address>,
) {
    let store = env.storage().instance();
    store.set(&DataKey::Admin, admin);
    store.set(&DataKey::Token, token);
    store.set(&DataKey::Logic, logic);
    store.set(&DataKey::Source, source);
    if let Some(entropy) = entropy {
        store.set(&DataKey::Entropy, entropy);
    }
    store.set(&DataKey::InstanceCount, &0u32);
    bump_instance(env);
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotBound)
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotBound)
}

pub fn source(env: &Env) -> Result<InstanceSource, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Source)
        .ok_or(Error::NotBound)
}

pub fn entropy(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Entropy)
}

pub fn current_logic(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Logic)
        .ok_or(Error::NotBound)
}

pub fn set_current_logic(env: &Env, logic: &Address) {
    env.storage().instance().set(&DataKey::Logic, logic);
    bump_instance(env);
}

pub fn instance_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::InstanceCount)
        .unwrap_or(0)
}

/// Appends `instance` to the registry and returns its index.
pub fn push_instance(env: &Env, instance: &Address) -> u32 {
    let index = instance_count(env);
    let key = DataKey::Instance(index);
    env.storage().persistent().set(&key, instance);
    bump_persistent(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::InstanceCount, &(index + 1));
    bump_instance(env);
    index
}

pub fn instance(env: &Env, index: u32) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Instance(index))
        .ok_or(Error::IndexOutOfRange)
}
