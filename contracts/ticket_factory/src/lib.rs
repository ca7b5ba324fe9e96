//! # Ticket Factory
//!
//! Deploys lottery instances bound to the current ticket logic, records them
//! by dense index and retargets their logic pointer on upgrade.
//!
//! | Phase        | Entry Point(s)                                      |
//! |--------------|-----------------------------------------------------|
//! | Bootstrap    | `__constructor`                                     |
//! | Instances    | [`TicketFactory::create`], `get_proxy_address`, `instance_count` |
//! | Upgrades     | [`TicketFactory::update_ticket`], [`TicketFactory::update_instance`] |
//! | Queries      | `current_logic`, `admin`                            |
//!
//! `update_ticket` is a broadcast: every existing instance and every future
//! one moves to the new logic. `update_instance` moves a single instance.
//! Both are admin-only and all-or-nothing.

#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env};
use ticket_lottery::{
    events, resolve_logic, settle, Error, InstanceDeployerClient, InstanceSource,
    LotteryInstanceClient,
};

mod storage;

#[cfg(test)]
mod test_events;

#[contract]
pub struct TicketFactory;

#[contractimpl]
impl TicketFactory {
    /// - `admin` may upgrade instances.
    /// - `logic` must be a deployed ticket logic; it is bound to new instances.
    /// - `entropy`, when set, is handed to every instance as its draw source.
    pub fn __constructor(
        env: Env,
        admin: Address,
        token: Address,
        logic: Address,
        source: InstanceSource,
        entropy: Option<Address>,
    ) {
        if let Err(error) = resolve_logic(&env, &logic) {
            panic_with_error!(&env, error);
        }
        storage::init(&env, &admin, &token, &logic, &source, &entropy);
    }

    /// Deploy a new instance bound to the current logic. Returns its index.
    pub fn create(env: Env) -> Result<u32, Error> {
        let index = storage::instance_count(&env);
        let salt = salt_for(&env, index);
        let instance = match storage::source(&env)? {
            InstanceSource::Wasm(wasm_hash) => env
                .deployer()
                .with_current_contract(salt)
                .deploy_v2(wasm_hash, ()),
            InstanceSource::Deployer(deployer) => {
                InstanceDeployerClient::new(&env, &deployer).deploy(&salt)
            }
        };

        let logic = storage::current_logic(&env)?;
        settle(
            LotteryInstanceClient::new(&env, &instance).try_bind(
                &env.current_contract_address(),
                &logic,
                &storage::token(&env)?,
                &storage::entropy(&env),
            ),
            Error::NotBound,
        )?;

        let index = storage::push_instance(&env, &instance);
        events::publish_instance_created(&env, index, instance, logic);
        Ok(index)
    }

    pub fn get_proxy_address(env: Env, index: u32) -> Result<Address, Error> {
        storage::instance(&env, index)
    }

    pub fn instance_count(env: Env) -> u32 {
        storage::instance_count(&env)
    }

    pub fn current_logic(env: Env) -> Result<Address, Error> {
        storage::current_logic(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::admin(&env)
    }

    /// Move every instance, and all future ones, to `logic`.
    ///
    /// Fails without changing anything if any instance refuses the new
    /// logic (e.g. `IncompatibleSchema`).
    pub fn update_ticket(env: Env, caller: Address, logic: Address) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        resolve_logic(&env, &logic)?;

        for index in 0..storage::instance_count(&env) {
            retarget(&env, index, &logic)?;
        }
        storage::set_current_logic(&env, &logic);
        Ok(())
    }

    /// Move the instance at `index` to `logic`. Other instances and the
    /// logic used for new instances are unchanged.
    pub fn update_instance(
        env: Env,
        caller: Address,
        index: u32,
        logic: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        retarget(&env, index, &logic)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if storage::admin(env)? != *caller {
        return Err(Error::NotOwner);
    }
    Ok(())
}

fn retarget(env: &Env, index: u32, logic: &Address) -> Result<(), Error> {
    let instance = storage::instance(env, index)?;
    settle(
        LotteryInstanceClient::new(env, &instance)
            .try_upgrade(&env.current_contract_address(), logic),
        Error::LogicFailed,
    )
}

/// Index in the last four bytes, big-endian.
fn salt_for(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}
