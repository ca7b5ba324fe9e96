//! One full lottery round, start to finish.
//!
//! Registers the V1 ticket logic and a factory in a local Soroban sandbox,
//! creates and initializes one instance, has every configured account buy a
//! ticket, pays a surprise winner, waits out the sale window and pays the
//! round winner.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig, Ledger},
    token, vec, Address, Env, InvokeError,
};
use tracing::info;

use ticket_factory::{TicketFactory, TicketFactoryClient};
use ticket_lottery::testutils::{PreparedDeployer, SeededEntropy};
use ticket_lottery::{settle, Error, InstanceSource, Payout, SALE_WINDOW};
use ticket_proxy::{TicketProxy, TicketProxyClient};
use ticket_v1::{TicketV1, TICKET_PRICE};

use crate::config::Config;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutSummary {
    pub winner: String,
    pub amount: i128,
}

impl From<Payout> for PayoutSummary {
    fn from(payout: Payout) -> Self {
        PayoutSummary { winner: format!("{:?}", payout.winner), amount: payout.amount }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub instance: String,
    pub players: u32,
    pub pool_after_sales: i128,
    pub surprise: PayoutSummary,
    pub pool_after_surprise: i128,
    pub winner: PayoutSummary,
    pub pool_after_round: i128,
    pub finished_at: u64,
}

type TryResult<T, C> =
    std::result::Result<std::result::Result<T, C>, std::result::Result<Error, InvokeError>>;

/// Unwraps a `try_*` client call into the runner's error type.
fn invoke<T, C>(result: TryResult<T, C>) -> Result<T> {
    Ok(settle(result, Error::LogicFailed)?)
}

/// Local sandbox: every signature is mocked and no test snapshot is written.
fn sandbox() -> Env {
    let env = Env::new_with_config(EnvTestConfig { capture_snapshot_at_drop: false });
    env.mock_all_auths();
    env
}

pub async fn run(config: &Config) -> Result<RunSummary> {
    let env = sandbox();
    if config.real_time {
        sync_wall_clock(&env, wall_clock_now());
    }

    let owner = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(owner.clone());
    let token = token::Client::new(&env, &sac.address());
    let minter = token::StellarAssetClient::new(&env, &token.address);
    let mut accounts = Vec::with_capacity(config.player_count);
    for _ in 0..config.player_count {
        let account = Address::generate(&env);
        minter.mint(&account, &config.player_funds);
        accounts.push(account);
    }

    let ticket = env.register(TicketV1, ());
    info!("Ticket (v1) logic has been deployed to: {ticket:?}");

    let ready = vec![&env, env.register(TicketProxy, ())];
    let deployer = env.register(PreparedDeployer, (ready,));
    let entropy = config
        .entropy_seed
        .map(|seed| env.register(SeededEntropy, (seed,)));
    let factory_id = env.register(
        TicketFactory,
        (
            owner.clone(),
            token.address.clone(),
            ticket.clone(),
            InstanceSource::Deployer(deployer),
            entropy,
        ),
    );
    let factory = TicketFactoryClient::new(&env, &factory_id);
    info!("Ticket factory has been deployed to: {factory_id:?}");

    let index = invoke(factory.try_create())?;
    let instance = invoke(factory.try_get_proxy_address(&index))?;
    info!("First ticket proxy has been deployed to: {instance:?}");

    let client = TicketProxyClient::new(&env, &instance);
    let sale_deadline = env.ledger().timestamp() + SALE_WINDOW;
    invoke(client.try_init(&owner))?;
    for account in &accounts {
        invoke(client.try_buy_ticket(account, &TICKET_PRICE))?;
    }

    let players = invoke(client.try_get_players())?.len();
    info!("{players} players have entered the lottery.");

    let pool_after_sales = invoke(client.try_get_winning_price())?;
    info!("Current winning price is {pool_after_sales} units");

    let surprise = invoke(client.try_pick_surprise_winner(&owner))?;
    info!(
        winner = ?surprise.winner,
        amount = surprise.amount,
        "A surprise winner has been chosen."
    );

    let pool_after_surprise = invoke(client.try_get_winning_price())?;
    info!("The new winning price is {pool_after_surprise} units");

    wait_for_close(&env, sale_deadline, config.real_time).await;

    let winner = invoke(client.try_pick_winner(&owner))?;
    info!(
        winner = ?winner.winner,
        amount = winner.amount,
        "The round winner has been chosen."
    );

    let pool_after_round = invoke(client.try_get_winning_price())?;
    info!("The new winning price is {pool_after_round} units");

    let summary = RunSummary {
        instance: format!("{instance:?}"),
        players,
        pool_after_sales,
        surprise: surprise.into(),
        pool_after_surprise,
        winner: winner.into(),
        pool_after_round,
        finished_at: env.ledger().timestamp(),
    };

    if let Some(path) = &config.summary_out {
        let json = serde_json::to_vec_pretty(&summary)?;
        tokio::fs::write(path, json).await?;
        info!(path = %path.display(), "run summary written");
    }

    Ok(summary)
}

/// Moves the sandbox clock forward to `now` (unix seconds). The clock never
/// goes backwards, even if the wall clock does. Returns the resulting time.
pub fn sync_wall_clock(env: &Env, now: u64) -> u64 {
    env.ledger()
        .with_mut(|li| li.timestamp = li.timestamp.max(now));
    env.ledger().timestamp()
}

fn wall_clock_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

async fn wait_for_close(env: &Env, sale_deadline: u64, real_time: bool) {
    let remaining = sale_deadline.saturating_sub(env.ledger().timestamp());
    if remaining == 0 {
        return;
    }
    if real_time {
        info!("Waiting for lottery to finish. This will take around {remaining}s...");
        tokio::time::sleep(Duration::from_secs(remaining)).await;
        while sync_wall_clock(env, wall_clock_now()) < sale_deadline {
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    } else {
        info!("Fast-forwarding {remaining}s to the end of the sale (window {SALE_WINDOW}s)");
        env.ledger().with_mut(|li| li.timestamp = sale_deadline);
    }
}
