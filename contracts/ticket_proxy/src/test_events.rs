extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, Symbol, TryFromVal, TryIntoVal,
};
use ticket_lottery::events::{Initialized, LogicUpgraded, TicketBought};
use ticket_lottery::testutils::ScriptedEntropy;
use ticket_lottery::{Error, Payout, SALE_WINDOW};
use ticket_v1::{TicketV1, TICKET_PRICE};
use ticket_v2::TicketV2;

use crate::{TicketProxy, TicketProxyClient};

fn setup() -> (Env, TicketProxyClient<'static>, token::Client<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let addr = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = token::Client::new(&env, &addr.address());
    let picks = env.register(ScriptedEntropy, ());
    let contract_id = env.register(TicketProxy, ());
    let client = TicketProxyClient::new(&env, &contract_id);
    let factory = Address::generate(&env);
    client.bind(&factory, &env.register(TicketV1, ()), &token.address, &Some(picks));
    (env, client, token, factory)
}

fn setup_with_init() -> (Env, TicketProxyClient<'static>, token::Client<'static>, Address) {
    let (env, client, token, _) = setup();
    let owner = Address::generate(&env);
    client.init(&owner);
    (env, client, token, owner)
}

fn funded(env: &Env, token: &token::Client, n: usize) -> std::vec::Vec<Address> {
    let minter = token::StellarAssetClient::new(env, &token.address);
    (0..n)
        .map(|_| {
            let account = Address::generate(env);
            minter.mint(&account, &TICKET_PRICE);
            account
        })
        .collect()
}

#[test]
fn test_init_event() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    client.init(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, vec![&env, symbol_short!("init").into_val(&env)]);
    let event_data: Initialized = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Initialized { owner, sale_deadline: env.ledger().timestamp() + SALE_WINDOW }
    );
}

#[test]
fn test_ticket_bought_event() {
    let (env, client, token, _) = setup_with_init();
    let player = funded(&env, &token, 1).remove(0);
    client.buy_ticket(&player, &TICKET_PRICE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("bought"), player)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("bought").into_val(&env),
        player.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: TicketBought = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, TicketBought { player, price: TICKET_PRICE });
}

#[test]
fn test_surprise_winner_event() {
    let (env, client, token, owner) = setup_with_init();
    let player = funded(&env, &token, 1).remove(0);
    client.buy_ticket(&player, &TICKET_PRICE);

    let payout = client.pick_surprise_winner(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("surprise").into_val(&env), player.into_val(&env)]
    );
    let event_data: Payout = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, payout);
    assert_eq!(event_data.amount, TICKET_PRICE / 2);
}

#[test]
fn test_winner_event() {
    let (env, client, token, owner) = setup_with_init();
    let players = funded(&env, &token, 2);
    for player in &players {
        client.buy_ticket(player, &TICKET_PRICE);
    }
    env.ledger().with_mut(|li| li.timestamp += SALE_WINDOW);

    let payout = client.pick_winner(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("winner").into_val(&env), payout.winner.into_val(&env)]
    );
    let event_data: Payout = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.amount, 2 * TICKET_PRICE);
}

#[test]
fn test_failed_call_publishes_nothing() {
    let (env, client, token, _) = setup_with_init();
    let player = funded(&env, &token, 1).remove(0);

    assert_eq!(
        client.try_buy_ticket(&player, &(TICKET_PRICE + 1)),
        Err(Ok(Error::WrongPrice))
    );

    let published = env.events().all().iter().any(|(contract, topics, _)| {
        let topic = topics.first().and_then(|t| Symbol::try_from_val(&env, &t).ok());
        contract == client.address && topic == Some(symbol_short!("bought"))
    });
    assert!(!published);
}

#[test]
fn test_upgraded_event() {
    let (env, client, _, factory) = setup();
    let v1 = client.get_implementation();
    let v2 = env.register(TicketV2, ());

    client.upgrade(&factory, &v2);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, vec![&env, symbol_short!("upgraded").into_val(&env)]);
    let event_data: LogicUpgraded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, LogicUpgraded { from: v1, to: v2 });
}

#[test]
fn test_upgrade_restricted_to_binding_factory() {
    let (env, client, _, _) = setup();
    let v2 = env.register(TicketV2, ());
    let intruder = Address::generate(&env);

    assert_eq!(client.try_upgrade(&intruder, &v2), Err(Ok(Error::NotOwner)));
    assert_ne!(client.get_implementation(), v2);
}
