extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};
use ticket_lottery::events::{InstanceCreated, LogicUpgraded};
use ticket_lottery::testutils::PreparedDeployer;
use ticket_lottery::InstanceSource;
use ticket_proxy::TicketProxy;
use ticket_v1::TicketV1;
use ticket_v2::TicketV2;

use crate::{TicketFactory, TicketFactoryClient};

fn setup() -> (Env, TicketFactoryClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token::Client::new(&env, &sac.address());
    let v1 = env.register(TicketV1, ());
    let ready = vec![&env, env.register(TicketProxy, ()), env.register(TicketProxy, ())];
    let deployer = env.register(PreparedDeployer, (ready,));
    let contract_id = env.register(
        TicketFactory,
        (
            admin.clone(),
            token.address.clone(),
            v1.clone(),
            InstanceSource::Deployer(deployer),
            None::<Address>,
        ),
    );
    let client = TicketFactoryClient::new(&env, &contract_id);
    (env, client, admin, v1)
}

#[test]
fn test_instance_created_event() {
    let (env, client, _, v1) = setup();
    client.create();
    let index = client.create();

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), index)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        index.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: InstanceCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        InstanceCreated { index: 1, instance: client.get_proxy_address(&1), logic: v1 }
    );
}

#[test]
fn test_instance_upgraded_event() {
    let (env, client, admin, v1) = setup();
    client.create();
    let v2 = env.register(TicketV2, ());

    client.update_instance(&admin, &0, &v2);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Published by the instance, not the factory.
    assert_eq!(last_event.0, client.get_proxy_address(&0));
    assert_eq!(last_event.1, vec![&env, symbol_short!("upgraded").into_val(&env)]);
    let event_data: LogicUpgraded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, LogicUpgraded { from: v1, to: v2 });
}
