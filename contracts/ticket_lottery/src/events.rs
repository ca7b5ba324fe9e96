//! # Events
//!
//! | Topic                    | Data               | Emitted by |
//! |--------------------------|--------------------|------------|
//! | `("init",)`              | [`Initialized`]    | instance   |
//! | `("bought", player)`     | [`TicketBought`]   | instance   |
//! | `("surprise", winner)`   | [`Payout`]         | instance   |
//! | `("winner", winner)`     | [`Payout`]         | instance   |
//! | `("upgraded",)`          | [`LogicUpgraded`]  | instance   |
//! | `("created", index)`     | [`InstanceCreated`]| factory    |
//!
//! Instance events are published after any payout transfer, so a lottery
//! event is always the last event of its call.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::Payout;

pub const INIT: Symbol = symbol_short!("init");
pub const BOUGHT: Symbol = symbol_short!("bought");
pub const SURPRISE: Symbol = symbol_short!("surprise");
pub const WINNER: Symbol = symbol_short!("winner");
pub const UPGRADED: Symbol = symbol_short!("upgraded");
pub const CREATED: Symbol = symbol_short!("created");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub owner: Address,
    pub sale_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketBought {
    pub player: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceCreated {
    pub index: u32,
    pub instance: Address,
    pub logic: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicUpgraded {
    pub from: Address,
    pub to: Address,
}

/// Event produced by a logic version, published by the instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LotteryEvent {
    Initialized(Initialized),
    TicketBought(TicketBought),
    SurpriseWinnerPaid(Payout),
    WinnerPaid(Payout),
}

pub fn publish_lottery_event(env: &Env, event: &LotteryEvent) {
    match event {
        LotteryEvent::Initialized(data) => env.events().publish((INIT,), data.clone()),
        LotteryEvent::TicketBought(data) => env
            .events()
            .publish((BOUGHT, data.player.clone()), data.clone()),
        LotteryEvent::SurpriseWinnerPaid(payout) => env
            .events()
            .publish((SURPRISE, payout.winner.clone()), payout.clone()),
        LotteryEvent::WinnerPaid(payout) => env
            .events()
            .publish((WINNER, payout.winner.clone()), payout.clone()),
    }
}

pub fn publish_logic_upgraded(env: &Env, from: Address, to: Address) {
    env.events().publish((UPGRADED,), LogicUpgraded { from, to });
}

pub fn publish_instance_created(env: &Env, index: u32, instance: Address, logic: Address) {
    env.events().publish(
        (CREATED, index),
        InstanceCreated { index, instance, logic },
    );
}
