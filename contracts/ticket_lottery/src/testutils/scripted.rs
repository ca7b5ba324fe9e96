use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol, Vec};

use crate::interfaces::EntropySource;

const PICKS: Symbol = symbol_short!("picks");

/// Returns queued indices in order, `0` once the queue runs dry.
#[contract]
pub struct ScriptedEntropy;

fn queued(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&PICKS)
        .unwrap_or_else(|| Vec::new(env))
}

#[contractimpl]
impl ScriptedEntropy {
    pub fn push(env: Env, picks: Vec<u32>) {
        let mut queue = queued(&env);
        queue.append(&picks);
        env.storage().instance().set(&PICKS, &queue);
    }

    pub fn remaining(env: Env) -> u32 {
        queued(&env).len()
    }
}

#[contractimpl]
impl EntropySource for ScriptedEntropy {
    fn draw_index(env: Env, len: u32) -> u32 {
        let mut queue = queued(&env);
        let pick = queue.pop_front().unwrap_or(0);
        env.storage().instance().set(&PICKS, &queue);
        pick % len
    }
}
