use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol};

use crate::interfaces::EntropySource;

const STATE: Symbol = symbol_short!("state");

/// Reproducible draws from a fixed seed (splitmix64).
#[contract]
pub struct SeededEntropy;

#[contractimpl]
impl SeededEntropy {
    pub fn __constructor(env: Env, seed: u64) {
        env.storage().instance().set(&STATE, &seed);
    }
}

#[contractimpl]
impl EntropySource for SeededEntropy {
    fn draw_index(env: Env, len: u32) -> u32 {
        let state: u64 = env.storage().instance().get(&STATE).unwrap_or(0);
        let next = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        env.storage().instance().set(&STATE, &next);

        let mut z = next;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        (z % u64::from(len)) as u32
    }
}
