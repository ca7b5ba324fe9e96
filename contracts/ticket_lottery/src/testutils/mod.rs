//! Test-only contracts: deterministic entropy and a pre-registered instance
//! deployer. Enabled for unit tests and behind the `testutils` feature.

pub mod deployer;
pub mod scripted;
pub mod seeded;

pub use deployer::{PreparedDeployer, PreparedDeployerClient};
pub use scripted::{ScriptedEntropy, ScriptedEntropyClient};
pub use seeded::{SeededEntropy, SeededEntropyClient};
