//! Deployment runner for the TokenPath token contract.
//!
//! The runner takes everything a scripted deployment leaves ambient and makes
//! it explicit: a [`DeployConfig`] names the RPC endpoint, the signing key and
//! the confirmation policy, and a [`Deployer`] performs the one-shot deploy
//! sequence against any wallet-backed provider. No failure is retried; the
//! deploy submits exactly one transaction per run.

pub mod config;
pub mod deployer;
pub mod error;

pub use config::DeployConfig;
pub use deployer::{Deployed, Deployer, INITIAL_SUPPLY_TOKENS, initial_supply};
pub use error::{ConfigError, DeployError};
