use std::{path::PathBuf, time::Duration};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(version, about = "Deploys the TokenPath token contract", long_about = None)]
pub struct DeployArgs {
    /// Path to a deployment config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target chain RPC URL (overrides config)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Hex-encoded deployer private key (overrides config)
    #[arg(long, env = "DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Maximum time to wait for confirmation, e.g. "90s" (overrides config)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Required confirmations (overrides config)
    #[arg(long)]
    pub confirmations: Option<u64>,
}
