use alloy::{
    network::EthereumWallet, providers::ProviderBuilder, signers::local::PrivateKeySigner,
};
use clap::Parser;
use eyre::{OptionExt as _, WrapErr as _};
use opts::DeployArgs;
use tokenpath_deployer::{DeployConfig, Deployed, Deployer};

mod opts;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = DeployArgs::parse();

    match run(args).await {
        Ok(deployed) => {
            println!("✅ TokenPath deployed to: {}", deployed.address);
        }
        Err(err) => {
            eprintln!("❌ Deployment failed: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run(args: DeployArgs) -> eyre::Result<Deployed> {
    let mut config = match &args.config {
        Some(path) => DeployConfig::load(path)?,
        None => DeployConfig::default_test_config(),
    };
    if let Some(rpc_url) = args.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(private_key) = args.private_key {
        config.deployer_key = Some(private_key);
    }
    if let Some(timeout) = args.timeout {
        config.confirmation_timeout = timeout;
    }
    if let Some(confirmations) = args.confirmations {
        config.confirmations = confirmations;
    }

    let key = config
        .deployer_key
        .as_deref()
        .ok_or_eyre("no deployer key: set `deployer_key` in the config or pass --private-key")?;
    let signer: PrivateKeySigner = key.parse().wrap_err("failed to parse deployer private key")?;
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&config.rpc_url)
        .await
        .wrap_err_with(|| format!("failed to connect to `{}`", config.rpc_url))?;

    let deployer = Deployer::new(provider, config);
    Ok(deployer.deploy_token_path().await?)
}
