//! End-to-end deployment tests.
//!
//! Tests requiring a local Anvil node are marked with `#[ignore]` for CI
//! compatibility.

use alloy::{
    network::EthereumWallet,
    node_bindings::Anvil,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use tokenpath_contracts::ITokenPath;
use tokenpath_deployer::{DeployConfig, DeployError, Deployer, initial_supply};

#[tokio::test]
#[ignore]
async fn deploys_token_path_and_reports_its_address() {
    let anvil = Anvil::new().try_spawn().unwrap();
    let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(anvil.endpoint_url());

    let mut config = DeployConfig::default_test_config();
    config.rpc_url = anvil.endpoint();

    let deployer = Deployer::new(provider.clone(), config);
    let deployed = deployer.deploy_token_path().await.unwrap();

    let code = provider.get_code_at(deployed.address).await.unwrap();
    assert!(!code.is_empty(), "deployed address must hold code");

    let token = ITokenPath::new(deployed.address, &provider);
    let supply = token.totalSupply().call().await.unwrap();
    assert_eq!(supply, initial_supply());
}

#[tokio::test]
async fn unreachable_endpoint_fails_submission() {
    // Nothing listens on port 1; the first RPC call errors out.
    let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:1".parse().unwrap());
    let deployer = Deployer::new(provider, DeployConfig::default_test_config());

    let err = deployer.deploy_token_path().await.unwrap_err();

    assert!(matches!(err, DeployError::Submit(_)));
}
