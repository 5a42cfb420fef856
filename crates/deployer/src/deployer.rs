//! The deployment runner: resolve an artifact, submit the create
//! transaction, await confirmation, surface the deployed address.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, B256, U256, utils::Unit},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolValue,
};
use tokenpath_contracts::artifact;
use tracing::info;

use crate::{config::DeployConfig, error::DeployError};

/// Tokens minted to the deployer at construction, in whole tokens.
pub const INITIAL_SUPPLY_TOKENS: u64 = 1_000_000;

/// The TokenPath constructor argument: one million tokens scaled to the
/// smallest denomination (18 decimals).
pub fn initial_supply() -> U256 {
    U256::from(INITIAL_SUPPLY_TOKENS) * Unit::ETHER.wei()
}

/// A confirmed contract deployment.
#[derive(Debug, Clone)]
pub struct Deployed {
    /// Contract name the artifact was resolved under.
    pub contract: String,
    /// On-chain address of the deployed contract.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub tx_hash: B256,
    /// Block the deployment transaction was included in.
    pub block_number: Option<u64>,
}

/// One-shot contract deployer over a wallet-backed provider.
pub struct Deployer<P> {
    provider: P,
    config: DeployConfig,
}

impl<P: Provider> Deployer<P> {
    pub fn new(provider: P, config: DeployConfig) -> Self {
        Self { provider, config }
    }

    /// Deploy the TokenPath token with its fixed initial supply.
    pub async fn deploy_token_path(&self) -> Result<Deployed, DeployError> {
        self.deploy("TokenPath", &initial_supply().abi_encode())
            .await
    }

    /// Deploy the named contract with pre-encoded constructor arguments.
    ///
    /// Submits exactly one transaction. Any failure is terminal; the caller
    /// decides whether to run again.
    pub async fn deploy(&self, name: &str, ctor_args: &[u8]) -> Result<Deployed, DeployError> {
        let artifact = artifact(name).ok_or_else(|| DeployError::UnknownContract {
            name: name.to_string(),
        })?;

        let tx = TransactionRequest::default()
            .into_create()
            .input(artifact.deploy_code(ctor_args).into());

        info!(contract = %name, "submitting deployment transaction");

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(DeployError::Submit)?;
        let tx_hash = *pending.tx_hash();

        let receipt = tokio::time::timeout(
            self.config.confirmation_timeout,
            pending
                .with_required_confirmations(self.config.confirmations)
                .get_receipt(),
        )
        .await
        .map_err(|_| DeployError::ConfirmationTimeout {
            tx_hash,
            timeout: self.config.confirmation_timeout,
        })?
        .map_err(DeployError::Confirmation)?;

        if !receipt.status() {
            return Err(DeployError::Reverted { tx_hash });
        }

        let address = receipt
            .contract_address
            .ok_or(DeployError::MissingContractAddress { tx_hash })?;

        info!(
            contract = %name,
            %address,
            %tx_hash,
            block_number = receipt.block_number,
            "contract deployed"
        );

        Ok(Deployed {
            contract: name.to_string(),
            address,
            tx_hash,
            block_number: receipt.block_number,
        })
    }
}
