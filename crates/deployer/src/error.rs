//! Error taxonomy for the deployment runner.

use std::{io, path::PathBuf, time::Duration};

use alloy::{
    primitives::B256, providers::PendingTransactionError, transports::TransportError,
};

/// Failure loading a deployment configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure anywhere in the deploy sequence.
///
/// Every variant is terminal: the runner never retries. The deploy submits
/// one irreversible transaction, so the caller decides whether to run again.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// No compiled artifact is registered under the requested name.
    #[error("unknown contract `{name}`: no compiled artifact registered under that name")]
    UnknownContract { name: String },

    /// Submitting the deployment transaction failed.
    #[error("failed to submit deployment transaction")]
    Submit(#[source] TransportError),

    /// The confirmation watcher failed before the receipt arrived.
    #[error("failed to confirm deployment transaction")]
    Confirmation(#[source] PendingTransactionError),

    /// The receipt did not arrive within the configured timeout.
    #[error("deployment transaction {tx_hash} not confirmed within {timeout:?}")]
    ConfirmationTimeout { tx_hash: B256, timeout: Duration },

    /// The deployment transaction was mined but reverted.
    #[error("deployment transaction {tx_hash} reverted")]
    Reverted { tx_hash: B256 },

    /// The receipt carried no contract address.
    #[error("receipt for {tx_hash} is missing a contract address")]
    MissingContractAddress { tx_hash: B256 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_name_the_offender() {
        let err = DeployError::UnknownContract {
            name: "Nope".to_string(),
        };
        assert!(err.to_string().contains("`Nope`"));

        let tx_hash = B256::repeat_byte(0xab);
        let err = DeployError::ConfirmationTimeout {
            tx_hash,
            timeout: Duration::from_secs(60),
        };
        assert!(err.to_string().contains(&tx_hash.to_string()));

        let err = DeployError::Reverted { tx_hash };
        assert!(err.to_string().contains("reverted"));
    }
}
