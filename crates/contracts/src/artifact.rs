//! Compiled contract artifacts, resolved by contract name.

use std::{collections::HashMap, sync::OnceLock};

use alloy::primitives::Bytes;
use serde::Deserialize;

const TOKEN_PATH_ARTIFACT: &str = include_str!("../artifacts/TokenPath.json");

/// A compiled contract artifact as emitted by the contract build pipeline.
///
/// Only the fields the deployment tooling consumes are deserialized; the
/// rest of the artifact file is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name the artifact is registered under.
    pub contract_name: String,
    /// Contract ABI, kept as raw JSON.
    pub abi: serde_json::Value,
    /// Creation bytecode.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Creation bytecode with the ABI-encoded constructor arguments
    /// appended, i.e. the input of the deployment transaction.
    pub fn deploy_code(&self, ctor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + ctor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(ctor_args);
        code.into()
    }
}

fn registry() -> &'static HashMap<&'static str, ContractArtifact> {
    static REGISTRY: OnceLock<HashMap<&'static str, ContractArtifact>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let token_path: ContractArtifact = serde_json::from_str(TOKEN_PATH_ARTIFACT)
            .expect("checked-in TokenPath artifact must parse");
        HashMap::from([("TokenPath", token_path)])
    })
}

/// Look up the compiled artifact registered under `name`.
pub fn artifact(name: &str) -> Option<&'static ContractArtifact> {
    registry().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_path_artifact_resolves() {
        let artifact = artifact("TokenPath").unwrap();
        assert_eq!(artifact.contract_name, "TokenPath");
        assert!(!artifact.bytecode.is_empty());
        assert!(artifact.abi.is_array());
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(artifact("TokenPathFactory").is_none());
    }

    #[test]
    fn deploy_code_appends_ctor_args() {
        let artifact = artifact("TokenPath").unwrap();
        let args = [0x11u8; 32];

        let code = artifact.deploy_code(&args);

        assert_eq!(code.len(), artifact.bytecode.len() + args.len());
        assert!(code.starts_with(&artifact.bytecode));
        assert!(code.ends_with(&args));
    }

    #[test]
    fn deploy_code_without_args_is_the_bare_bytecode() {
        let artifact = artifact("TokenPath").unwrap();
        assert_eq!(artifact.deploy_code(&[]), artifact.bytecode);
    }
}
