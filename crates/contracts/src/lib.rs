//! TokenPath contract bindings and deployment artifacts.
//!
//! The deployment tooling treats contract bytecode as opaque: artifacts are
//! checked in as compiler output under `artifacts/` and resolved by contract
//! name, the same way the build pipeline that produced them lays them out.

mod artifact;
mod token_path;

pub use artifact::{ContractArtifact, artifact};
pub use token_path::ITokenPath;
