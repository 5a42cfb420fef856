//! Typed bindings for the TokenPath token contract.

use alloy::sol;

sol! {
    /// TokenPath token contract surface exercised by the deployment tooling.
    ///
    /// The constructor mints `initialSupply_` tokens, expressed in the
    /// contract's smallest denomination, to the deployer.
    #[sol(rpc)]
    interface ITokenPath {
        /// Total token supply in the smallest denomination.
        function totalSupply() external view returns (uint256);
    }
}
