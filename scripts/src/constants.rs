//! Constants used in the deploy scripts

/// The ABI of the MultiSigWallet contract
///
/// Compiled with the settings in [`crate::networks::COMPILER`]
pub const MULTISIG_WALLET_ABI: &str = include_str!("../artifacts/MultiSigWallet.abi");

/// The deployment bytecode of the MultiSigWallet contract
///
/// Compiled with the settings in [`crate::networks::COMPILER`]
pub const MULTISIG_WALLET_BYTECODE: &str = include_str!("../artifacts/MultiSigWallet.bin");

/// The number of confirmations to wait for on a deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The environment variable holding the block-explorer API key used for
/// contract source verification
pub const EXPLORER_API_KEY_ENV_VAR: &str = "BSCKEY";

/// The native token in which deployment gas costs are reported
pub const GAS_REPORT_TOKEN: &str = "BNB";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The multisig wallet contract key in the deployments file
pub const MULTISIG_WALLET_CONTRACT_KEY: &str = "multisig_wallet_contract";
