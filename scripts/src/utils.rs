//! Utilities for the deploy scripts

use std::{env, fs, path::PathBuf, str::FromStr, sync::Arc};

use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;

use crate::{
    constants::{DEPLOYMENTS_KEY, EXPLORER_API_KEY_ENV_VAR},
    errors::{ConfigError, DeployError},
    networks::NetworkProfile,
};

/// Read the deployer's signing key from the profile's environment variable
///
/// Checked before any client is constructed, so a missing key never results
/// in RPC traffic.
pub fn signing_key_from_env(profile: &NetworkProfile) -> Result<String, ConfigError> {
    env::var(profile.signing_key_env)
        .map_err(|_| ConfigError::MissingEnvVar(profile.signing_key_env.to_string()))
}

/// The block-explorer verification API key, if one is configured
pub fn verification_api_key() -> Option<String> {
    env::var(EXPLORER_API_KEY_ENV_VAR).ok()
}

/// Set up the client with which to submit deployment transactions
///
/// The chain id is taken from the network profile rather than queried over RPC.
pub fn setup_client(
    priv_key: &str,
    rpc_url: &str,
    chain_id: u64,
) -> Result<Arc<impl Middleware>, DeployError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

    Ok(Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    )))
}

/// Parse the deployments file as JSON
fn get_json_from_file(file_path: &str) -> Result<JsonValue, DeployError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| DeployError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| DeployError::ReadDeployments(e.to_string()))
}

/// Record a deployed contract address in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), DeployError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;

    Ok(())
}

/// Read a previously recorded contract address from the deployments file
pub fn deployed_address_from_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, DeployError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                DeployError::ReadDeployments(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| DeployError::ReadDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use ethers::abi::Address;

    use super::{
        deployed_address_from_file, setup_client, signing_key_from_env, write_deployed_address,
    };
    use crate::{
        constants::MULTISIG_WALLET_CONTRACT_KEY,
        errors::{ConfigError, DeployError},
        networks::NetworkProfile,
    };

    #[test]
    fn missing_private_key_is_a_config_error() {
        let profile = NetworkProfile {
            name: "develop",
            rpc_url: "http://127.0.0.1:8545",
            chain_id: 1337,
            signing_key_env: "PRIVATE_KEY_THAT_IS_NEVER_SET",
        };

        match signing_key_from_env(&profile) {
            Err(ConfigError::MissingEnvVar(var)) => {
                assert_eq!(var, "PRIVATE_KEY_THAT_IS_NEVER_SET")
            }
            _ => panic!("expected a missing env var error"),
        }
    }

    #[test]
    fn invalid_private_key_is_rejected_without_rpc() {
        match setup_client("not-a-key", "http://127.0.0.1:8545", 1337) {
            Err(DeployError::ClientInitialization(_)) => {}
            _ => panic!("expected a client initialization error"),
        }
    }

    #[test]
    fn deployments_file_round_trip() {
        let path = env::temp_dir().join("multisig_wallet_deployments_test.json");
        let path = path.to_str().unwrap();
        let _ = fs::remove_file(path);

        let address = Address::from_low_u64_be(0x42);
        write_deployed_address(path, MULTISIG_WALLET_CONTRACT_KEY, address).unwrap();

        let read_back = deployed_address_from_file(path, MULTISIG_WALLET_CONTRACT_KEY).unwrap();
        assert_eq!(read_back, address);

        fs::remove_file(path).unwrap();
    }
}
