//! Static network and build profiles
//!
//! The network table is the single source of truth for where deployments can
//! go; adding a network is a new row, not a new code path.

use crate::{constants::PRIVATE_KEY_ENV_VAR, errors::ConfigError};

/// Connection parameters for a supported deployment network
#[derive(Debug)]
pub struct NetworkProfile {
    /// The name by which the network is selected on the command line
    pub name: &'static str,
    /// The HTTP RPC endpoint of the network
    pub rpc_url: &'static str,
    /// The canonical chain id of the network
    pub chain_id: u64,
    /// The environment variable holding the deployer's signing key
    pub signing_key_env: &'static str,
}

/// The table of supported networks
pub const NETWORKS: &[NetworkProfile] = &[
    NetworkProfile {
        name: "develop",
        rpc_url: "http://127.0.0.1:8545",
        chain_id: 1337,
        signing_key_env: PRIVATE_KEY_ENV_VAR,
    },
    NetworkProfile {
        name: "goerli",
        rpc_url: "https://rpc.ankr.com/eth_goerli",
        chain_id: 5,
        signing_key_env: PRIVATE_KEY_ENV_VAR,
    },
    NetworkProfile {
        name: "ethereum",
        rpc_url: "https://rpc.ankr.com/eth",
        chain_id: 1,
        signing_key_env: PRIVATE_KEY_ENV_VAR,
    },
    NetworkProfile {
        name: "bsc",
        rpc_url: "https://bsc-dataseed.binance.org/",
        chain_id: 56,
        signing_key_env: PRIVATE_KEY_ENV_VAR,
    },
    NetworkProfile {
        name: "bscTest",
        rpc_url: "https://data-seed-prebsc-2-s1.bnbchain.org:8545/",
        chain_id: 97,
        signing_key_env: PRIVATE_KEY_ENV_VAR,
    },
];

/// Resolve a network name to its profile
///
/// An unrecognized name is an error; there is no default network.
pub fn resolve_network(name: &str) -> Result<&'static NetworkProfile, ConfigError> {
    NETWORKS
        .iter()
        .find(|profile| profile.name == name)
        .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
}

/// Solidity compiler settings the bundled artifacts were built with
#[derive(Debug)]
pub struct CompilerProfile {
    /// The solc release version
    pub solc_version: &'static str,
    /// Whether the optimizer was enabled
    pub optimizer_enabled: bool,
    /// The optimizer `runs` setting
    pub optimizer_runs: u32,
}

/// The compiler configuration, fixed for all networks
pub const COMPILER: CompilerProfile = CompilerProfile {
    solc_version: "0.8.17",
    optimizer_enabled: true,
    optimizer_runs: 200,
};

#[cfg(test)]
mod tests {
    use super::{resolve_network, COMPILER, NETWORKS};
    use crate::errors::ConfigError;

    #[test]
    fn resolves_all_configured_networks() {
        for profile in NETWORKS {
            let resolved = resolve_network(profile.name).unwrap();
            assert_eq!(resolved.name, profile.name);
            assert_eq!(resolved.chain_id, profile.chain_id);
        }
    }

    #[test]
    fn chain_ids_are_canonical() {
        let expected = [
            ("develop", 1337),
            ("goerli", 5),
            ("ethereum", 1),
            ("bsc", 56),
            ("bscTest", 97),
        ];
        for (name, chain_id) in expected {
            assert_eq!(resolve_network(name).unwrap().chain_id, chain_id);
        }
    }

    #[test]
    fn chain_ids_are_unique() {
        for (i, a) in NETWORKS.iter().enumerate() {
            for b in &NETWORKS[i + 1..] {
                assert_ne!(a.chain_id, b.chain_id);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn unknown_network_fails_fast() {
        match resolve_network("sepolia") {
            Err(ConfigError::UnknownNetwork(name)) => assert_eq!(name, "sepolia"),
            _ => panic!("expected an unknown network error"),
        }
    }

    #[test]
    fn compiler_profile_is_fixed() {
        assert_eq!(COMPILER.solc_version, "0.8.17");
        assert!(COMPILER.optimizer_enabled);
        assert_eq!(COMPILER.optimizer_runs, 200);
    }
}
