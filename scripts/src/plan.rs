//! Deployment plan construction: which contracts to instantiate for a network

use std::fmt::{self, Display};

use ethers::abi::{Address, Token};

use crate::{
    constants::{MULTISIG_WALLET_ABI, MULTISIG_WALLET_BYTECODE, MULTISIG_WALLET_CONTRACT_KEY},
    networks::NetworkProfile,
};

/// The contracts this repo knows how to deploy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContractArtifact {
    /// The multisig wallet contract
    MultiSigWallet,
}

impl ContractArtifact {
    /// The JSON ABI of the compiled contract
    pub fn abi(&self) -> &'static str {
        match self {
            ContractArtifact::MultiSigWallet => MULTISIG_WALLET_ABI,
        }
    }

    /// The hex-encoded deployment bytecode of the compiled contract
    pub fn bytecode(&self) -> &'static str {
        match self {
            ContractArtifact::MultiSigWallet => MULTISIG_WALLET_BYTECODE.trim(),
        }
    }

    /// The key under which the deployed address is recorded in the deployments file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            ContractArtifact::MultiSigWallet => MULTISIG_WALLET_CONTRACT_KEY,
        }
    }
}

impl Display for ContractArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractArtifact::MultiSigWallet => write!(f, "MultiSigWallet"),
        }
    }
}

/// A single contract instantiation
#[derive(Debug)]
pub struct DeploymentStep {
    /// The contract to instantiate
    pub contract: ContractArtifact,
    /// The ABI tokens passed to the contract's constructor
    pub constructor_args: Vec<Token>,
}

/// The ordered contract instantiations for one deployment run
///
/// Built per invocation and discarded once executed.
#[derive(Debug)]
pub struct DeploymentPlan {
    /// The steps of the plan, executed in order
    pub steps: Vec<DeploymentStep>,
}

/// Select the contracts to deploy on the given network
///
/// Every network currently receives the same plan: a single `MultiSigWallet`
/// instance with no constructor arguments. The branches are kept grouped by
/// network so that per-network constructor arguments remain a local change.
pub fn select_deployments(network: &NetworkProfile, _accounts: &[Address]) -> DeploymentPlan {
    let steps = match network.name {
        "develop" => vec![multisig_wallet_step()],
        "goerli" | "ethereum" => vec![multisig_wallet_step()],
        _ => vec![multisig_wallet_step()],
    };

    DeploymentPlan { steps }
}

/// A `MultiSigWallet` instantiation with no constructor arguments
fn multisig_wallet_step() -> DeploymentStep {
    DeploymentStep {
        contract: ContractArtifact::MultiSigWallet,
        constructor_args: vec![],
    }
}

#[cfg(test)]
mod tests {
    use ethers::abi::Contract;

    use super::{select_deployments, ContractArtifact};
    use crate::networks::{resolve_network, NETWORKS};

    #[test]
    fn every_network_gets_a_single_multisig_wallet() {
        for profile in NETWORKS {
            let plan = select_deployments(profile, &[]);
            assert_eq!(plan.steps.len(), 1);

            let step = &plan.steps[0];
            assert_eq!(step.contract, ContractArtifact::MultiSigWallet);
            assert!(step.constructor_args.is_empty());
        }
    }

    #[test]
    fn develop_plan_is_a_bare_multisig_wallet() {
        let profile = resolve_network("develop").unwrap();
        let plan = select_deployments(profile, &[]);

        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].contract.to_string(), "MultiSigWallet");
        assert!(plan.steps[0].constructor_args.is_empty());
    }

    #[test]
    fn multisig_wallet_artifact_resolves() {
        let abi: Contract = serde_json::from_str(ContractArtifact::MultiSigWallet.abi()).unwrap();
        // The wallet takes no constructor arguments
        assert!(abi
            .constructor
            .map(|c| c.inputs.is_empty())
            .unwrap_or(true));

        let bytecode = hex::decode(ContractArtifact::MultiSigWallet.bytecode()).unwrap();
        assert!(!bytecode.is_empty());
    }
}
