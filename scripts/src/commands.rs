//! Implementations of the deploy script commands

use std::sync::Arc;

use ethers::{
    abi::Contract, contract::ContractFactory, providers::Middleware, types::Bytes,
    utils::hex::FromHex,
};
use tracing::info;

use crate::{
    cli::DeployArgs,
    constants::{EXPLORER_API_KEY_ENV_VAR, GAS_REPORT_TOKEN, NUM_DEPLOY_CONFIRMATIONS},
    errors::{DeployError, ScriptError},
    networks::{NetworkProfile, COMPILER},
    plan::{select_deployments, DeploymentStep},
    utils::{verification_api_key, write_deployed_address},
};

/// Log the deployment plan for the given network without submitting anything
pub fn show_plan(profile: &NetworkProfile) {
    info!(
        "deployment plan for {} (chain id {}, rpc {})",
        profile.name, profile.chain_id, profile.rpc_url
    );
    info!(
        "artifacts compiled with solc {} (optimizer {}, {} runs)",
        COMPILER.solc_version,
        if COMPILER.optimizer_enabled { "on" } else { "off" },
        COMPILER.optimizer_runs,
    );
    if verification_api_key().is_none() {
        info!(
            "explorer verification key ({}) is not set",
            EXPLORER_API_KEY_ENV_VAR
        );
    }

    let plan = select_deployments(profile, &[]);
    for (i, step) in plan.steps.iter().enumerate() {
        info!(
            "{}. deploy {} with {} constructor args",
            i + 1,
            step.contract,
            step.constructor_args.len(),
        );
    }
}

/// Execute the deployment plan for the given network
///
/// Steps are submitted in plan order, each awaited to completion; the first
/// failure aborts the run.
pub async fn deploy(
    args: DeployArgs,
    profile: &NetworkProfile,
    client: Arc<impl Middleware>,
) -> Result<(), ScriptError> {
    let accounts: Vec<_> = client.default_sender().into_iter().collect();
    let plan = select_deployments(profile, &accounts);

    for step in plan.steps {
        deploy_step(step, &args.deployments_path, client.clone()).await?;
    }

    Ok(())
}

/// Deploy a single contract of the plan and record its address
async fn deploy_step(
    step: DeploymentStep,
    deployments_path: &str,
    client: Arc<impl Middleware>,
) -> Result<(), DeployError> {
    let abi: Contract = serde_json::from_str(step.contract.abi())
        .map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(step.contract.bytecode())
        .map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client);

    let (contract, receipt) = factory
        .deploy_tokens(step.constructor_args)
        .map_err(|e| DeployError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send_with_receipt()
        .await
        .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;

    info!("{} deployed at {:#x}", step.contract, contract.address());
    if let (Some(gas), Some(price)) = (receipt.gas_used, receipt.effective_gas_price) {
        info!("gas used: {} ({} wei of {})", gas, gas * price, GAS_REPORT_TOKEN);
    }

    write_deployed_address(
        deployments_path,
        step.contract.deployments_key(),
        contract.address(),
    )?;

    Ok(())
}
