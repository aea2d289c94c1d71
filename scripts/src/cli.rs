//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands,
    constants::DEFAULT_DEPLOYMENTS_PATH,
    errors::ScriptError,
    networks::NetworkProfile,
    utils::{setup_client, signing_key_from_env},
};

/// Deploy the MultiSigWallet contract to a configured network
#[derive(Parser)]
pub struct Cli {
    /// Name of the target network
    #[arg(short, long)]
    pub network: String,

    /// Override the profile's RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts' subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Log the deployment plan for the selected network without deploying
    Plan,
    /// Execute the deployment plan for the selected network
    Deploy(DeployArgs),
}

/// Arguments to the deploy command
#[derive(Args)]
pub struct DeployArgs {
    /// Path at which deployed contract addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,
}

impl Command {
    /// Run the command against the resolved network profile
    ///
    /// The signing key is read, and the client built, only for commands that
    /// submit transactions.
    pub async fn run(
        self,
        profile: &'static NetworkProfile,
        rpc_url: Option<String>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Plan => {
                commands::show_plan(profile);
                Ok(())
            }
            Command::Deploy(args) => {
                let priv_key = signing_key_from_env(profile)?;
                let rpc_url = rpc_url.as_deref().unwrap_or(profile.rpc_url);
                let client = setup_client(&priv_key, rpc_url, profile.chain_id)?;

                commands::deploy(args, profile, client).await
            }
        }
    }
}
