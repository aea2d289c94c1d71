use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, networks::resolve_network};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        rpc_url,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let profile = resolve_network(&network)?;

    command.run(profile, rpc_url).await
}
