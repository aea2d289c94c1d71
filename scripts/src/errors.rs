//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors raised while resolving configuration, before any deployment work is done
#[derive(Debug)]
pub enum ConfigError {
    /// The requested network is not present in the network table
    UnknownNetwork(String),
    /// A required environment variable is not set
    MissingEnvVar(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownNetwork(name) => write!(f, "unknown network: {}", name),
            ConfigError::MissingEnvVar(var) => {
                write!(f, "missing environment variable: {}", var)
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors raised while executing a deployment plan
#[derive(Debug)]
pub enum DeployError {
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::ClientInitialization(s) => {
                write!(f, "error initializing client: {}", s)
            }
            DeployError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            DeployError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            DeployError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for DeployError {}

/// Top-level error type returned by the deploy scripts binary
#[derive(Debug)]
pub enum ScriptError {
    /// A configuration error, surfaced before any transaction is submitted
    Config(ConfigError),
    /// A failure while executing the deployment plan
    Deploy(DeployError),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Config(e) => write!(f, "{}", e),
            ScriptError::Deploy(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ScriptError {}

impl From<ConfigError> for ScriptError {
    fn from(e: ConfigError) -> Self {
        ScriptError::Config(e)
    }
}

impl From<DeployError> for ScriptError {
    fn from(e: DeployError) -> Self {
        ScriptError::Deploy(e)
    }
}
