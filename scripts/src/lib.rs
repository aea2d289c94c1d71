//! Scripts for deploying the MultiSigWallet contract.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod networks;
pub mod plan;
pub mod utils;
