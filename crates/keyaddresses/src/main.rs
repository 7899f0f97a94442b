//! keyaddresses - derive a range of addresses from an extended public key.
//!
//! Prints one address per line in derivation order. With `--branch` the key
//! is treated as an account key and addresses come from that branch.

mod cli;
mod logging;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::debug;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    logging::init();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let network = cli.network()?;
    debug!(%network, start = cli.index, count = cli.count, branch = cli.branch, "deriving addresses");

    let range = match cli.branch() {
        None => address_range::address_range(&cli.key, cli.index, cli.count, network)?,
        Some(branch) => address_range::account_address_range(
            &cli.key, cli.index, cli.count, branch, network,
        )?,
    };

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &range)?;
        writeln!(out)?;
    } else {
        for address in &range.addresses {
            writeln!(out, "{address}")?;
        }
    }
    out.flush()?;

    Ok(())
}
