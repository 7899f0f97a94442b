use address_range::HdNetwork;
use anyhow::{bail, Result};
use clap::Parser;

/// Value of `--branch` selecting direct children of the input key.
pub(crate) const DIRECT_CHILDREN: i64 = -1;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "keyaddresses",
    about = "Derive a range of addresses from an extended public key",
    version
)]
pub(crate) struct Cli {
    #[arg(long, env = "KEYADDRESSES_KEY", help = "the serialized extended public key")]
    pub(crate) key: String,

    #[arg(
        long,
        default_value_t = 0,
        help = "the starting index of nodes for which to derive addresses"
    )]
    pub(crate) index: u32,

    #[arg(long, default_value_t = 1, help = "the number of addresses to derive")]
    pub(crate) count: u32,

    #[arg(
        long,
        default_value_t = DIRECT_CHILDREN,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(DIRECT_CHILDREN..=i64::from(u32::MAX)),
        help = "derive addresses on a child branch (e.g. external/0 or internal/1), -1 for direct children"
    )]
    pub(crate) branch: i64,

    #[arg(long, help = "the key is for testnet")]
    pub(crate) testnet: bool,

    #[arg(long, help = "the key is for simnet")]
    pub(crate) simnet: bool,

    #[arg(long, help = "print the addresses and the next unused index as JSON")]
    pub(crate) json: bool,
}

impl Cli {
    pub(crate) fn network(&self) -> Result<HdNetwork> {
        match (self.testnet, self.simnet) {
            (true, true) => bail!("cannot specify both --testnet and --simnet"),
            (true, false) => Ok(HdNetwork::Testnet),
            (false, true) => Ok(HdNetwork::Simnet),
            (false, false) => Ok(HdNetwork::Mainnet),
        }
    }

    /// Branch below the input key, or `None` to derive its direct children.
    pub(crate) fn branch(&self) -> Option<u32> {
        u32::try_from(self.branch).ok()
    }
}
