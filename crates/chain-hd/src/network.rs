use std::str::FromStr;

use bip32::Prefix;

use crate::error::HdError;

/// Version bytes and address ids for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetParams {
    pub name: &'static str,
    /// Four-character base58 prefix of serialized extended public keys.
    pub hd_public_prefix: &'static str,
    pub hd_public_version: u32,
    pub hd_private_version: u32,
    /// Version byte of P2PKH addresses.
    pub pubkey_hash_addr_id: u8,
}

pub const MAINNET_PARAMS: NetParams = NetParams {
    name: "mainnet",
    hd_public_prefix: "xpub",
    hd_public_version: 0x0488_B21E,
    hd_private_version: 0x0488_ADE4,
    pubkey_hash_addr_id: 0x00,
};

pub const TESTNET_PARAMS: NetParams = NetParams {
    name: "testnet",
    hd_public_prefix: "tpub",
    hd_public_version: 0x0435_87CF,
    hd_private_version: 0x0435_8394,
    pubkey_hash_addr_id: 0x6F,
};

pub const SIMNET_PARAMS: NetParams = NetParams {
    name: "simnet",
    hd_public_prefix: "spub",
    hd_public_version: 0x0420_BD3A,
    hd_private_version: 0x0420_B900,
    pubkey_hash_addr_id: 0x3F,
};

/// Supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HdNetwork {
    Mainnet,
    Testnet,
    Simnet,
}

impl HdNetwork {
    pub const ALL: [HdNetwork; 3] = [HdNetwork::Mainnet, HdNetwork::Testnet, HdNetwork::Simnet];

    pub fn params(self) -> &'static NetParams {
        match self {
            HdNetwork::Mainnet => &MAINNET_PARAMS,
            HdNetwork::Testnet => &TESTNET_PARAMS,
            HdNetwork::Simnet => &SIMNET_PARAMS,
        }
    }

    /// Prefix used when serializing extended public keys for this network.
    pub fn public_prefix(self) -> Prefix {
        let params = self.params();
        Prefix::from_parts_unchecked(params.hd_public_prefix, params.hd_public_version)
    }

    /// Look up the network whose extended public keys carry `version`.
    pub fn from_public_version(version: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|net| net.params().hd_public_version == version)
    }

    /// Look up the network whose P2PKH addresses start with `id`.
    pub fn from_pubkey_hash_addr_id(id: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|net| net.params().pubkey_hash_addr_id == id)
    }
}

impl std::fmt::Display for HdNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.params().name)
    }
}

impl FromStr for HdNetwork {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|net| net.params().name.eq_ignore_ascii_case(s))
            .ok_or_else(|| HdError::UnknownNetwork(s.to_string()))
    }
}
