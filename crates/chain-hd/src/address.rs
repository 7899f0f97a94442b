use std::fmt;
use std::str::FromStr;

use ripemd::Ripemd160;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::HdError;
use crate::network::HdNetwork;

/// Pay-to-pubkey-hash address for one of the supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct P2pkhAddress {
    network: HdNetwork,
    pubkey_hash: [u8; 20],
}

impl P2pkhAddress {
    /// Derive the P2PKH address of a 33-byte compressed secp256k1 public key.
    pub fn from_pubkey(pubkey_bytes: &[u8; 33], network: HdNetwork) -> Result<Self, HdError> {
        k256::PublicKey::from_sec1_bytes(pubkey_bytes).map_err(|e| {
            HdError::InvalidPublicKey(format!("failed to parse compressed public key: {e}"))
        })?;

        Ok(Self {
            network,
            pubkey_hash: hash160(pubkey_bytes),
        })
    }

    pub fn network(&self) -> HdNetwork {
        self.network
    }

    pub fn pubkey_hash(&self) -> &[u8; 20] {
        &self.pubkey_hash
    }
}

/// Base58Check: address id (1 byte) || hash160 (20 bytes) || checksum (4 bytes).
impl fmt::Display for P2pkhAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = [0u8; 21];
        payload[0] = self.network.params().pubkey_hash_addr_id;
        payload[1..].copy_from_slice(&self.pubkey_hash);
        f.write_str(&bs58::encode(payload).with_check().into_string())
    }
}

impl FromStr for P2pkhAddress {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| HdError::InvalidAddress(format!("invalid base58check: {e}")))?;

        if decoded.len() != 21 {
            return Err(HdError::InvalidAddress(format!(
                "expected 21 bytes, got {}",
                decoded.len()
            )));
        }

        let network = HdNetwork::from_pubkey_hash_addr_id(decoded[0]).ok_or_else(|| {
            HdError::InvalidAddress(format!("unknown address id 0x{:02x}", decoded[0]))
        })?;

        let mut pubkey_hash = [0u8; 20];
        pubkey_hash.copy_from_slice(&decoded[1..]);
        Ok(Self {
            network,
            pubkey_hash,
        })
    }
}

impl Serialize for P2pkhAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute Hash160 (RIPEMD-160(SHA-256(data))).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Validate a P2PKH address string for the given network.
///
/// Returns `true` if the address is valid for the specified network,
/// `false` if it is valid but for a different network.
pub fn validate_address(address: &str, network: HdNetwork) -> Result<bool, HdError> {
    let parsed: P2pkhAddress = address.parse()?;
    Ok(parsed.network == network)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compressed pubkey of private key 1 (the generator point).
    const GENERATOR_PUBKEY: &str =
        "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

    fn generator_pubkey() -> [u8; 33] {
        hex::decode(GENERATOR_PUBKEY).unwrap().try_into().unwrap()
    }

    #[test]
    fn p2pkh_mainnet_test_vector() {
        let address = P2pkhAddress::from_pubkey(&generator_pubkey(), HdNetwork::Mainnet).unwrap();
        assert_eq!(address.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn hash160_of_generator() {
        assert_eq!(
            hex::encode(hash160(&generator_pubkey())),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn matches_bitcoin_crate_encoding() {
        let pubkey = bitcoin::PublicKey::from_slice(&generator_pubkey()).unwrap();
        for (net, btc_net) in [
            (HdNetwork::Mainnet, bitcoin::Network::Bitcoin),
            (HdNetwork::Testnet, bitcoin::Network::Testnet),
        ] {
            let ours = P2pkhAddress::from_pubkey(&generator_pubkey(), net).unwrap();
            let theirs = bitcoin::Address::p2pkh(pubkey.pubkey_hash(), btc_net);
            assert_eq!(ours.to_string(), theirs.to_string());
        }
    }

    #[test]
    fn simnet_address_starts_with_s() {
        let address = P2pkhAddress::from_pubkey(&generator_pubkey(), HdNetwork::Simnet).unwrap();
        let encoded = address.to_string();
        assert!(encoded.starts_with('S'), "expected S prefix, got {encoded}");
    }

    #[test]
    fn testnet_address_starts_with_m_or_n() {
        let address = P2pkhAddress::from_pubkey(&generator_pubkey(), HdNetwork::Testnet).unwrap();
        let encoded = address.to_string();
        assert!(encoded.starts_with('m') || encoded.starts_with('n'));
    }

    #[test]
    fn invalid_pubkey_returns_error() {
        let result = P2pkhAddress::from_pubkey(&[0u8; 33], HdNetwork::Mainnet);
        assert!(matches!(result, Err(HdError::InvalidPublicKey(_))));
    }

    #[test]
    fn parse_recovers_network_and_hash() {
        for net in HdNetwork::ALL {
            let address = P2pkhAddress::from_pubkey(&generator_pubkey(), net).unwrap();
            let parsed: P2pkhAddress = address.to_string().parse().unwrap();
            assert_eq!(parsed.network(), net);
            assert_eq!(parsed.pubkey_hash(), address.pubkey_hash());
        }
    }

    #[test]
    fn validate_known_mainnet_address() {
        assert!(validate_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH", HdNetwork::Mainnet).unwrap());
    }

    #[test]
    fn validate_mainnet_address_on_testnet_returns_false() {
        assert!(!validate_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH", HdNetwork::Testnet).unwrap());
    }

    #[test]
    fn validate_bad_checksum_returns_error() {
        let result = validate_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ", HdNetwork::Mainnet);
        assert!(matches!(result, Err(HdError::InvalidAddress(_))));
    }

    #[test]
    fn validate_p2sh_address_returns_error() {
        // Valid base58check, but a script-hash id none of the networks use for P2PKH.
        let result = validate_address("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", HdNetwork::Mainnet);
        assert!(matches!(result, Err(HdError::InvalidAddress(_))));
    }

    #[test]
    fn validate_garbage_returns_error() {
        assert!(validate_address("notanaddress!!!", HdNetwork::Mainnet).is_err());
    }

    #[test]
    fn serializes_as_string() {
        let address = P2pkhAddress::from_pubkey(&generator_pubkey(), HdNetwork::Mainnet).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH\"");
    }
}
