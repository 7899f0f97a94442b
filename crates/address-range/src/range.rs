use chain_hd::HdNetwork;
use tracing::{debug, trace};

use crate::error::RangeError;
use crate::key::HdKey;
use crate::types::AddressRange;

/// Derive `count` addresses from the direct children of `key`, starting at
/// child index `start`.
///
/// Indices that yield an invalid child are skipped and the walk continues at
/// the next index, so the result always holds exactly `count` addresses. The
/// returned `next_index` is `start + count + skipped`. Any other error aborts
/// the whole range.
///
/// Fails with [`RangeError::IndexOverflow`] before deriving anything when
/// `start + count` does not fit in a `u32`. If skipped indices push the range
/// past `u32::MAX`, the walk stops at that point with the same error.
pub fn derive_range<K: HdKey>(
    key: &K,
    start: u32,
    count: u32,
    network: HdNetwork,
) -> Result<AddressRange<K::Address>, RangeError> {
    let overflow = |skipped| RangeError::IndexOverflow {
        start,
        count,
        skipped,
    };

    start.checked_add(count).ok_or_else(|| overflow(0))?;

    let mut addresses = Vec::new();
    let mut derived: u32 = 0;
    let mut skipped: u32 = 0;

    while derived < count {
        let index = start
            .checked_add(derived)
            .and_then(|i| i.checked_add(skipped))
            .ok_or_else(|| overflow(skipped))?;

        let child = match key.child(index) {
            Err(RangeError::InvalidChild(_)) => {
                skipped = skipped.checked_add(1).ok_or_else(|| overflow(skipped))?;
                debug!(index, skipped, "skipping invalid child key");
                continue;
            }
            other => other?,
        };

        addresses.push(child.address(network)?);
        derived += 1;
    }

    let next_index = start
        .checked_add(count)
        .and_then(|i| i.checked_add(skipped))
        .ok_or_else(|| overflow(skipped))?;

    trace!(start, count, skipped, next_index, %network, "derived address range");

    Ok(AddressRange {
        addresses,
        next_index,
    })
}

/// Parse a serialized extended key and check that it belongs to `network`.
pub fn parse_key_for_net<K: HdKey>(key: &str, network: HdNetwork) -> Result<K, RangeError> {
    let parsed = K::parse(key)?;
    if !parsed.is_for_net(network) {
        return Err(RangeError::WrongNetwork { expected: network });
    }
    Ok(parsed)
}

/// Same as [`derive_range`], but accepts a serialized extended key.
pub fn derive_range_from_str<K: HdKey>(
    key: &str,
    start: u32,
    count: u32,
    network: HdNetwork,
) -> Result<AddressRange<K::Address>, RangeError> {
    let key: K = parse_key_for_net(key, network)?;
    derive_range(&key, start, count, network)
}

/// Address of the key at `index` on `branch` below `key`.
///
/// Unlike the range operations, an invalid child at either level is returned
/// as an error rather than skipped.
pub fn derive_at_branch_index<K: HdKey>(
    key: &K,
    index: u32,
    branch: u32,
    network: HdNetwork,
) -> Result<K::Address, RangeError> {
    let branch_key = key.child(branch)?;
    let child = branch_key.child(index)?;
    child.address(network)
}

/// Treat `key` as an account key and derive the range `[start, start + count)`
/// (plus any skipped indices) on `branch`.
pub fn derive_range_from_account_key<K: HdKey>(
    key: &K,
    start: u32,
    count: u32,
    branch: u32,
    network: HdNetwork,
) -> Result<AddressRange<K::Address>, RangeError> {
    let branch_key = key.child(branch)?;
    derive_range(&branch_key, start, count, network)
}

/// Same as [`derive_range_from_account_key`], but accepts a serialized
/// extended key.
pub fn derive_range_from_account_key_str<K: HdKey>(
    key: &str,
    start: u32,
    count: u32,
    branch: u32,
    network: HdNetwork,
) -> Result<AddressRange<K::Address>, RangeError> {
    let key: K = parse_key_for_net(key, network)?;
    derive_range_from_account_key(&key, start, count, branch, network)
}
