use serde::Serialize;

/// Branch for addresses intended for receiving payments.
pub const EXTERNAL_BRANCH: u32 = 0;

/// Branch for change addresses.
pub const INTERNAL_BRANCH: u32 = 1;

/// Conventional first-level branches below an account key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    External,
    Internal,
}

impl Branch {
    pub fn index(self) -> u32 {
        match self {
            Branch::External => EXTERNAL_BRANCH,
            Branch::Internal => INTERNAL_BRANCH,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            EXTERNAL_BRANCH => Some(Branch::External),
            INTERNAL_BRANCH => Some(Branch::Internal),
            _ => None,
        }
    }
}

impl From<Branch> for u32 {
    fn from(branch: Branch) -> Self {
        branch.index()
    }
}

/// Addresses derived for a contiguous range of indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRange<A> {
    /// One address per derived index, in ascending index order.
    pub addresses: Vec<A>,
    /// Index a follow-up call should start from. Includes skipped invalid indices.
    pub next_index: u32,
}

impl<A> AddressRange<A> {
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<A> IntoIterator for AddressRange<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_indices() {
        assert_eq!(u32::from(Branch::External), 0);
        assert_eq!(u32::from(Branch::Internal), 1);
        assert_eq!(Branch::from_index(1), Some(Branch::Internal));
        assert_eq!(Branch::from_index(2), None);
    }

    #[test]
    fn range_serializes_with_next_index() {
        let range = AddressRange {
            addresses: vec!["a".to_string(), "b".to_string()],
            next_index: 7,
        };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"addresses":["a","b"],"next_index":7}"#);
    }
}
