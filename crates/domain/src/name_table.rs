use std::collections::HashMap;

/// Addresses that mark a name as intentionally blocked.
pub const FORBIDDEN_ADDRESSES: [&str; 2] = ["127.0.0.1", "0.0.0.0"];

pub fn is_forbidden_address(address: &str) -> bool {
    FORBIDDEN_ADDRESSES.contains(&address)
}

/// Static name → address table used for local answers.
///
/// Entries arrive address-first (hosts file orientation) and are indexed by
/// name, so several names may share one address. Lookups are exact and
/// case-sensitive. The first address seen for a name wins.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    by_name: HashMap<String, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, A, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, N)>,
        A: Into<String>,
        N: Into<String>,
    {
        let mut table = Self::new();
        for (address, name) in entries {
            table.insert(address, name);
        }
        table
    }

    /// Adds `name → address`. Returns `false` and leaves the table unchanged
    /// if `name` is already present.
    pub fn insert(&mut self, address: impl Into<String>, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return false;
        }
        self.by_name.insert(name, address.into());
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn blocked_count(&self) -> usize {
        self.by_name
            .values()
            .filter(|address| is_forbidden_address(address))
            .count()
    }
}
