//! Hosts-file loader for the local name table.
//!
//! One entry per line: the first whitespace-separated field is the address,
//! the last is the name.
//!
//! ```text
//! # comment
//! 192.168.10.1    www.ljg.top
//! 0.0.0.0         ads.example     # blocked
//! ```

use dns_relay_domain::{DomainError, NameTable};
use std::path::Path;
use tracing::{info, warn};

pub fn load_hosts_file(path: impl AsRef<Path>) -> Result<NameTable, DomainError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DomainError::IoError(format!("Failed to read hosts file {}: {}", path.display(), e))
    })?;

    let table = parse_hosts(&contents);

    info!(
        path = %path.display(),
        entries = table.len(),
        blocked = table.blocked_count(),
        "Hosts file loaded"
    );

    Ok(table)
}

pub fn parse_hosts(contents: &str) -> NameTable {
    let mut table = NameTable::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            warn!(line = line_no, content = %raw_line, "Skipping hosts line without a name");
            continue;
        }

        let address = fields[0];
        let name = fields[fields.len() - 1].trim_end_matches('.');
        if name.is_empty() {
            warn!(line = line_no, content = %raw_line, "Skipping hosts line with an empty name");
            continue;
        }

        if !table.insert(address, name) {
            warn!(line = line_no, name, address, "Duplicate hosts name, keeping first address");
        }
    }

    table
}
