mod hosts_file;

pub use hosts_file::{load_hosts_file, parse_hosts};
