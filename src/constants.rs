pub const CONTRACT_NAME: &str = "crates.io:cw-pooled-lottery";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const FEE_DENOMINATOR: u64 = 10000;
pub const MAX_FEE_BPS: u64 = 10000;
