pub mod constants;
pub mod contract;
pub mod error;
pub mod events;
pub mod helpers;
pub mod msg;
pub mod random;
pub mod state;
pub mod test_util;
pub mod util;

pub use crate::error::ContractError;
