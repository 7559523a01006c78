//! Execute handlers for the Treasury Swap contract.
//!
//! - `swap` - Mint (CW20 receive hook) and Burn handlers
//! - `admin` - Proxy registration

mod admin;
mod swap;

pub use admin::*;
pub use swap::*;
