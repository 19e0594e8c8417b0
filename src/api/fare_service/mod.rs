pub mod client;
pub mod types;

pub use client::{build_params, parse_response, Client};
pub use types::*;
