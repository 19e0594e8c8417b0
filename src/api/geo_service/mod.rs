pub mod client;
pub mod types;

pub use client::{compose_address, Client};
pub use types::*;
