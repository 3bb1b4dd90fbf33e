pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::{Credentials, JenkinsClient};
pub use error::{JenkinsError, Result};
pub use models::*;

// Re-export access-core types for convenience
pub use access_core::{AccessError, AccessSource};
