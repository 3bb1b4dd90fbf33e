pub mod role;
pub mod user;

pub use role::*;
pub use user::*;
