//! Password hashing, session-token issuance and bearer-token enforcement.

pub mod middleware;
pub mod password;
pub mod token;

pub use self::middleware::Identity;
