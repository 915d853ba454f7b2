//! Auth domain - anonymous viewer identities
//!
//! Responsibilities:
//! - Minting anonymous viewer sessions
//! - Signing and verifying viewer JWTs

pub mod jwt;
pub mod session;

pub use jwt::{Claims, JwtService};
pub use session::issue_anonymous_session;
