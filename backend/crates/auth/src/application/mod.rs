//! Application Layer
//!
//! Token issuance/verification and the use cases built on them.

pub mod config;
pub mod issue_token;
pub mod token;

// Re-exports
pub use config::JwtConfig;
pub use issue_token::IssueTokenUseCase;
pub use token::{Claims, IssuedToken, TokenService};
