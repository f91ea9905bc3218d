//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain meaning:
//! - Random secret generation
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
