//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary every backend crate agrees on:
//! - Error classification, the unified [`error::app_error::AppError`] and its conversions
//! - Typed identifiers for store-assigned records
//!
//! Only things whose meaning is identical in the `auth` and `cms` domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
