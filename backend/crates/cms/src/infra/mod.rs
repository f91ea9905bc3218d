//! Infrastructure Layer
//!
//! Content store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCmsRepository;
pub use postgres::PgCmsRepository;
