//! Presentation Layer
//!
//! Bearer authentication middleware and extractors shared by HTTP routers.

pub mod extract;
pub mod middleware;

pub use extract::CurrentActor;
pub use middleware::{AuthenticateState, authenticate};
