//! Request and response types for the API surface.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
