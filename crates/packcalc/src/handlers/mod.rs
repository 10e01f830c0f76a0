//! HTTP handlers for the API surface.

mod calculate;
mod meta;

pub use calculate::calculate;
pub use meta::{health_check, home, list_terrain};
