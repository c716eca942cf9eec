//! MCP tool parameter types and handler helpers.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool
//! registration; the tool catalog and request validation are generated from
//! these structs.

pub mod helpers;
pub mod params;

pub use helpers::*;
pub use params::*;
