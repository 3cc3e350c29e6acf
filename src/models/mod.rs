//! Domain models for the planet catalogue.
//!
//! - [`Planet`]: the only stored entity, identified by a caller-chosen integer id.
//! - [`CreatePlanetInput`] / [`UpdatePlanetInput`]: payloads that have passed
//!   schema validation (see [`crate::store::validation`]).
//! - [`MessageResponse`] / [`PlanetMessageResponse`]: response envelopes
//!   returned by the HTTP API.

mod planet;
mod response;

pub use planet::*;
pub use response::*;
