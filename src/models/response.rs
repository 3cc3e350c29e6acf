use serde::{Deserialize, Serialize};

use super::Planet;

pub const PLANET_CREATED: &str = "The planet has been created!";
pub const PLANET_UPDATED: &str = "The planet has been updated!";
pub const PLANET_DELETED: &str = "The planet has been deleted!";
pub const PLANET_NOT_FOUND: &str = "Planet not found";

/// Body carrying only a message. Also used for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body returned after a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetMessageResponse {
    pub msg: String,
    pub planet: Planet,
}
