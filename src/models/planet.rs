use serde::{Deserialize, Serialize};

/// A planet record.
///
/// The `id` is supplied by the client at creation time and never changes
/// afterwards. Only the `name` can be updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
}

impl Planet {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Records every fresh store starts with.
pub fn default_planets() -> Vec<Planet> {
    vec![Planet::new(1, "Earth"), Planet::new(2, "Mars")]
}

/// Validated input for creating a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlanetInput {
    pub id: i64,
    pub name: String,
}

impl From<CreatePlanetInput> for Planet {
    fn from(input: CreatePlanetInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
        }
    }
}

/// Validated input for renaming a planet. The id is taken from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlanetInput {
    pub name: String,
}
