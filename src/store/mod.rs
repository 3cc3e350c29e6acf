pub mod validation;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use thiserror::Error;

use crate::models::*;

pub use validation::{validate_create, validate_update, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", PLANET_NOT_FOUND)]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// In-memory planet collection shared by every request handler.
///
/// Clones are handles onto the same collection. Records keep insertion
/// order. Ids are not checked for uniqueness on insert; when duplicates
/// exist, lookups and renames act on the first match and deletes remove
/// every match.
#[derive(Debug, Clone)]
pub struct PlanetStore {
    planets: Arc<Mutex<Vec<Planet>>>,
}

impl PlanetStore {
    pub fn from_planets(planets: Vec<Planet>) -> Self {
        Self {
            planets: Arc::new(Mutex::new(planets)),
        }
    }

    /// A store holding the default records (Earth and Mars).
    pub fn seeded() -> Self {
        Self::from_planets(default_planets())
    }

    pub fn empty() -> Self {
        Self::from_planets(Vec::new())
    }

    // Every operation leaves the Vec consistent, so a panic elsewhere while
    // the lock was held does not invalidate the data.
    fn lock(&self) -> MutexGuard<'_, Vec<Planet>> {
        self.planets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn list(&self) -> Vec<Planet> {
        self.lock().clone()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Planet> {
        self.lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Validate an untyped payload and append it as a new planet.
    pub fn create(&self, candidate: &Value) -> Result<Planet> {
        let input = validate_create(candidate).inspect_err(log_rejection)?;
        Ok(self.insert(input))
    }

    /// Append an already validated planet.
    pub fn insert(&self, input: CreatePlanetInput) -> Planet {
        let planet = Planet::from(input);
        self.lock().push(planet.clone());
        tracing::info!(id = planet.id, name = %planet.name, "Created planet");
        planet
    }

    /// Validate an untyped payload, then rename the planet with `id`.
    ///
    /// A malformed payload is reported even when no planet has that id.
    pub fn update(&self, id: i64, candidate: &Value) -> Result<Planet> {
        let input = validate_update(candidate).inspect_err(log_rejection)?;
        self.rename(id, input)
    }

    pub fn rename(&self, id: i64, input: UpdatePlanetInput) -> Result<Planet> {
        let mut planets = self.lock();
        let Some(planet) = planets.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(id, "Rename target not found");
            return Err(StoreError::NotFound);
        };

        planet.name = input.name;
        tracing::info!(id, name = %planet.name, "Renamed planet");
        Ok(planet.clone())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let mut planets = self.lock();
        let before = planets.len();
        planets.retain(|p| p.id != id);

        if planets.len() < before {
            tracing::info!(id, removed = before - planets.len(), "Deleted planet");
            Ok(())
        } else {
            tracing::debug!(id, "Delete target not found");
            Err(StoreError::NotFound)
        }
    }
}

impl Default for PlanetStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn log_rejection(err: &ValidationError) {
    tracing::warn!(field = %err.field, "Rejected planet payload: {}", err.message);
}

/// Interpret a caller-supplied identifier the way a JSON client would read
/// it as a number. Returns `None` for anything that is not an integer, which
/// can never match a stored planet.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }

    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_base_ten_integers() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+5"), Some(5));
    }

    #[test]
    fn parse_id_accepts_integral_decimal_forms() {
        assert_eq!(parse_id("2.0"), Some(2));
        assert_eq!(parse_id("1e1"), Some(10));
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("NaN"), None);
        assert_eq!(parse_id("inf"), None);
    }

    #[test]
    fn clones_share_the_same_collection() {
        let store = PlanetStore::seeded();
        let handle = store.clone();

        handle.delete(1).unwrap();

        assert_eq!(store.list(), vec![Planet::new(2, "Mars")]);
    }

    #[test]
    fn recovers_from_a_poisoned_lock() {
        let store = PlanetStore::seeded();
        let handle = store.clone();

        let _ = std::thread::spawn(move || {
            let _guard = handle.planets.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.len(), 2);
        assert!(store.get_by_id(1).is_ok());
    }
}
