//! Physician locator data.
//!
//! Physician records are loaded once at startup. A [`PhysicianMap`] stands in
//! for the client-side map instance: it owns the marker list the page hands to
//! the map library as JSON.

use crate::dom::escape_text;
use crate::i18n::{ContentTable, Language};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// One physician on the locator map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physician {
    pub name: String,
    pub name_zh: String,
    pub specialty: String,
    pub specialty_zh: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lng: f64,
}

impl Physician {
    pub fn name_for(&self, language: Language) -> &str {
        if language.is_canonical() {
            &self.name
        } else {
            &self.name_zh
        }
    }

    pub fn specialty_for(&self, language: Language) -> &str {
        if language.is_canonical() {
            &self.specialty
        } else {
            &self.specialty_zh
        }
    }
}

/// A marker as handed to the client map library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
}

/// The map instance whose markers get re-rendered on every language change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhysicianMap {
    markers: Vec<Marker>,
}

impl PhysicianMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Marker list as JSON for the page's map script.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.markers).context("Failed to serialize map markers")
    }
}

/// Popup markup for one physician. Name and specialty follow `language`;
/// address and phone are the same in both.
pub fn popup_html(physician: &Physician, table: &ContentTable, language: Language) -> String {
    let label = |key: &str| table.lookup(language, key).unwrap_or_default();

    format!(
        "<strong>{}</strong><br>{}: {}<br>{}: {}<br>{}: {}",
        escape_text(physician.name_for(language)),
        label("specialtyLabel"),
        escape_text(physician.specialty_for(language)),
        label("addressLabel"),
        escape_text(&physician.address),
        label("phoneLabel"),
        escape_text(&physician.phone),
    )
}

/// Load physician records from a JSON array on disk.
///
/// A missing file yields an empty list: the locator page still renders, only
/// without markers.
pub fn load_physicians(path: &Path) -> Result<Vec<Physician>> {
    if !path.exists() {
        warn!(
            "Physicians file {} not found, map will have no markers",
            path.display()
        );
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read physicians file {}", path.display()))?;
    let physicians: Vec<Physician> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse physicians file {}", path.display()))?;

    info!("Loaded {} physicians from {}", physicians.len(), path.display());
    Ok(physicians)
}
