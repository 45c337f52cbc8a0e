use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Canonical destination a gazetteer alias resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub continent: String,
    /// ISO 3166-1 alpha-2 code. Serialized as `code` to match the public API.
    #[serde(rename = "code")]
    pub iso_code: String,
}

impl PlaceRecord {
    #[must_use]
    pub fn new(name: &str, continent: &str, iso_code: &str) -> Self {
        Self {
            name: name.to_owned(),
            continent: continent.to_owned(),
            iso_code: iso_code.to_owned(),
        }
    }
}

/// One alias row of a gazetteer: a lowercase lookup key and the place it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub alias: String,
    #[serde(flatten)]
    pub place: PlaceRecord,
}

#[derive(Debug, Deserialize)]
pub struct GazetteerFile {
    pub places: Vec<PlaceEntry>,
}

/// How phrase and alias occurrences are detected inside a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Raw substring containment ("toronto" contains "to").
    #[default]
    Substring,
    /// Occurrence must not be glued to other letters or digits.
    WordBoundary,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::Substring => write!(f, "substring"),
            MatchPolicy::WordBoundary => write!(f, "word"),
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "word" | "word-boundary" | "word_boundary" => Ok(MatchPolicy::WordBoundary),
            other => Err(format!(
                "unknown match policy '{other}'; expected 'substring' or 'word'"
            )),
        }
    }
}

/// Load and validate a gazetteer from a YAML file.
///
/// Row order is preserved; it decides extraction order downstream.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_gazetteer_file(path: &Path) -> Result<GazetteerFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::GazetteerFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: GazetteerFile = serde_yaml::from_str(&content)?;

    validate_places(&file)?;

    Ok(file)
}

fn validate_places(file: &GazetteerFile) -> Result<(), ConfigError> {
    if file.places.is_empty() {
        return Err(ConfigError::Validation(
            "gazetteer must contain at least one place".to_string(),
        ));
    }

    let mut seen_aliases = HashSet::new();

    for entry in &file.places {
        let alias = entry.alias.as_str();
        if alias.trim().is_empty() {
            return Err(ConfigError::Validation(
                "place alias must be non-empty".to_string(),
            ));
        }

        if alias != alias.trim() || alias != alias.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "place alias '{alias}' must be lowercase with no surrounding whitespace"
            )));
        }

        if entry.place.name.trim().is_empty() || entry.place.continent.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "place alias '{alias}' has an empty name or continent"
            )));
        }

        let code = entry.place.iso_code.as_str();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "place alias '{alias}' has invalid ISO code '{code}'; expected two uppercase letters"
            )));
        }

        if !seen_aliases.insert(alias) {
            return Err(ConfigError::Validation(format!(
                "duplicate place alias: '{alias}'"
            )));
        }
    }

    Ok(())
}
