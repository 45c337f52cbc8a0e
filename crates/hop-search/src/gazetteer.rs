//! Alias → place lookup table.

use std::collections::HashSet;
use std::path::Path;

use hop_core::{load_gazetteer_file, PlaceEntry, PlaceRecord};

use crate::error::SearchError;

/// Built-in gazetteer rows: `(alias, name, continent, iso_code)`.
///
/// Row order is significant. Extraction walks the table top to bottom, so an
/// earlier alias is reported before a later one regardless of where each
/// appears in the query.
pub(crate) const BUILTIN_PLACES: &[(&str, &str, &str, &str)] = &[
    // Africa
    ("tunisia", "Tunisia", "Africa", "TN"),
    ("egypt", "Egypt", "Africa", "EG"),
    ("morocco", "Morocco", "Africa", "MA"),
    ("south africa", "South Africa", "Africa", "ZA"),
    ("kenya", "Kenya", "Africa", "KE"),
    ("nigeria", "Nigeria", "Africa", "NG"),
    ("ghana", "Ghana", "Africa", "GH"),
    // Asia
    ("japan", "Japan", "Asia", "JP"),
    ("china", "China", "Asia", "CN"),
    ("india", "India", "Asia", "IN"),
    ("thailand", "Thailand", "Asia", "TH"),
    ("thialand", "Thailand", "Asia", "TH"),
    ("thiland", "Thailand", "Asia", "TH"),
    ("vietnam", "Vietnam", "Asia", "VN"),
    ("singapore", "Singapore", "Asia", "SG"),
    ("malaysia", "Malaysia", "Asia", "MY"),
    ("indonesia", "Indonesia", "Asia", "ID"),
    ("philippines", "Philippines", "Asia", "PH"),
    ("south korea", "South Korea", "Asia", "KR"),
    ("korea", "South Korea", "Asia", "KR"),
    ("taiwan", "Taiwan", "Asia", "TW"),
    ("hong kong", "Hong Kong", "Asia", "HK"),
    ("dubai", "United Arab Emirates", "Asia", "AE"),
    ("uae", "United Arab Emirates", "Asia", "AE"),
    ("saudi arabia", "Saudi Arabia", "Asia", "SA"),
    ("qatar", "Qatar", "Asia", "QA"),
    // Europe
    ("france", "France", "Europe", "FR"),
    ("germany", "Germany", "Europe", "DE"),
    ("italy", "Italy", "Europe", "IT"),
    ("spain", "Spain", "Europe", "ES"),
    ("united kingdom", "United Kingdom", "Europe", "GB"),
    ("uk", "United Kingdom", "Europe", "GB"),
    ("england", "United Kingdom", "Europe", "GB"),
    ("london", "United Kingdom", "Europe", "GB"),
    ("paris", "France", "Europe", "FR"),
    ("greece", "Greece", "Europe", "GR"),
    ("portugal", "Portugal", "Europe", "PT"),
    ("netherlands", "Netherlands", "Europe", "NL"),
    ("belgium", "Belgium", "Europe", "BE"),
    ("switzerland", "Switzerland", "Europe", "CH"),
    ("austria", "Austria", "Europe", "AT"),
    ("sweden", "Sweden", "Europe", "SE"),
    ("norway", "Norway", "Europe", "NO"),
    ("denmark", "Denmark", "Europe", "DK"),
    ("finland", "Finland", "Europe", "FI"),
    ("poland", "Poland", "Europe", "PL"),
    ("czech republic", "Czech Republic", "Europe", "CZ"),
    ("hungary", "Hungary", "Europe", "HU"),
    ("turkey", "Turkey", "Europe", "TR"),
    ("russia", "Russia", "Europe", "RU"),
    // North America
    ("usa", "United States", "North America", "US"),
    ("united states", "United States", "North America", "US"),
    ("america", "United States", "North America", "US"),
    ("new york", "United States", "North America", "US"),
    ("los angeles", "United States", "North America", "US"),
    ("miami", "United States", "North America", "US"),
    ("canada", "Canada", "North America", "CA"),
    ("mexico", "Mexico", "North America", "MX"),
    // South America
    ("brazil", "Brazil", "South America", "BR"),
    ("argentina", "Argentina", "South America", "AR"),
    ("chile", "Chile", "South America", "CL"),
    ("colombia", "Colombia", "South America", "CO"),
    ("peru", "Peru", "South America", "PE"),
    // Oceania
    ("australia", "Australia", "Oceania", "AU"),
    ("new zealand", "New Zealand", "Oceania", "NZ"),
    // Major cities resolved to their country
    ("tokyo", "Japan", "Asia", "JP"),
    ("beijing", "China", "Asia", "CN"),
    ("shanghai", "China", "Asia", "CN"),
    ("delhi", "India", "Asia", "IN"),
    ("mumbai", "India", "Asia", "IN"),
    ("bangkok", "Thailand", "Asia", "TH"),
    ("rome", "Italy", "Europe", "IT"),
    ("barcelona", "Spain", "Europe", "ES"),
    ("madrid", "Spain", "Europe", "ES"),
    ("berlin", "Germany", "Europe", "DE"),
    ("amsterdam", "Netherlands", "Europe", "NL"),
    ("sydney", "Australia", "Oceania", "AU"),
    ("melbourne", "Australia", "Oceania", "AU"),
];

/// Ordered, immutable alias table.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gazetteer {
    entries: Vec<PlaceEntry>,
}

impl Gazetteer {
    /// The gazetteer shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_PLACES
            .iter()
            .map(|&(alias, name, continent, code)| PlaceEntry {
                alias: alias.to_owned(),
                place: PlaceRecord::new(name, continent, code),
            })
            .collect();
        Self { entries }
    }

    /// Wraps caller-supplied rows, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<PlaceEntry>) -> Self {
        Self { entries }
    }

    /// Loads a gazetteer from a validated YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Gazetteer`] if the file is unreadable, malformed,
    /// or fails validation.
    pub fn from_file(path: &Path) -> Result<Self, SearchError> {
        let file = load_gazetteer_file(path)?;
        Ok(Self::from_entries(file.places))
    }

    #[must_use]
    pub fn entries(&self) -> &[PlaceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact alias lookup.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<&PlaceRecord> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| &entry.place)
    }

    /// Resolves a free-form country name (as reported by IP geolocation).
    ///
    /// The first row whose canonical name or alias equals `country`
    /// case-insensitively wins.
    #[must_use]
    pub fn resolve_country(&self, country: &str) -> Option<&PlaceRecord> {
        let wanted = country.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.place.name.to_lowercase() == wanted || entry.alias == wanted)
            .map(|entry| &entry.place)
    }

    /// Every distinct place, deduplicated by ISO code.
    ///
    /// The first record seen for each code (in table order) is kept.
    #[must_use]
    pub fn unique_places(&self) -> Vec<PlaceRecord> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| seen.insert(entry.place.iso_code.as_str()))
            .map(|entry| entry.place.clone())
            .collect()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
