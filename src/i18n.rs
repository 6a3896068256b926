//! Label-lookup capabilities injected by the host.
//!
//! The bilingual dictionaries themselves live with the host application; the
//! renderer only performs key lookups. Portuguese is the primary language and
//! is always rendered; any other active language adds a second stacked line
//! beneath each title and label.

use std::collections::HashMap;

/// The primary language code. Titles and labels in this language are always
/// drawn; secondary lines appear only when the active language differs.
pub const PRIMARY_LANGUAGE: &str = "pt";

/// Bilingual label lookup. Implementations must be total: a missing key
/// falls back to the key text itself, never an error.
pub trait Labels {
    /// Primary-language (Portuguese) label for a key.
    fn primary(&self, key: &str) -> String;
    /// Active-language label for a key.
    fn active(&self, key: &str) -> String;
}

/// Country-name resolution. Unknown or empty codes pass through unchanged,
/// so an unset country field stays empty and is skipped by the renderer.
pub trait CountryNames {
    fn name(&self, code: &str) -> String;
}

/// HashMap-backed [`Labels`] implementation for hosts and tests.
#[derive(Default)]
pub struct MapLabels {
    pub primary: HashMap<String, String>,
    pub active: HashMap<String, String>,
}

impl Labels for MapLabels {
    fn primary(&self, key: &str) -> String {
        self.primary
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn active(&self, key: &str) -> String {
        self.active
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// HashMap-backed [`CountryNames`] implementation for hosts and tests.
#[derive(Default)]
pub struct MapCountries {
    pub names: HashMap<String, String>,
}

impl CountryNames for MapCountries {
    fn name(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_the_key_itself() {
        let labels = MapLabels::default();
        assert_eq!(labels.primary("firstName"), "firstName");
        assert_eq!(labels.active("pdfTitle"), "pdfTitle");
    }

    #[test]
    fn unknown_country_codes_pass_through() {
        let countries = MapCountries::default();
        assert_eq!(countries.name("PT"), "PT");
        assert_eq!(countries.name(""), "");
    }
}
