/// Active display language
///
/// Starts as Spanish. One best-effort geolocation lookup at startup may
/// switch it to English; the user can toggle at any time. Both writes are
/// plain assignments, so whichever lands last wins.

use std::collections::HashSet;

use tracing::{debug, info};

use super::catalog::Catalog;
use super::data::{Category, Language};
use super::i18n::Translations;
use crate::error::GeoError;

/// Decide the language from a lookup outcome. `None` means "leave it alone".
pub fn resolve_language(
    outcome: &Result<String, GeoError>,
    english_countries: &HashSet<String>,
) -> Option<Language> {
    match outcome {
        Ok(code) if english_countries.contains(&code.trim().to_ascii_uppercase()) => {
            Some(Language::En)
        }
        Ok(_) => None,
        Err(_) => None,
    }
}

#[derive(Debug, Clone)]
pub struct LocaleState {
    lang: Language,
    english_countries: HashSet<String>,
}

impl LocaleState {
    pub fn new<I, S>(english_countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lang: Language::default(),
            english_countries: english_countries
                .into_iter()
                .map(|c| c.as_ref().trim().to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn toggle(&mut self) -> Language {
        self.lang = self.lang.toggled();
        info!(lang = %self.lang, "language toggled");
        self.lang
    }

    /// Apply the result of the startup lookup. Failures are logged and dropped.
    pub fn apply_lookup(&mut self, outcome: Result<String, GeoError>) {
        match &outcome {
            Ok(code) => debug!(country = %code, "geolocation resolved"),
            Err(err) => debug!(error = %err, "geolocation lookup failed, keeping language"),
        }

        if let Some(lang) = resolve_language(&outcome, &self.english_countries) {
            info!(lang = %lang, "language set from geolocation");
            self.lang = lang;
        }
    }

    /// The active language with its text bundle and category set
    pub fn current<'a>(&self, catalog: &'a Catalog) -> (Language, &'static Translations, &'a [Category]) {
        (
            self.lang,
            Translations::for_language(self.lang),
            catalog.categories(self.lang),
        )
    }
}
