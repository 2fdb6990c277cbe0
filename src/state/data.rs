/// Shared data structures for the application state
///
/// These structs represent the catalog data model that flows between
/// the catalog tables and the UI layer. Everything here is immutable
/// once the catalog has been built.

use std::fmt;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    /// Short uppercase code shown on the language button
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value with one rendering per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized<T> {
    pub es: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(es: T, en: T) -> Self {
        Self { es, en }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}

/// Icon identifiers for categories and service cards.
/// Resolved to glyphs in `ui::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Shield,
    Truck,
    Crown,
    Layers,
    Settings,
    Wrench,
    MapPin,
    Phone,
    Mail,
    Message,
}

impl Icon {
    /// Map a stored icon key to an icon. Unknown keys fall back to `Settings`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Shield" => Icon::Shield,
            "Truck" => Icon::Truck,
            "Crown" => Icon::Crown,
            "Layers" => Icon::Layers,
            "Settings" => Icon::Settings,
            "Wrench" => Icon::Wrench,
            "MapPin" => Icon::MapPin,
            "Phone" => Icon::Phone,
            "Mail" => Icon::Mail,
            "Message" => Icon::Message,
            _ => Icon::Settings,
        }
    }
}

/// Represents a truck brand
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    /// Unique id (e.g., "kenworth")
    pub id: String,
    /// Display name (e.g., "KENWORTH")
    pub name: String,
    /// Single-glyph logo
    pub logo: String,
    /// Accent colour as `#RRGGBB`, opaque to the core
    pub color: String,
    /// Model names in display order
    pub models: Vec<String>,
    pub description: Localized<String>,
}

impl Brand {
    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }
}

/// The five accessory groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Bumpers,
    Hood,
    Cabin,
    Steps,
    Chassis,
}

impl CategoryKey {
    /// Slug used as the product id prefix
    pub fn slug(self) -> &'static str {
        match self {
            CategoryKey::Bumpers => "bompers",
            CategoryKey::Hood => "capo",
            CategoryKey::Cabin => "cabina",
            CategoryKey::Steps => "estribos",
            CategoryKey::Chassis => "chasis",
        }
    }
}

/// A single accessory
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// `"{category-slug}-{index}"`
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Image URLs or paths, never empty for catalog products
    pub images: Vec<String>,
    pub price: Option<String>,
}

/// A named grouping of products, already rendered for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: CategoryKey,
    pub name: String,
    pub icon: Icon,
    pub emoji: String,
    pub description: String,
    pub items: Vec<Product>,
}
