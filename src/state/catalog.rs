use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::data::{Brand, Category, CategoryKey, Icon, Language, Localized, Product};
use crate::error::CatalogError;

/// Demo product photos. Real deployments point these at the shop's own uploads.
const DEMO_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1601584115197-04ecc0da31d7?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1591768793355-74d04bb6608f?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1503376763036-066120622c74?auto=format&fit=crop&q=80&w=800",
];

/// (id, name, logo, color, models, description es, description en)
type BrandRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
);

const BRANDS: [BrandRow; 11] = [
    (
        "kenworth",
        "KENWORTH",
        "🚛",
        "#C4161C",
        &["T800", "T880", "T680", "Aerocab"],
        "Kenworth es sinónimo de calidad y durabilidad en tractocamiones de clase mundial.",
        "Kenworth stands for quality and durability in world-class semi-trucks.",
    ),
    (
        "international",
        "INTERNATIONAL",
        "🚚",
        "#00529B",
        &["Eagle", "Workstar", "Prostar", "Durastar", "LT Series", "HV Series", "HX Series"],
        "International ofrece soluciones versátiles para transporte pesado y trabajo intensivo.",
        "International offers versatile solutions for heavy haulage and demanding work.",
    ),
    (
        "freightliner",
        "FREIGHTLINER",
        "🛻",
        "#004C97",
        &["Columbia", "Cascadia 2012", "Cascadia 2020", "M2 106", "M2 112"],
        "Freightliner lidera la innovación en eficiencia y tecnología para tractocamiones.",
        "Freightliner leads innovation in efficiency and technology for semi-trucks.",
    ),
    (
        "shacman",
        "SHACMAN",
        "🚜",
        "#E31837",
        &["X3000", "F3000", "H3000"],
        "Shacman ofrece potencia y resistencia para las condiciones más exigentes.",
        "Shacman delivers power and toughness for the most demanding conditions.",
    ),
    (
        "scania",
        "SCANIA",
        "🦁",
        "#041E42",
        &["Serie R", "Serie S", "Serie G", "Serie P"],
        "Scania representa la excelencia sueca en ingeniería de transporte pesado.",
        "Scania represents Swedish excellence in heavy transport engineering.",
    ),
    (
        "foton",
        "FOTON",
        "🔧",
        "#003DA5",
        &["Auman", "EST", "ETX"],
        "Foton combina tecnología avanzada con excelente relación calidad-precio.",
        "Foton combines advanced technology with excellent value for money.",
    ),
    (
        "sinotruk",
        "SINOTRUK",
        "⚙️",
        "#D71921",
        &["Howo TX", "Howo A7", "Sitrak"],
        "Sinotruk es líder en camiones pesados con tecnología robusta y confiable.",
        "Sinotruk is a leader in heavy trucks with robust, reliable technology.",
    ),
    (
        "hino",
        "HINO",
        "🔴",
        "#E60012",
        &["Hino 300", "Hino 500", "Hino 700"],
        "Hino ofrece la confiabilidad japonesa en transporte de carga mediana y pesada.",
        "Hino brings Japanese reliability to medium and heavy freight.",
    ),
    (
        "mack",
        "MACK",
        "🐕",
        "#FFB81C",
        &["Anthem", "Pinnacle", "Granite", "LR"],
        "Mack Trucks, construidos como un Mack, sinónimo de potencia y durabilidad.",
        "Mack Trucks, built like a Mack, a byword for power and durability.",
    ),
    (
        "chevrolet",
        "CHEVROLET",
        "➕",
        "#D4AF37",
        &["Silverado", "FTR", "NQR", "NPR"],
        "Chevrolet ofrece versatilidad y confianza en vehículos comerciales.",
        "Chevrolet offers versatility and confidence in commercial vehicles.",
    ),
    (
        "mercedesbenz",
        "MERCEDES-BENZ",
        "⭐",
        "#00ADEF",
        &["Actros", "Arocs", "Atego", "Axor"],
        "Mercedes-Benz define el lujo y la tecnología premium en transporte pesado.",
        "Mercedes-Benz defines luxury and premium technology in heavy transport.",
    ),
];

/// Per-category table row
struct CategoryRow {
    key: CategoryKey,
    name: Localized<&'static str>,
    icon_key: &'static str,
    emoji: &'static str,
    description: Localized<&'static str>,
    products: &'static [&'static str],
}

const CATEGORIES: [CategoryRow; 5] = [
    CategoryRow {
        key: CategoryKey::Bumpers,
        name: Localized { es: "BOMPERS", en: "BUMPERS" },
        icon_key: "Shield",
        emoji: "💥",
        description: Localized {
            es: "Accesorios relacionados con el parachoques delantero",
            en: "Accessories for the front bumper",
        },
        products: &[
            "Bomper tipo ranchero",
            "Bomper tipo sesgado",
            "Centro de bomper",
            "Mallas exploradoras",
            "Porta placas alto relieve",
            "Guías",
            "Spoiler",
            "Soportes para exploradoras",
            "Platinas guía bumper",
            "Pepinos",
            "Cucuyos ovalados",
            "Extensiones laterales de bumper",
        ],
    },
    CategoryRow {
        key: CategoryKey::Hood,
        name: Localized { es: "CAPÓ", en: "HOOD" },
        icon_key: "Truck",
        emoji: "🚀",
        description: Localized {
            es: "Accesorios y componentes del capó",
            en: "Hood accessories and components",
        },
        products: &[
            "Deflector de insectos (matamosquitos)",
            "Persianas",
            "Tubo de la bisagra",
            "Deflectores de las unidades",
            "Eles de las unidades",
            "Emblema del capó",
            "Refuerzos del capó",
            "Guardabarros",
            "Poseel del capó",
            "Módulo del motor",
        ],
    },
    CategoryRow {
        key: CategoryKey::Cabin,
        name: Localized { es: "CABINA", en: "CABIN" },
        icon_key: "Crown",
        emoji: "👑",
        description: Localized {
            es: "Accesorios externos e internos de la cabina",
            en: "Exterior and interior cabin accessories",
        },
        products: &[
            "Cornetas",
            "Boceles de los relojes",
            "Soporte para licuadoras",
            "Licuadoras",
            "Mallas de los exostos",
            "Deflectores de ventana",
            "Descansa brazos",
            "Chapas de las puertas",
            "Bocel chapas Gran General",
            "Soportes, regletas y espejos",
            "Porta placa bajo puerta",
            "Lámina bajo puerta",
            "Marco cromado de ventanilla",
            "Seguro de ventanilla copiloto",
            "Extensión de guardabarros",
            "Mallas de los filtros",
            "Portacocuyos delantero de filtros",
            "Portacocuyos trasero de filtros",
            "Seguros de los filtros",
            "Seguro posterior",
            "Soporte de alerón",
            "Portacocuyos del alerón",
            "Portacocuyos bajo puerta",
            "Antenas",
            "Soportes para antenas",
            "Resortes para antenas",
            "Porta placas pequeño",
            "Seguro de los espejos",
            "Portacocuyos bajo espejos (tortugas)",
            "Escuadra para caja de herramientas",
            "Rejilla de entrada de aire lateral del capó",
            "Tapa de batería",
            "Ovispos",
        ],
    },
    CategoryRow {
        key: CategoryKey::Steps,
        name: Localized { es: "ESTRIBOS Y ALARGUES", en: "STEPS & EXTENSIONS" },
        icon_key: "Layers",
        emoji: "⚡",
        description: Localized {
            es: "Accesorios de acceso y protección lateral",
            en: "Access and side protection accessories",
        },
        products: &[
            "Estribo de tanque",
            "Estribo intermedio de tanque",
            "Estribo inferior de tanque",
            "Estribo de caja de herramientas",
            "Estribo primer paso",
            "Alargue de estribo intermedio de tanque",
            "Alargue de estribo inferior de tanque",
            "Alargue de estribo primer paso",
            "Alargue de estribo de caja de herramientas",
            "Forro de urea con estribo",
            "Protector de catalizador",
        ],
    },
    CategoryRow {
        key: CategoryKey::Chassis,
        name: Localized { es: "CHASIS", en: "CHASSIS" },
        icon_key: "Settings",
        emoji: "🔧",
        description: Localized {
            es: "Accesorios del chasis y protección",
            en: "Chassis accessories and protection",
        },
        products: &[
            "Parrilla de chasis",
            "Guardapolvos delantero",
            "Guardapolvos trasero y osculizable",
            "Pesas de los cauchos",
            "Cauchos de los osculizables",
            "Forro de chasis",
            "Porta placas posterior grande",
            "Guarda grasas",
            "Soportes de pintor",
            "Porta placas posterior mediano",
            "Portacocuyos detrás de la cabina",
        ],
    },
];

/// Demo image set for the product at `index`: every third product gets
/// three views, other even ones two, the rest one.
fn demo_images(index: usize) -> Vec<String> {
    let picks: &[usize] = if index % 3 == 0 {
        &[0, 1, 2]
    } else if index % 2 == 0 {
        &[1, 2]
    } else {
        &[2]
    };
    picks.iter().map(|&i| DEMO_IMAGES[i].to_string()).collect()
}

fn product_description(name: &str, lang: Language) -> String {
    match lang {
        Language::Es => format!(
            "Accesorio de alta calidad para {}. Acabado premium en acero inoxidable.",
            name
        ),
        Language::En => format!(
            "High quality accessory for {}. Premium stainless steel finish.",
            name
        ),
    }
}

fn build_categories(lang: Language) -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|row| Category {
            key: row.key,
            name: row.name.get(lang).to_string(),
            icon: Icon::from_key(row.icon_key),
            emoji: row.emoji.to_string(),
            description: row.description.get(lang).to_string(),
            items: row
                .products
                .iter()
                .enumerate()
                .map(|(index, name)| Product {
                    id: format!("{}-{}", row.key.slug(), index),
                    name: name.to_string(),
                    description: Some(product_description(name, lang)),
                    images: demo_images(index),
                    price: None,
                })
                .collect(),
        })
        .collect()
}

fn build_brands() -> Vec<Brand> {
    BRANDS
        .iter()
        .map(|&(id, name, logo, color, models, es, en)| Brand {
            id: id.to_string(),
            name: name.to_string(),
            logo: logo.to_string(),
            color: color.to_string(),
            models: models.iter().map(|m| m.to_string()).collect(),
            description: Localized::new(es.to_string(), en.to_string()),
        })
        .collect()
}

/// The static, read-only catalog: brands in display order plus the
/// category set for each language.
#[derive(Debug, Clone)]
pub struct Catalog {
    brands: Vec<Arc<Brand>>,
    categories_es: Vec<Category>,
    categories_en: Vec<Category>,
}

impl Catalog {
    /// Build the shop's catalog from the embedded tables
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_records(
            build_brands(),
            build_categories(Language::Es),
            build_categories(Language::En),
        )
    }

    /// Build a catalog from explicit records, validating its invariants:
    /// unique brand ids, non-empty model lists, matching category sets per
    /// language and at least one image per product.
    pub fn from_records(
        brands: Vec<Brand>,
        categories_es: Vec<Category>,
        categories_en: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for brand in &brands {
            if !seen.insert(brand.id.as_str()) {
                return Err(CatalogError::Malformed(format!(
                    "duplicate brand id `{}`",
                    brand.id
                )));
            }
            if brand.models.is_empty() {
                return Err(CatalogError::Malformed(format!(
                    "brand `{}` has no models",
                    brand.id
                )));
            }
        }

        let keys_es = categories_es.iter().map(|c| c.key);
        if !keys_es.eq(categories_en.iter().map(|c| c.key)) {
            return Err(CatalogError::Malformed(
                "localized category sets differ".to_string(),
            ));
        }

        for product in categories_es
            .iter()
            .chain(categories_en.iter())
            .flat_map(|c| c.items.iter())
        {
            if product.images.is_empty() {
                return Err(CatalogError::InvalidProduct(product.id.clone()));
            }
        }

        let product_count: usize = categories_es.iter().map(|c| c.items.len()).sum();
        debug!(
            brands = brands.len(),
            categories = categories_es.len(),
            products = product_count,
            "catalog loaded"
        );

        Ok(Self {
            brands: brands.into_iter().map(Arc::new).collect(),
            categories_es,
            categories_en,
        })
    }

    /// All brands in display order
    pub fn brands(&self) -> &[Arc<Brand>] {
        &self.brands
    }

    pub fn brand(&self, id: &str) -> Result<Arc<Brand>, CatalogError> {
        self.brands
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBrand(id.to_string()))
    }

    /// The full category set for a language. Not filtered by brand or model.
    pub fn categories(&self, lang: Language) -> &[Category] {
        match lang {
            Language::Es => &self.categories_es,
            Language::En => &self.categories_en,
        }
    }

    pub fn product(&self, id: &str, lang: Language) -> Option<&Product> {
        self.categories(lang)
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|p| p.id == id)
    }

    pub fn product_count(&self) -> usize {
        self.categories_es.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_brands_in_display_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.brands().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids[0], "kenworth");
        assert_eq!(ids[10], "mercedesbenz");
    }

    #[test]
    fn test_kenworth_models_keep_order() {
        let kenworth = catalog().brand("kenworth").unwrap();
        assert_eq!(kenworth.models, vec!["T800", "T880", "T680", "Aerocab"]);
        assert!(kenworth.has_model("T680"));
        assert!(!kenworth.has_model("Cascadia 2020"));
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(
            catalog().brand("volvo"),
            Err(CatalogError::UnknownBrand("volvo".to_string()))
        );
    }

    #[test]
    fn test_every_product_has_an_image() {
        let catalog = catalog();
        for lang in [Language::Es, Language::En] {
            for product in catalog.categories(lang).iter().flat_map(|c| c.items.iter()) {
                assert!(!product.images.is_empty(), "{} has no images", product.id);
            }
        }
        assert_eq!(catalog.product_count(), 77);
    }

    #[test]
    fn test_demo_image_counts() {
        assert_eq!(demo_images(0).len(), 3);
        assert_eq!(demo_images(1).len(), 1);
        assert_eq!(demo_images(2).len(), 2);
        assert_eq!(demo_images(3).len(), 3);
        assert_eq!(demo_images(4).len(), 2);
    }

    #[test]
    fn test_categories_are_localized() {
        let catalog = catalog();
        let es: Vec<&str> = catalog.categories(Language::Es).iter().map(|c| c.name.as_str()).collect();
        let en: Vec<&str> = catalog.categories(Language::En).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(es, vec!["BOMPERS", "CAPÓ", "CABINA", "ESTRIBOS Y ALARGUES", "CHASIS"]);
        assert_eq!(en, vec!["BUMPERS", "HOOD", "CABIN", "STEPS & EXTENSIONS", "CHASSIS"]);

        let hood = catalog
            .categories(Language::En)
            .iter()
            .find(|c| c.key == CategoryKey::Hood)
            .unwrap();
        assert_eq!(hood.icon, Icon::Truck);
        assert_eq!(hood.description, "Hood accessories and components");
    }

    #[test]
    fn test_product_lookup_by_id() {
        let catalog = catalog();
        let es = catalog.product("capo-5", Language::Es).unwrap();
        let en = catalog.product("capo-5", Language::En).unwrap();
        assert_eq!(es.name, "Emblema del capó");
        assert_eq!(es.name, en.name);
        assert_ne!(es.description, en.description);
        assert!(catalog.product("capo-99", Language::Es).is_none());
    }

    #[test]
    fn test_rejects_product_without_images() {
        let mut categories = build_categories(Language::Es);
        categories[0].items[0].images.clear();
        let result = Catalog::from_records(build_brands(), categories, build_categories(Language::En));
        assert_eq!(result.unwrap_err(), CatalogError::InvalidProduct("bompers-0".to_string()));
    }

    #[test]
    fn test_rejects_mismatched_category_sets() {
        let mut en = build_categories(Language::En);
        en.pop();
        let err = Catalog::from_records(build_brands(), build_categories(Language::Es), en)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_rejects_duplicate_brand_ids() {
        let mut brands = build_brands();
        brands.push(brands[0].clone());
        let result = Catalog::from_records(brands, Vec::new(), Vec::new());
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }
}
