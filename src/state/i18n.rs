/// UI string bundles, one per language

use super::data::Language;

/// Every fixed string the UI renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub slogan: &'static str,
    pub main_title: [&'static str; 3],
    pub hero_description: &'static str,
    pub btn_catalog: &'static str,
    pub btn_quote: &'static str,
    pub catalog_title: &'static str,
    pub catalog_subtitle: &'static str,
    pub brands_title: &'static str,
    pub models_title: &'static str,
    pub accessories_title: &'static str,
    pub back_button: &'static str,
    pub services_title: &'static str,
    pub services_subtitle: &'static str,
    /// (title, description) per service card
    pub services: [(&'static str, &'static str); 4],
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub locations: &'static str,
    pub phones: &'static str,
    pub email: &'static str,
    pub nav_home: &'static str,
    pub nav_catalog: &'static str,
    pub nav_services: &'static str,
    pub nav_contact: &'static str,
    pub tags: [&'static str; 3],
    /// Badge on the truck header card
    pub stock_badge: &'static str,
    /// Product card footer: availability and call to action
    pub available: &'static str,
    pub view_details: &'static str,
    pub footer_copyright: &'static str,
    /// "Equip your {model}..." lead-in on the truck header card
    pub equip_prefix: &'static str,
    pub equip_suffix: &'static str,
    pub gallery_quote: &'static str,
    pub gallery_close: &'static str,
    pub live_chat: &'static str,
    pub link_copied: &'static str,
}

impl Translations {
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

pub static ES: Translations = Translations {
    slogan: "Líder en Lujos de camiones",
    main_title: ["Potencia y", "Calidad", "Garantizado"],
    hero_description: "Accesorios de lujo premium para tractocamiones. Transformamos tu cabina en un espacio de confort y estilo con los mejores productos del mercado.",
    btn_catalog: "Ver Catálogo de Lujos",
    btn_quote: "Cotizar Accesorios",
    catalog_title: "CATÁLOGO DE TRACTOCAMIONES",
    catalog_subtitle: "Seleccione una marca para ver los modelos disponibles",
    brands_title: "MARCAS DISPONIBLES",
    models_title: "MODELOS",
    accessories_title: "ACCESORIOS Y LUJOS DISPONIBLES",
    back_button: "Volver a Marcas",
    services_title: "NUESTROS SERVICIOS",
    services_subtitle: "Soluciones completas para tu tractocamión",
    services: [
        ("Repuestos Originales", "Piezas certificadas para todas las marcas"),
        ("Accesorios de Lujo", "Personaliza tu camión con estilo premium"),
        ("Garantía Completa", "Respaldo total en productos y servicios"),
        ("Envío Nacional", "Entregamos en todo Colombia"),
    ],
    contact_title: "CONTÁCTANOS",
    contact_subtitle: "¿Listo para equipar tu tractocamión? Cotiza ahora",
    locations: "UBICACIONES",
    phones: "TELÉFONOS",
    email: "CORREO",
    nav_home: "Inicio",
    nav_catalog: "Catálogo",
    nav_services: "Servicios",
    nav_contact: "Contactar",
    tags: [
        "✓ Accesorios Premium",
        "✓ Accesorios en Acero Inoxidable",
        "✓ Envío Nacional",
    ],
    stock_badge: "Stock Disponible",
    available: "Disponible",
    view_details: "Ver Detalles",
    footer_copyright: "Tractolujos Tamayo - Todos los derechos reservados",
    equip_prefix: "Equipa tu",
    equip_suffix: "con los mejores accesorios del mercado. Garantía certificada y acabados de lujo para destacar en la carretera.",
    gallery_quote: "Cotizar por WhatsApp",
    gallery_close: "Cerrar",
    live_chat: "Chat en vivo",
    link_copied: "Enlace copiado al portapapeles",
};

pub static EN: Translations = Translations {
    slogan: "Leader in Truck Luxury Accessories",
    main_title: ["Power and", "Quality", "Guaranteed"],
    hero_description: "Premium luxury accessories for semi-trucks. We transform your cabin into a space of comfort and style with the best products on the market.",
    btn_catalog: "View Luxury Catalog",
    btn_quote: "Get Quote",
    catalog_title: "SEMI-TRUCK CATALOG",
    catalog_subtitle: "Select a brand to view available models",
    brands_title: "AVAILABLE BRANDS",
    models_title: "MODELS",
    accessories_title: "ACCESSORIES & LUXURY ITEMS",
    back_button: "Back to Brands",
    services_title: "OUR SERVICES",
    services_subtitle: "Complete solutions for your semi-truck",
    services: [
        ("Original Parts", "Certified parts for all brands"),
        ("Luxury Accessories", "Customize your truck with premium style"),
        ("Full Warranty", "Total backing on products and services"),
        ("National Shipping", "We deliver throughout Colombia"),
    ],
    contact_title: "CONTACT US",
    contact_subtitle: "Ready to upgrade? Get a quote now",
    locations: "LOCATIONS",
    phones: "PHONES",
    email: "EMAIL",
    nav_home: "Home",
    nav_catalog: "Catalog",
    nav_services: "Services",
    nav_contact: "Contact",
    tags: [
        "✓ Premium Accessories",
        "✓ Stainless Steel Accessories",
        "✓ National Shipping",
    ],
    stock_badge: "In Stock",
    available: "Available",
    view_details: "View Details",
    footer_copyright: "Tractolujos Tamayo - All rights reserved",
    equip_prefix: "Equip your",
    equip_suffix: "with the best accessories on the market. Certified warranty and luxury finishes to stand out on the road.",
    gallery_quote: "Quote via WhatsApp",
    gallery_close: "Close",
    live_chat: "Live chat",
    link_copied: "Link copied to clipboard",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundles_differ_per_language() {
        let es = Translations::for_language(Language::Es);
        let en = Translations::for_language(Language::En);
        assert_eq!(es.back_button, "Volver a Marcas");
        assert_eq!(en.back_button, "Back to Brands");
        assert_ne!(es, en);
    }

    #[test]
    fn test_card_and_badge_labels() {
        let es = Translations::for_language(Language::Es);
        assert_eq!(es.stock_badge, "Stock Disponible");
        assert_eq!((es.available, es.view_details), ("Disponible", "Ver Detalles"));

        let en = Translations::for_language(Language::En);
        assert_eq!(en.stock_badge, "In Stock");
        assert_eq!((en.available, en.view_details), ("Available", "View Details"));
    }
}
