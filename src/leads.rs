/// Outbound lead links (WhatsApp, phone, email)
///
/// The links are only formatted here; nothing checks what the other end does
/// with them.

use url::Url;

use crate::config::SiteConfig;
use crate::state::data::Language;

const WHATSAPP_BASE: &str = "https://wa.me/";

#[derive(Debug, Clone)]
pub struct LeadLinks {
    whatsapp_number: String,
}

impl LeadLinks {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            whatsapp_number: config
                .whatsapp_number
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
        }
    }

    /// Chat link with no prefilled message
    pub fn chat(&self) -> String {
        format!("{}{}", WHATSAPP_BASE, self.whatsapp_number)
    }

    /// Generic quote request
    pub fn quote(&self) -> String {
        self.with_text("Hola, quiero cotizar accesorios")
    }

    pub fn product(&self, product_name: &str) -> String {
        self.with_text(&format!("Me interesa el accesorio: {}", product_name))
    }

    pub fn category(&self, category_name: &str, lang: Language) -> String {
        match lang {
            Language::Es => self.with_text(&format!("Quiero cotizar accesorios de {}", category_name)),
            Language::En => self.with_text(&format!("I'd like a quote for {} accessories", category_name)),
        }
    }

    pub fn truck(&self, brand_name: &str, model: &str, lang: Language) -> String {
        match lang {
            Language::Es => self.with_text(&format!(
                "Quiero cotizar accesorios para mi {} {}",
                brand_name, model
            )),
            Language::En => self.with_text(&format!(
                "I'd like a quote for accessories for my {} {}",
                brand_name, model
            )),
        }
    }

    fn with_text(&self, text: &str) -> String {
        let base = self.chat();
        match Url::parse(&base) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("text", text);
                url.into()
            }
            // Only reachable with an empty number; fall back to the bare link
            Err(_) => base,
        }
    }
}

/// `tel:` link for a displayed phone number
pub fn tel_link(display: &str) -> String {
    let number: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", number)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}
