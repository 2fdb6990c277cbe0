/// Presentation layer
///
/// Pure view functions over the state module, plus the two pieces of
/// UI-owned state: the image cache and the scroll observer.

pub mod catalog_view;
pub mod gallery_view;
pub mod icons;
pub mod images;
pub mod scroll;
pub mod sections;
pub mod theme;

use crate::config::SiteConfig;
use crate::leads::LeadLinks;
use crate::state::catalog::Catalog;
use crate::state::data::Language;
use crate::state::i18n::Translations;
use crate::state::navigation::NavigationState;
use images::ImageCache;

/// Everything a page section needs to render
#[derive(Clone, Copy)]
pub struct Page<'a> {
    pub text: &'static Translations,
    pub lang: Language,
    pub catalog: &'a Catalog,
    pub nav: &'a NavigationState,
    pub links: &'a LeadLinks,
    pub config: &'a SiteConfig,
    pub images: &'a ImageCache,
}
