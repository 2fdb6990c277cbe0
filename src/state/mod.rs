/// State management module
///
/// This module holds everything the UI renders from, with no UI types:
/// - Catalog tables and lookups (catalog.rs)
/// - Shared data structures (data.rs)
/// - Text bundles per language (i18n.rs)
/// - Drill-down navigation (navigation.rs)
/// - Image gallery overlay (gallery.rs)
/// - Active language and the startup lookup (locale.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
pub mod i18n;
pub mod locale;
pub mod navigation;
