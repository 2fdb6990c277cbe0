/// Catalog drill-down: Brands -> Models -> Detail
///
/// `NavigationState` is a strict three-level stack. A model can only be
/// selected once a brand is, and `back()` unwinds exactly one level.
/// Every level change is reported to the registered `ViewObserver`s so the
/// UI can react (e.g. scroll the catalog anchor into view) without the
/// state machine knowing anything about rendering.

use std::sync::Arc;

use tracing::debug;

use super::catalog::Catalog;
use super::data::{Brand, Category, Language};
use crate::error::CatalogError;

/// The three drill-down levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Brands,
    Models,
    Detail,
}

/// A completed level change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewChanged {
    pub from: View,
    pub to: View,
}

/// Receives every level change
pub trait ViewObserver {
    fn view_changed(&mut self, event: ViewChanged);
}

#[derive(Debug, Clone, Default)]
struct Selection {
    brand: Option<Arc<Brand>>,
    model: Option<String>,
}

/// Single-owner navigation state for one browsing session
#[derive(Default)]
pub struct NavigationState {
    view: View,
    selection: Selection,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_brand(&self) -> Option<&Arc<Brand>> {
        self.selection.brand.as_ref()
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selection.model.as_deref()
    }

    /// Pick a brand. Only valid on the brands level.
    pub fn select_brand(&mut self, brand: Arc<Brand>) -> Result<ViewChanged, CatalogError> {
        if self.view != View::Brands {
            return Err(CatalogError::InvalidSelection(format!(
                "cannot select brand `{}` from the {:?} level",
                brand.id, self.view
            )));
        }

        debug!(brand = %brand.id, "brand selected");
        self.selection = Selection {
            brand: Some(brand),
            model: None,
        };
        Ok(self.move_to(View::Models))
    }

    /// Pick a model of the selected brand. Only valid on the models level.
    pub fn select_model(&mut self, model: &str) -> Result<ViewChanged, CatalogError> {
        let brand = match (&self.view, &self.selection.brand) {
            (View::Models, Some(brand)) => brand,
            _ => {
                return Err(CatalogError::InvalidSelection(format!(
                    "cannot select model `{}` from the {:?} level",
                    model, self.view
                )))
            }
        };

        if !brand.has_model(model) {
            return Err(CatalogError::InvalidSelection(format!(
                "`{}` is not a {} model",
                model, brand.name
            )));
        }

        debug!(brand = %brand.id, model, "model selected");
        self.selection.model = Some(model.to_string());
        Ok(self.move_to(View::Detail))
    }

    /// Unwind one level. `None` when already on the brands level.
    pub fn back(&mut self) -> Option<ViewChanged> {
        match self.view {
            View::Brands => None,
            View::Models => {
                self.selection.brand = None;
                Some(self.move_to(View::Brands))
            }
            View::Detail => {
                self.selection.model = None;
                Some(self.move_to(View::Models))
            }
        }
    }

    /// Return to the brands level with nothing selected
    pub fn reset(&mut self) -> Option<ViewChanged> {
        self.selection = Selection::default();
        if self.view == View::Brands {
            None
        } else {
            Some(self.move_to(View::Brands))
        }
    }

    /// Models of the selected brand, in stored order
    pub fn current_model_list(&self) -> Option<&[String]> {
        match self.view {
            View::Brands => None,
            View::Models | View::Detail => {
                self.selection.brand.as_deref().map(|b| b.models.as_slice())
            }
        }
    }

    /// Every category, on the detail level only. The list is the same for
    /// every brand and model.
    pub fn current_categories<'a>(
        &self,
        catalog: &'a Catalog,
        lang: Language,
    ) -> Option<&'a [Category]> {
        (self.view == View::Detail).then(|| catalog.categories(lang))
    }

    fn move_to(&mut self, to: View) -> ViewChanged {
        let event = ViewChanged {
            from: self.view,
            to,
        };
        self.view = to;
        debug!(from = ?event.from, to = ?event.to, "view changed");
        for observer in &mut self.observers {
            observer.view_changed(event);
        }
        event
    }
}

impl std::fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationState")
            .field("view", &self.view)
            .field("brand", &self.selection.brand.as_ref().map(|b| &b.id))
            .field("model", &self.selection.model)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Arc<Mutex<Vec<ViewChanged>>>);

    impl ViewObserver for Recorder {
        fn view_changed(&mut self, event: ViewChanged) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_starts_on_brands() {
        let nav = NavigationState::new();
        assert_eq!(nav.view(), View::Brands);
        assert!(nav.selected_brand().is_none());
        assert!(nav.selected_model().is_none());
        assert!(nav.current_model_list().is_none());
    }

    #[test]
    fn test_select_brand_then_back_for_every_brand() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        for brand in catalog.brands() {
            nav.select_brand(brand.clone()).unwrap();
            assert_eq!(nav.view(), View::Models);
            nav.back();
            assert_eq!(nav.view(), View::Brands);
            assert!(nav.selected_brand().is_none());
        }
    }

    #[test]
    fn test_every_model_round_trips_through_detail() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        for brand in catalog.brands() {
            nav.select_brand(brand.clone()).unwrap();
            for model in &brand.models {
                nav.select_model(model).unwrap();
                assert_eq!(nav.view(), View::Detail);
                assert_eq!(nav.selected_brand().map(|b| b.id.as_str()), Some(brand.id.as_str()));
                assert_eq!(nav.selected_model(), Some(model.as_str()));

                nav.back();
                assert_eq!(nav.view(), View::Models);
                assert_eq!(nav.selected_brand().map(|b| b.id.as_str()), Some(brand.id.as_str()));
                assert!(nav.selected_model().is_none());
            }
            nav.back();
        }
    }

    #[test]
    fn test_kenworth_scenario() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        nav.select_brand(catalog.brand("kenworth").unwrap()).unwrap();
        assert_eq!(nav.view(), View::Models);
        assert_eq!(
            nav.current_model_list().unwrap(),
            &["T800", "T880", "T680", "Aerocab"]
        );

        nav.select_model("T680").unwrap();
        assert_eq!(nav.view(), View::Detail);
        assert_eq!(nav.selected_model(), Some("T680"));
        assert_eq!(nav.current_model_list().unwrap().len(), 4);
    }

    #[test]
    fn test_model_of_another_brand_is_rejected() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        nav.select_brand(catalog.brand("kenworth").unwrap()).unwrap();
        let err = nav.select_model("Cascadia 2020").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSelection(_)));
        assert_eq!(nav.view(), View::Models);
        assert!(nav.selected_model().is_none());
    }

    #[test]
    fn test_levels_cannot_be_skipped() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        assert!(nav.select_model("T800").is_err());

        let kenworth = catalog.brand("kenworth").unwrap();
        nav.select_brand(kenworth.clone()).unwrap();
        assert!(nav.select_brand(catalog.brand("mack").unwrap()).is_err());
        assert_eq!(nav.selected_brand().map(|b| b.id.as_str()), Some("kenworth"));

        nav.select_model("T800").unwrap();
        assert!(nav.select_model("T880").is_err());
        assert_eq!(nav.selected_model(), Some("T800"));
    }

    #[test]
    fn test_back_unwinds_one_level_at_a_time() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        nav.select_brand(catalog.brand("scania").unwrap()).unwrap();
        nav.select_model("Serie R").unwrap();

        assert_eq!(nav.back().map(|e| e.to), Some(View::Models));
        assert_eq!(nav.back().map(|e| e.to), Some(View::Brands));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.view(), View::Brands);
    }

    #[test]
    fn test_reset_clears_everything() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        nav.select_brand(catalog.brand("hino").unwrap()).unwrap();
        nav.select_model("Hino 500").unwrap();

        let event = nav.reset().unwrap();
        assert_eq!(event, ViewChanged { from: View::Detail, to: View::Brands });
        assert!(nav.selected_brand().is_none());
        assert!(nav.selected_model().is_none());
        assert_eq!(nav.reset(), None);
    }

    #[test]
    fn test_categories_only_on_detail_and_unfiltered() {
        let catalog = catalog();
        let mut nav = NavigationState::new();
        assert!(nav.current_categories(&catalog, Language::Es).is_none());

        nav.select_brand(catalog.brand("foton").unwrap()).unwrap();
        assert!(nav.current_categories(&catalog, Language::Es).is_none());

        nav.select_model("EST").unwrap();
        let categories = nav.current_categories(&catalog, Language::En).unwrap();
        assert_eq!(categories, catalog.categories(Language::En));
    }

    #[test]
    fn test_observers_see_every_level_change() {
        let catalog = catalog();
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut nav = NavigationState::new();
        nav.subscribe(Box::new(Recorder(events.clone())));

        nav.select_brand(catalog.brand("mack").unwrap()).unwrap();
        nav.select_model("Granite").unwrap();
        nav.back();
        let _ = nav.select_model("T800");
        nav.back();

        let seen: Vec<View> = events.lock().unwrap().iter().map(|e| e.to).collect();
        assert_eq!(seen, vec![View::Models, View::Detail, View::Models, View::Brands]);
    }
}
