use iced::keyboard::{self, key};
use iced::widget::scrollable::Viewport;
use iced::widget::{column, scrollable, Stack};
use iced::{Element, Length, Subscription, Task, Theme};
use reqwest::Client;
use tracing::{debug, info, warn};

mod config;
mod error;
mod geo;
mod leads;
mod state;
mod telemetry;
mod ui;

use config::SiteConfig;
use error::{CatalogError, GeoError};
use leads::LeadLinks;
use state::catalog::Catalog;
use state::gallery::GalleryState;
use state::locale::LocaleState;
use state::navigation::NavigationState;
use ui::images::ImageCache;
use ui::scroll::{Anchor, ScrollToCatalog};
use ui::{catalog_view, gallery_view, sections, Page};

/// Everything built before the window opens
struct Boot {
    catalog: Catalog,
    config: SiteConfig,
    client: Client,
}

/// Main application state
struct Tractolujos {
    /// Static brands, categories and products
    catalog: Catalog,
    config: SiteConfig,
    links: LeadLinks,
    /// Shared HTTP client for the lookup and image fetches
    client: Client,
    locale: LocaleState,
    nav: NavigationState,
    gallery: GalleryState,
    images: ImageCache,
    /// Set by navigation when the catalog should scroll into view
    scroll: ScrollToCatalog,
    /// Last reported page viewport
    viewport: Option<Viewport>,
    /// Anchor waiting for the first viewport report
    pending_anchor: Option<Anchor>,
    /// Last lead link copied to the clipboard
    copied_link: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup geolocation lookup finished
    CountryResolved(Result<String, GeoError>),
    ToggleLanguage,
    /// Logo click: back to the brand grid and the top of the page
    Home,
    ScrollTo(Anchor),
    PageScrolled(Viewport),
    SelectBrand(String),
    SelectModel(String),
    Back,
    /// Open the gallery for a product id
    OpenGallery(String),
    CloseGallery,
    NextImage,
    PrevImage,
    JumpToImage(usize),
    /// Background image load completed
    ImageLoaded(String, Result<iced::widget::image::Handle, String>),
    /// Copy an outbound lead link to the clipboard
    CopyLink(String),
}

impl Tractolujos {
    /// Create a new instance of the application and start the language lookup
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            catalog,
            config,
            client,
        } = boot;

        let scroll = ScrollToCatalog::new();
        let mut nav = NavigationState::new();
        nav.subscribe(Box::new(scroll.clone()));

        let locale = LocaleState::new(&config.geolocation.english_countries);
        let links = LeadLinks::new(&config);

        info!(
            brands = catalog.brands().len(),
            products = catalog.product_count(),
            "catalog browser initialized"
        );

        // Fire-and-forget: nothing waits on this, failures keep Spanish
        let lookup = Task::perform(
            geo::lookup_country(client.clone(), config.geolocation.endpoint.clone()),
            Message::CountryResolved,
        );

        (
            Tractolujos {
                catalog,
                config,
                links,
                client,
                locale,
                nav,
                gallery: GalleryState::new(),
                images: ImageCache::default(),
                scroll,
                viewport: None,
                pending_anchor: None,
                copied_link: None,
            },
            lookup,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CountryResolved(outcome) => {
                self.locale.apply_lookup(outcome);
                Task::none()
            }
            Message::ToggleLanguage => {
                self.locale.toggle();
                Task::none()
            }
            Message::Home => {
                self.gallery.close();
                self.nav.reset();
                self.scroll_page(Anchor::Hero)
            }
            Message::ScrollTo(anchor) => {
                self.gallery.close();
                self.scroll_page(anchor)
            }
            Message::PageScrolled(viewport) => {
                self.viewport = Some(viewport);
                match self.pending_anchor.take() {
                    Some(anchor) => self.scroll_page(anchor),
                    None => Task::none(),
                }
            }
            Message::SelectBrand(id) => {
                self.gallery.close();
                let result = self
                    .catalog
                    .brand(&id)
                    .and_then(|brand| self.nav.select_brand(brand));
                self.after_transition(result.map(|_| ()))
            }
            Message::SelectModel(model) => {
                self.gallery.close();
                let result = self.nav.select_model(&model);
                let covers = if result.is_ok() {
                    self.load_card_images()
                } else {
                    Task::none()
                };
                Task::batch([self.after_transition(result.map(|_| ())), covers])
            }
            Message::Back => {
                self.gallery.close();
                self.nav.back();
                self.after_transition(Ok(()))
            }
            Message::OpenGallery(id) => {
                let Some(product) = self.catalog.product(&id, self.locale.lang()).cloned() else {
                    warn!(product = %id, "unknown product");
                    return Task::none();
                };
                match self.gallery.open(product) {
                    Ok(()) => {
                        debug!(
                            registrations = self.gallery.listener_registrations(),
                            releases = self.gallery.listener_releases(),
                            "gallery key listener armed"
                        );
                        self.load_gallery_images()
                    }
                    Err(err) => {
                        warn!(error = %err, "gallery refused product");
                        Task::none()
                    }
                }
            }
            Message::CloseGallery => {
                self.gallery.close();
                Task::none()
            }
            Message::NextImage => {
                self.gallery.next();
                Task::none()
            }
            Message::PrevImage => {
                self.gallery.prev();
                Task::none()
            }
            Message::JumpToImage(index) => {
                if let Err(err) = self.gallery.jump_to(index) {
                    warn!(error = %err, "thumbnail jump ignored");
                }
                Task::none()
            }
            Message::ImageLoaded(reference, result) => {
                self.images.finish(reference, result);
                Task::none()
            }
            Message::CopyLink(link) => {
                info!(%link, "lead link copied");
                self.copied_link = Some(link.clone());
                iced::clipboard::write(link)
            }
        }
    }

    /// Log a rejected transition and scroll if navigation asked for it
    fn after_transition(&mut self, result: Result<(), CatalogError>) -> Task<Message> {
        if let Err(err) = result {
            warn!(error = %err, "navigation rejected");
        }

        if self.scroll.take() {
            self.scroll_page(Anchor::Catalog)
        } else {
            Task::none()
        }
    }

    /// Scroll to `anchor`, or snap to the end and retry once a viewport
    /// reports the content height
    fn scroll_page(&mut self, anchor: Anchor) -> Task<Message> {
        match ui::scroll::target(anchor, self.viewport.as_ref()) {
            Some(target) => {
                self.pending_anchor = None;
                ui::scroll::scroll_to(target)
            }
            None => {
                self.pending_anchor = Some(anchor);
                ui::scroll::scroll_to(ui::scroll::Target::End)
            }
        }
    }

    /// Start loading the open product's images that are not cached yet
    fn load_gallery_images(&mut self) -> Task<Message> {
        let Some(product) = self.gallery.product() else {
            return Task::none();
        };

        let claimed = self.images.claim(&product.images);
        debug!(count = claimed.len(), "loading gallery images");
        self.load_images(claimed)
    }

    /// Start loading the cover image of every product card on the detail level
    fn load_card_images(&mut self) -> Task<Message> {
        let covers = self
            .nav
            .current_categories(&self.catalog, self.locale.lang())
            .unwrap_or(&[])
            .iter()
            .flat_map(|category| category.items.iter())
            .filter_map(|product| product.images.first());

        let claimed = self.images.claim(covers);
        debug!(count = claimed.len(), "loading product covers");
        self.load_images(claimed)
    }

    fn load_images(&self, references: Vec<String>) -> Task<Message> {
        Task::batch(references.into_iter().map(|reference| {
            Task::perform(
                ui::images::load(self.client.clone(), reference),
                |(reference, result)| Message::ImageLoaded(reference, result),
            )
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let (lang, text, _) = self.locale.current(&self.catalog);
        let page = Page {
            text,
            lang,
            catalog: &self.catalog,
            nav: &self.nav,
            links: &self.links,
            config: &self.config,
            images: &self.images,
        };

        let status = self
            .copied_link
            .as_ref()
            .map(|link| format!("{}: {}", text.link_copied, link));

        let content = scrollable(column![
            sections::hero(page),
            catalog_view::view(page),
            sections::services(page),
            sections::contact(page),
            sections::footer(page),
        ])
        .id(ui::scroll::page_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new()
            .push(column![sections::header(page, status), content])
            .push(sections::whatsapp_button(page))
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(overlay) = gallery_view::view(&self.gallery, &self.images, text, &self.links) {
            layers = layers.push(overlay);
        }

        layers.into()
    }

    /// Keyboard listener that exists only while the gallery is open
    fn subscription(&self) -> Subscription<Message> {
        if self.gallery.is_open() {
            keyboard::on_key_press(gallery_key)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn gallery_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseGallery),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PrevImage),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
        _ => None,
    }
}

/// Load `config.toml`, falling back to the defaults on any problem
fn load_config() -> SiteConfig {
    let Some(path) = SiteConfig::default_path() else {
        return SiteConfig::default();
    };

    match SiteConfig::load(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "configuration loaded");
            config
        }
        Err(err) => {
            warn!(error = %err, "ignoring configuration file, using defaults");
            SiteConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = load_config();
    let catalog = Catalog::load()?;
    let client = geo::http_client(config.geolocation.timeout())?;
    let boot = Boot {
        catalog,
        config,
        client,
    };

    iced::application("Tractolujos Tamayo", Tractolujos::update, Tractolujos::view)
        .subscription(Tractolujos::subscription)
        .theme(Tractolujos::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || Tractolujos::new(boot))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::Language;
    use state::navigation::View;
    use ui::images::ImageSlot;

    #[test]
    fn test_escape_closes_and_arrows_navigate() {
        let none = keyboard::Modifiers::empty();
        assert!(matches!(
            gallery_key(keyboard::Key::Named(key::Named::Escape), none),
            Some(Message::CloseGallery)
        ));
        assert!(matches!(
            gallery_key(keyboard::Key::Named(key::Named::ArrowRight), none),
            Some(Message::NextImage)
        ));
        assert!(matches!(
            gallery_key(keyboard::Key::Named(key::Named::ArrowLeft), none),
            Some(Message::PrevImage)
        ));
        assert!(gallery_key(keyboard::Key::Character("a".into()), none).is_none());
    }

    fn app() -> Tractolujos {
        let boot = Boot {
            catalog: Catalog::load().unwrap(),
            config: SiteConfig::default(),
            client: Client::new(),
        };
        Tractolujos::new(boot).0
    }

    #[test]
    fn test_rejected_model_keeps_models_level() {
        let mut app = app();
        let _ = app.update(Message::SelectBrand("kenworth".to_string()));
        assert_eq!(app.nav.view(), View::Models);

        let _ = app.update(Message::SelectModel("Cascadia 2020".to_string()));
        assert_eq!(app.nav.view(), View::Models);
        assert_eq!(app.nav.selected_model(), None);

        let _ = app.update(Message::SelectModel("T680".to_string()));
        assert_eq!(app.nav.view(), View::Detail);
        assert_eq!(app.nav.selected_model(), Some("T680"));
    }

    #[test]
    fn test_detail_level_starts_loading_covers() {
        let mut app = app();
        let cover = app.catalog.product("bompers-0", Language::Es).unwrap().images[0].clone();
        assert!(app.images.get(&cover).is_none());

        let _ = app.update(Message::SelectBrand("kenworth".to_string()));
        assert!(app.images.get(&cover).is_none());

        let _ = app.update(Message::SelectModel("T800".to_string()));
        assert!(matches!(app.images.get(&cover), Some(ImageSlot::Loading)));
    }

    #[test]
    fn test_navigating_elsewhere_closes_gallery() {
        let mut app = app();
        let _ = app.update(Message::SelectBrand("kenworth".to_string()));
        let _ = app.update(Message::SelectModel("T680".to_string()));

        let _ = app.update(Message::OpenGallery("capo-0".to_string()));
        assert!(app.gallery.is_open());
        let _ = app.update(Message::Back);
        assert!(!app.gallery.is_open());
        assert_eq!(app.nav.view(), View::Models);

        let _ = app.update(Message::OpenGallery("capo-0".to_string()));
        let _ = app.update(Message::ScrollTo(Anchor::Contact));
        assert!(!app.gallery.is_open());

        let _ = app.update(Message::OpenGallery("capo-0".to_string()));
        let _ = app.update(Message::CloseGallery);
        assert_eq!(app.gallery.listener_registrations(), 3);
        assert_eq!(app.gallery.listener_releases(), 3);
    }

    #[test]
    fn test_out_of_range_jump_keeps_index() {
        let mut app = app();
        let _ = app.update(Message::OpenGallery("capo-0".to_string()));
        let _ = app.update(Message::JumpToImage(7));
        assert_eq!(app.gallery.image_index(), Some(0));

        let _ = app.update(Message::JumpToImage(2));
        assert_eq!(app.gallery.image_index(), Some(2));
        let _ = app.update(Message::NextImage);
        assert_eq!(app.gallery.image_index(), Some(0));
    }

    #[test]
    fn test_home_resets_to_brands() {
        let mut app = app();
        let _ = app.update(Message::SelectBrand("scania".to_string()));
        let _ = app.update(Message::Home);
        assert_eq!(app.nav.view(), View::Brands);
        assert!(app.nav.selected_brand().is_none());
    }

    #[test]
    fn test_lookup_result_sets_language() {
        let mut app = app();
        assert_eq!(app.locale.lang(), Language::Es);

        let _ = app.update(Message::CountryResolved(Err(GeoError::Status(429))));
        assert_eq!(app.locale.lang(), Language::Es);

        let _ = app.update(Message::CountryResolved(Ok("US".to_string())));
        assert_eq!(app.locale.lang(), Language::En);

        let _ = app.update(Message::ToggleLanguage);
        assert_eq!(app.locale.lang(), Language::Es);
    }

    #[test]
    fn test_services_scroll_waits_for_viewport() {
        let mut app = app();
        let _ = app.update(Message::ScrollTo(Anchor::Services));
        assert_eq!(app.pending_anchor, Some(Anchor::Services));

        let _ = app.update(Message::ScrollTo(Anchor::Contact));
        assert_eq!(app.pending_anchor, None);
    }
}
