/// Image gallery overlay
///
/// Independent of navigation: holds the product being inspected and an
/// image cursor that always points inside that product's image list.

use tracing::debug;

use super::data::Product;
use crate::error::CatalogError;

#[derive(Debug, Clone)]
struct Open {
    product: Product,
    index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    open: Option<Open>,
    /// Closed-to-open transitions. The UI keeps one cancel listener alive
    /// from each of these until the matching close.
    listener_registrations: u64,
    /// Open-to-closed transitions
    listener_releases: u64,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `product`, starting at its first image
    pub fn open(&mut self, product: Product) -> Result<(), CatalogError> {
        if product.images.is_empty() {
            return Err(CatalogError::InvalidProduct(product.id));
        }

        debug!(product = %product.id, images = product.images.len(), "gallery opened");
        if self.open.is_none() {
            self.listener_registrations += 1;
        }
        self.open = Some(Open { product, index: 0 });
        Ok(())
    }

    /// Hide the overlay. Closing an already closed overlay does nothing.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            self.listener_releases += 1;
            debug!(product = %open.product.id, "gallery closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn product(&self) -> Option<&Product> {
        self.open.as_ref().map(|o| &o.product)
    }

    pub fn image_index(&self) -> Option<usize> {
        self.open.as_ref().map(|o| o.index)
    }

    /// Reference of the image under the cursor
    pub fn current_image(&self) -> Option<&str> {
        self.open
            .as_ref()
            .map(|o| o.product.images[o.index].as_str())
    }

    pub fn listener_registrations(&self) -> u64 {
        self.listener_registrations
    }

    pub fn listener_releases(&self) -> u64 {
        self.listener_releases
    }

    /// Advance one image, wrapping to the first. `false` when closed.
    pub fn next(&mut self) -> bool {
        match self.open.as_mut() {
            Some(open) => {
                open.index = (open.index + 1) % open.product.images.len();
                true
            }
            None => false,
        }
    }

    /// Step back one image, wrapping to the last. `false` when closed.
    pub fn prev(&mut self) -> bool {
        match self.open.as_mut() {
            Some(open) => {
                let len = open.product.images.len();
                open.index = (open.index + len - 1) % len;
                true
            }
            None => false,
        }
    }

    /// Jump straight to a thumbnail
    pub fn jump_to(&mut self, index: usize) -> Result<(), CatalogError> {
        let open = self.open.as_mut().ok_or_else(|| {
            CatalogError::InvalidSelection("gallery is closed".to_string())
        })?;

        let len = open.product.images.len();
        if index >= len {
            return Err(CatalogError::ImageOutOfRange { index, len });
        }
        open.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, images: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            images: images.iter().map(|s| s.to_string()).collect(),
            price: None,
        }
    }

    #[test]
    fn test_next_k_times_returns_to_start() {
        for k in 1..=5 {
            let images: Vec<String> = (0..k).map(|i| format!("img{}", i)).collect();
            let refs: Vec<&str> = images.iter().map(String::as_str).collect();
            let mut gallery = GalleryState::new();
            gallery.open(product("p", &refs)).unwrap();
            gallery.jump_to(0).unwrap();
            for _ in 0..k {
                gallery.next();
            }
            assert_eq!(gallery.image_index(), Some(0));
        }
    }

    #[test]
    fn test_single_image_navigation_is_a_no_op() {
        let mut gallery = GalleryState::new();
        gallery.open(product("p", &["A"])).unwrap();
        assert!(gallery.next());
        assert_eq!(gallery.image_index(), Some(0));
        assert!(gallery.prev());
        assert_eq!(gallery.image_index(), Some(0));
    }

    #[test]
    fn test_wrap_scenario() {
        let mut gallery = GalleryState::new();
        gallery.open(product("p", &["A", "B", "C"])).unwrap();
        gallery.jump_to(2).unwrap();
        assert_eq!(gallery.current_image(), Some("C"));
        gallery.next();
        assert_eq!(gallery.image_index(), Some(0));
        gallery.prev();
        assert_eq!(gallery.image_index(), Some(2));
    }

    #[test]
    fn test_open_always_starts_at_zero() {
        let mut gallery = GalleryState::new();
        gallery.open(product("p1", &["A", "B", "C"])).unwrap();
        gallery.jump_to(2).unwrap();

        gallery.open(product("p2", &["D", "E"])).unwrap();
        assert_eq!(gallery.image_index(), Some(0));

        gallery.next();
        gallery.close();
        gallery.open(product("p3", &["F", "G", "H"])).unwrap();
        assert_eq!(gallery.image_index(), Some(0));
        assert_eq!(gallery.product().map(|p| p.id.as_str()), Some("p3"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gallery = GalleryState::new();
        gallery.close();
        gallery.open(product("p", &["A"])).unwrap();
        gallery.close();
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.image_index(), None);
        assert!(!gallery.next());
        assert!(!gallery.prev());
    }

    #[test]
    fn test_empty_product_is_rejected() {
        let mut gallery = GalleryState::new();
        assert_eq!(
            gallery.open(product("bare", &[])),
            Err(CatalogError::InvalidProduct("bare".to_string()))
        );
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut gallery = GalleryState::new();
        gallery.open(product("p", &["A", "B"])).unwrap();
        gallery.jump_to(1).unwrap();
        assert_eq!(
            gallery.jump_to(2),
            Err(CatalogError::ImageOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(gallery.image_index(), Some(1));
    }

    #[test]
    fn test_jump_on_closed_gallery_fails() {
        let mut gallery = GalleryState::new();
        assert!(gallery.jump_to(0).is_err());
    }

    #[test]
    fn test_one_listener_per_open_close_cycle() {
        let mut gallery = GalleryState::new();
        for _ in 0..3 {
            gallery.open(product("p", &["A", "B"])).unwrap();
            gallery.open(product("q", &["C"])).unwrap();
            assert_eq!(gallery.listener_registrations(), gallery.listener_releases() + 1);
            gallery.close();
            gallery.close();
        }
        assert_eq!(gallery.listener_registrations(), 3);
        assert_eq!(gallery.listener_releases(), 3);
    }
}
