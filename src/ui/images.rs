/// Product image loading
///
/// Gallery images are fetched on demand, decoded and scaled down off the
/// UI thread, and cached by reference for the rest of the session.

use std::collections::HashMap;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::DynamicImage;
use reqwest::Client;
use tokio::task;
use tracing::{debug, warn};

/// Largest edge of a cached gallery image
const PREVIEW_SIZE: u32 = 1280;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
}

impl ImageCache {
    pub fn get(&self, reference: &str) -> Option<&ImageSlot> {
        self.slots.get(reference)
    }

    /// Mark the references not yet requested as loading and return them
    pub fn claim<'a, I>(&mut self, references: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut claimed = Vec::new();
        for reference in references {
            if !self.slots.contains_key(reference) {
                self.slots.insert(reference.clone(), ImageSlot::Loading);
                claimed.push(reference.clone());
            }
        }
        claimed
    }

    pub fn finish(&mut self, reference: String, result: Result<Handle, String>) {
        let slot = match result {
            Ok(handle) => ImageSlot::Ready(handle),
            Err(err) => {
                warn!(image = %reference, error = %err, "image failed to load");
                ImageSlot::Failed
            }
        };
        self.slots.insert(reference, slot);
    }
}

/// Fetch (or read) and decode one image reference.
/// Returns the reference alongside the result so the caller can file it.
pub async fn load(client: Client, reference: String) -> (String, Result<Handle, String>) {
    let result = load_handle(&client, &reference).await;
    (reference, result)
}

async fn load_handle(client: &Client, reference: &str) -> Result<Handle, String> {
    let bytes = if reference.starts_with("http://") || reference.starts_with("https://") {
        let response = client
            .get(reference)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?;
        response.bytes().await.map_err(|e| e.to_string())?.to_vec()
    } else {
        tokio::fs::read(reference).await.map_err(|e| e.to_string())?
    };

    debug!(image = %reference, bytes = bytes.len(), "image fetched");

    // Decoding and resizing are CPU-bound
    task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

fn decode(bytes: &[u8]) -> Result<Handle, String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let img = shrink(img);
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

fn shrink(img: DynamicImage) -> DynamicImage {
    if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
        img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle)
    } else {
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_claim_only_new_references() {
        let mut cache = ImageCache::default();
        let refs = vec!["a".to_string(), "b".to_string()];
        assert_eq!(cache.claim(&refs), refs);
        assert!(cache.claim(&refs).is_empty());
        assert!(matches!(cache.get("a"), Some(ImageSlot::Loading)));
        assert!(cache.get("c").is_none());
    }

    #[test]
    fn test_failed_load_is_remembered() {
        let mut cache = ImageCache::default();
        cache.claim(&vec!["a".to_string()]);
        cache.finish("a".to_string(), Err("404".to_string()));
        assert!(matches!(cache.get("a"), Some(ImageSlot::Failed)));
    }

    #[test]
    fn test_large_images_are_shrunk() {
        let img = image::load_from_memory(&png(2560, 640)).unwrap();
        let img = shrink(img);
        assert_eq!((img.width(), img.height()), (1280, 320));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"not an image").is_err());
        assert!(decode(&png(4, 4)).is_ok());
    }

    #[tokio::test]
    async fn test_load_reads_local_files() {
        let path = std::env::temp_dir().join("tractolujos-load-test.png");
        std::fs::write(&path, png(8, 8)).unwrap();
        let reference = path.to_string_lossy().into_owned();

        let (returned, result) = load(Client::new(), reference.clone()).await;
        assert_eq!(returned, reference);
        assert!(result.is_ok());

        let missing = path.with_file_name("tractolujos-missing.png");
        let (_, result) = load(Client::new(), missing.to_string_lossy().into_owned()).await;
        assert!(result.is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
