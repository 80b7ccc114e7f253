use serde::Deserialize;

use crate::config::{video_url, VideoKey};

const GALLERY_JSON: &str = include_str!("gallery.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub year: String,
    pub title: String,
    pub tagline: String,
    pub client: String,
    pub location: String,
    pub lora: String,
    pub role: String,
    pub description: String,
    /// Name of a [`VideoKey`]; unknown names render without media.
    pub video: String,
}

impl GalleryItem {
    pub fn video_src(&self) -> Option<&'static str> {
        VideoKey::from_name(&self.video).map(video_url)
    }
}

fn parse(json: &str) -> Vec<GalleryItem> {
    match serde_json::from_str(json) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to parse gallery data: {}", e);
            Vec::new()
        }
    }
}

pub fn gallery_items() -> Vec<GalleryItem> {
    parse(GALLERY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_items_load() {
        let items = gallery_items();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|item| item.video_src().is_some()));
        assert_eq!(items[0].client, "Paris Saint-Germain");
    }

    #[test]
    fn broken_json_gives_an_empty_gallery() {
        assert!(parse("[{\"id\": 3}").is_empty());
    }

    #[test]
    fn unknown_video_has_no_source() {
        let mut item = gallery_items().remove(0);
        item.video = "missing".to_string();
        assert_eq!(item.video_src(), None);
    }
}
