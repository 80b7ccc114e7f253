use serde::{Deserialize, Serialize};

/// Tuning for the section snap controller. Distances are CSS pixels and
/// durations milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Accumulated wheel delta needed before a gesture commits.
    pub wheel_threshold: f64,
    /// Single wheel events smaller than this are trackpad jitter.
    pub min_delta: f64,
    pub scroll_duration_ms: f64,
    /// Height of the fixed navbar, subtracted from every target offset.
    pub navbar_height: f64,
    /// Extra cooldown after a wheel commit on top of the scroll duration.
    pub lock_buffer_ms: f64,
    /// Fraction of the viewport below the scroll position at which a
    /// section counts as reached.
    pub reference_fraction: f64,
    /// Below this distance the driver jumps instead of animating.
    pub negligible_distance: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 20.0,
            min_delta: 4.0,
            scroll_duration_ms: 800.0,
            navbar_height: 66.0,
            lock_buffer_ms: 250.0,
            reference_fraction: 0.3,
            negligible_distance: 1.0,
        }
    }
}

impl SnapConfig {
    pub fn lock_window_ms(&self) -> f64 {
        self.scroll_duration_ms + self.lock_buffer_ms
    }
}

pub fn get_main_site_url() -> &'static str {
    option_env!("PORTAL_MAIN_SITE_URL").unwrap_or("https://www.obvious-art.com")
}

pub fn get_contact_email() -> &'static str {
    option_env!("PORTAL_CONTACT_EMAIL").unwrap_or("contact@obvious.live")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKey {
    Hero,
    Speech,
    Text,
    Psg,
    Yoyo,
    Gastronomy,
    Artechouse,
    Palais,
    ImmersiveReading,
}

impl VideoKey {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(Self::Hero),
            "speech" => Some(Self::Speech),
            "text" => Some(Self::Text),
            "psg" => Some(Self::Psg),
            "yoyo" => Some(Self::Yoyo),
            "gastronomy" => Some(Self::Gastronomy),
            "artechouse" => Some(Self::Artechouse),
            "palais" => Some(Self::Palais),
            "immersive-reading" => Some(Self::ImmersiveReading),
            _ => None,
        }
    }

    // CDN locations are baked in at build time; unset means serve locally.
    fn cdn_url(self) -> Option<&'static str> {
        match self {
            Self::Hero => option_env!("PORTAL_CDN_HERO_URL"),
            Self::Speech => option_env!("PORTAL_CDN_SPEECH_URL"),
            Self::Text => option_env!("PORTAL_CDN_TEXT_URL"),
            Self::Psg => option_env!("PORTAL_CDN_PSG_URL"),
            Self::Yoyo => option_env!("PORTAL_CDN_YOYO_URL"),
            Self::Gastronomy => option_env!("PORTAL_CDN_GASTRONOMY_URL"),
            Self::Artechouse => option_env!("PORTAL_CDN_ARTECHOUSE_URL"),
            Self::Palais => option_env!("PORTAL_CDN_PALAIS_URL"),
            Self::ImmersiveReading => option_env!("PORTAL_CDN_IMMERSIVE_READING_URL"),
        }
        .filter(|url| !url.is_empty())
    }

    fn local_path(self) -> &'static str {
        match self {
            Self::Hero => "/videos/accueil_final.mp4",
            Self::Speech => "/videos/speech_final.mp4",
            Self::Text => "/videos/text_final.mp4",
            Self::Psg => "/videos/psg.mp4",
            Self::Yoyo => "/videos/yoyo.mp4",
            Self::Gastronomy => "/videos/gastronomy.mp4",
            Self::Artechouse => "/videos/artechouse.mp4",
            Self::Palais => "/videos/palais.mp4",
            Self::ImmersiveReading => "/videos/immersive_reading.mp4",
        }
    }
}

pub fn video_url(key: VideoKey) -> &'static str {
    key.cdn_url().unwrap_or_else(|| key.local_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_window_covers_animation_and_buffer() {
        let config = SnapConfig::default();
        assert_eq!(config.lock_window_ms(), 1050.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SnapConfig = serde_json::from_str(r#"{"wheel_threshold": 80}"#).unwrap();
        assert_eq!(config.wheel_threshold, 80.0);
        assert_eq!(config.navbar_height, 66.0);
    }

    #[test]
    fn video_keys_resolve_by_name() {
        assert_eq!(VideoKey::from_name("immersive-reading"), Some(VideoKey::ImmersiveReading));
        assert_eq!(VideoKey::from_name("unknown"), None);
        if option_env!("PORTAL_CDN_PSG_URL").is_none() {
            assert_eq!(video_url(VideoKey::Psg), "/videos/psg.mp4");
        }
    }
}
