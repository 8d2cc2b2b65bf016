//! Fixed configuration of the scrapbook page.
//!
//! Everything here is a constant of the deployed page. `ScrapbookConfig`
//! groups them so the frontend root can build the configuration once and hand
//! the relevant pieces to each section.

/// Local storage key holding the JSON array of photo data URLs.
pub const PHOTO_KEY: &str = "lovelife_photos_v1";
/// Local storage key holding the JSON array of letters.
pub const LETTER_KEY: &str = "lovelife_letters_v1";
/// Local storage key holding the raw appreciation note markup.
pub const NOTE_KEY: &str = "lovelife_appreciation_v1";

/// Quiet period after the last note edit before it is autosaved.
pub const AUTOSAVE_DELAY_MS: u32 = 800;

pub const MUSIC_SRC: &str = "MUSIC/perfect.mp3";
pub const MUSIC_VOLUME: f64 = 0.65;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub photos: &'static str,
    pub letters: &'static str,
    pub note: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            photos: PHOTO_KEY,
            letters: LETTER_KEY,
            note: NOTE_KEY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    /// Relative path of the looping background track.
    pub src: &'static str,
    /// Playback volume in `0.0..=1.0`.
    pub volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            src: MUSIC_SRC,
            volume: MUSIC_VOLUME,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapbookConfig {
    pub keys: StorageKeys,
    pub autosave_delay_ms: u32,
    pub audio: AudioConfig,
}

impl Default for ScrapbookConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            autosave_delay_ms: AUTOSAVE_DELAY_MS,
            audio: AudioConfig::default(),
        }
    }
}
