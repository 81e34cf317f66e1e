//! Mapping from an adopted suggestion to the profile fields a celebrity
//! account persists.

use serde::{Deserialize, Serialize};

use crate::suggestion::CelebritySuggestion;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub category: String,
    pub country: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    pub fanbase_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl From<&CelebritySuggestion> for ProfileDraft {
    fn from(s: &CelebritySuggestion) -> Self {
        Self {
            name: s.name.clone(),
            category: s.category.clone(),
            country: s.country.clone(),
            bio: s.bio.clone(),
            instagram_url: s
                .instagram_handle
                .as_deref()
                .map(|h| format!("https://instagram.com/{}", h.trim_start_matches('@'))),
            youtube_url: s
                .youtube_channel
                .as_deref()
                .map(|c| format!("https://youtube.com/@{}", c.trim_start_matches('@'))),
            spotify_url: s
                .spotify_artist
                .as_deref()
                .map(|a| format!("https://open.spotify.com/artist/{}", a)),
            fanbase_count: s.estimated_fanbase,
            profile_image_url: s.image_url.clone(),
        }
    }
}

impl From<CelebritySuggestion> for ProfileDraft {
    fn from(s: CelebritySuggestion) -> Self {
        Self::from(&s)
    }
}
