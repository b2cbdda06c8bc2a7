use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Seconds before nominal expiry at which a credential is treated as expired,
/// leaving room to refresh it before an in-flight provider call fails.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// OAuth credential for one user, as issued by the provider's token endpoint.
/// Lives only in the process-wide session store; never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Credential {
    pub fn from_token_response(token: TokenResponse) -> Self {
        Credential {
            access_token: token.access_token,
            refresh_token: token.refresh_token.unwrap_or_default(),
            scope: token.scope.unwrap_or_default(),
            expires_in: token.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    /// True once the access token is within the refresh margin of its expiry.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in.saturating_sub(EXPIRY_MARGIN_SECS)
    }
}

/// Raw body of the provider's token endpoint. Refresh responses may omit
/// `refresh_token` and `scope`; the previously stored values are kept then.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One track as this service reports it: provider URI, play time and the
/// names shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub uri: String,
    pub name: String,
    pub artist: String,
    pub duration_ms: u64,
}

impl From<&PlaylistTrack> for Track {
    fn from(track: &PlaylistTrack) -> Self {
        Track {
            uri: track.uri.clone(),
            name: track.name.clone(),
            artist: track
                .artists
                .first()
                .map(|artist| artist.name.clone())
                .unwrap_or_default(),
            duration_ms: track.duration_ms,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistEntry>,
}

/// One item of a playlist. The underlying track is `None` for entries whose
/// track has been removed from the catalogue; those are dropped on selection.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistEntry {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    pub uri: String,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub source_playlist_id: Option<String>,
    pub duration_minutes: Option<u32>,
    /// Accepted for forward compatibility; naming happens on save.
    pub playlist_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub tracks: Vec<Track>,
    pub total_duration_ms: u64,
    pub track_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    pub track_uris: Option<Vec<String>>,
    pub playlist_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub playlist_id: String,
    pub playlist_url: String,
}
