use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host markers a playlist URL must contain to be accepted.
pub const YOUTUBE_HOST_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: i64,
  pub name: String,
  pub url: String,
  pub transcript: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl Playlist {
  /// Derive the playable video reference from the stored URL.
  pub fn video(&self) -> VideoReference {
    VideoReference::from_url(&self.url)
  }
}

/// Video identifier derived from a playlist URL. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
  pub video_id: Option<String>,
}

impl VideoReference {
  pub fn from_url(url: &str) -> Self {
    Self {
      video_id: extract_video_id(url),
    }
  }

  pub fn is_playable(&self) -> bool {
    self.video_id.is_some()
  }

  /// URL for the embedded player, if the reference is playable.
  pub fn embed_url(&self) -> Option<String> {
    self
      .video_id
      .as_ref()
      .map(|id| format!("https://www.youtube.com/embed/{}?rel=0&autoplay=1", id))
  }
}

/// True if the URL carries one of the recognised YouTube host markers.
///
/// Syntactic only: the URL is never fetched.
pub fn has_youtube_host(url: &str) -> bool {
  YOUTUBE_HOST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Pull the video identifier out of a YouTube URL.
///
/// Handles the `watch?v=<id>` query form and the `youtu.be/<id>` short form.
/// The token is returned as found; its shape is not checked. An empty token
/// counts as absent.
pub fn extract_video_id(url: &str) -> Option<String> {
  let token = if let Some((_, rest)) = url.split_once("v=") {
    let segment = rest.split("v=").next().unwrap_or(rest);
    segment.split('&').next().unwrap_or(segment)
  } else if let Some((_, rest)) = url.split_once("youtu.be/") {
    rest.split('?').next().unwrap_or(rest)
  } else {
    return None;
  };

  if token.is_empty() {
    None
  } else {
    Some(token.to_string())
  }
}
