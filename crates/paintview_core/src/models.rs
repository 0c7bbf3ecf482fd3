//! Catalog data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artwork as stored in the catalog and returned by the API.
///
/// Static attributes are immutable once ingested. `views` and `likes` hold
/// the base counts at ingestion time; the query path overlays live counter
/// deltas on top of them before anything leaves the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub medium: String,
    pub category: String,
    pub style: String,
    pub desc: String,
    pub img: String,
    pub views: u64,
    pub likes: u64,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    /// Clone this artwork with its counts replaced by effective counts
    /// (base plus live counter deltas).
    pub fn with_effective_counts(&self, views: u64, likes: u64) -> Artwork {
        Artwork {
            views,
            likes,
            ..self.clone()
        }
    }

    /// Lowercased haystack scanned by free-text search: title, artist,
    /// description, and style, space-joined.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {} {}", self.title, self.artist, self.desc, self.style).to_lowercase()
    }
}

/// Requested result ordering.
///
/// Unknown wire values fall back to [`SortMode::Trending`]; a browse
/// endpoint should not hard-fail on a stale client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Trending,
    Popular,
    Newest,
    Oldest,
    Alpha,
}

impl SortMode {
    /// Parse a wire value, falling back to trending for anything unknown.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "popular" => SortMode::Popular,
            "newest" => SortMode::Newest,
            "oldest" => SortMode::Oldest,
            "alpha" => SortMode::Alpha,
            _ => SortMode::Trending,
        }
    }
}

/// Query parameters for the paginated artwork listing.
///
/// Every field is optional; the query engine applies defaults and clamps
/// rather than rejecting out-of-range values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkQuery {
    pub page: Option<usize>,
    #[serde(rename = "perPage")]
    pub per_page: Option<usize>,
    pub q: Option<String>,
    pub cat: Option<String>,
    pub style: Option<String>,
    #[serde(rename = "minViews")]
    pub min_views: Option<u64>,
    #[serde(rename = "minLikes")]
    pub min_likes: Option<u64>,
    pub sort: Option<String>,
}

impl ArtworkQuery {
    /// Resolved sort mode for this request.
    pub fn sort_mode(&self) -> SortMode {
        self.sort
            .as_deref()
            .map(SortMode::parse)
            .unwrap_or_default()
    }
}

/// One page of filtered, sorted, count-annotated artworks.
#[derive(Debug, Serialize)]
pub struct ArtworkPage {
    pub page: usize,
    #[serde(rename = "perPage")]
    pub per_page: usize,
    pub total: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    pub results: Vec<Artwork>,
}

/// Ranked preview lists served alongside the main listing.
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub trending: Vec<Artwork>,
    pub popular: Vec<Artwork>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_artwork() -> Artwork {
        Artwork {
            id: "sample".to_string(),
            title: "Sample Title".to_string(),
            artist: "Sample Artist".to_string(),
            year: "1900".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "Realism".to_string(),
            desc: "A Description".to_string(),
            img: "https://example.com/sample.jpg".to_string(),
            views: 10,
            likes: 2,
            created_at: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_sort_mode_parse_known_values() {
        assert_eq!(SortMode::parse("trending"), SortMode::Trending);
        assert_eq!(SortMode::parse("popular"), SortMode::Popular);
        assert_eq!(SortMode::parse("newest"), SortMode::Newest);
        assert_eq!(SortMode::parse("oldest"), SortMode::Oldest);
        assert_eq!(SortMode::parse("alpha"), SortMode::Alpha);
    }

    #[test]
    fn test_sort_mode_unknown_falls_back_to_trending() {
        assert_eq!(SortMode::parse("bogus"), SortMode::Trending);
        assert_eq!(SortMode::parse(""), SortMode::Trending);
        let query = ArtworkQuery::default();
        assert_eq!(query.sort_mode(), SortMode::Trending);
    }

    #[test]
    fn test_with_effective_counts_replaces_only_counts() {
        let base = sample_artwork();
        let effective = base.with_effective_counts(15, 9);
        assert_eq!(effective.views, 15);
        assert_eq!(effective.likes, 9);
        assert_eq!(effective.id, base.id);
        assert_eq!(effective.created_at, base.created_at);
    }

    #[test]
    fn test_search_haystack_is_lowercased_and_covers_style() {
        let haystack = sample_artwork().search_haystack();
        assert!(haystack.contains("sample title"));
        assert!(haystack.contains("sample artist"));
        assert!(haystack.contains("a description"));
        assert!(haystack.contains("realism"));
    }

    #[test]
    fn test_artwork_wire_format_uses_epoch_millis() {
        let json = serde_json::to_value(sample_artwork()).unwrap();
        assert!(json["createdAt"].is_i64());
        assert!(json["desc"].is_string());
        assert!(json["img"].is_string());
        assert!(json.get("created_at").is_none());
    }
}
