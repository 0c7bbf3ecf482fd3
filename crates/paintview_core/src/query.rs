//! Filter, sort, and pagination pipeline over the catalog.
//!
//! Pure read path: given a snapshot of the artwork store and the counter
//! store, a request deterministically produces one page. Nothing here
//! mutates either store.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::MIN_PER_PAGE;
use crate::error::AppError;
use crate::models::{Artwork, ArtworkPage, ArtworkQuery, SortMode};
use crate::ranking;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Run a catalog query against the current stores.
///
/// # Errors
/// `Unavailable` when a store cannot be read.
pub fn run(
    catalog: &Catalog,
    req: &ArtworkQuery,
    config: &Config,
) -> Result<ArtworkPage, AppError> {
    run_at(catalog, req, config, Utc::now())
}

/// Run a catalog query with an explicit `now`, keeping trending order
/// reproducible for callers that need it.
pub fn run_at(
    catalog: &Catalog,
    req: &ArtworkQuery,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ArtworkPage, AppError> {
    // Out-of-range pagination values are clamped, not rejected; the browse
    // path stays resilient to malformed clients.
    let page = req.page.unwrap_or(1).max(1);
    let per_page = req
        .per_page
        .unwrap_or(config.default_per_page)
        .clamp(MIN_PER_PAGE, config.max_per_page);

    let needle = req
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let category = filter_value(req.cat.as_deref());
    let style = filter_value(req.style.as_deref());
    let min_views = req.min_views.unwrap_or(0);
    let min_likes = req.min_likes.unwrap_or(0);

    // Annotate before filtering so min-count thresholds apply to effective
    // counts, and effective counts are what every survivor carries out.
    let mut matched: Vec<Artwork> = catalog
        .annotated_snapshot()?
        .into_iter()
        .filter(|artwork| {
            if let Some(cat) = category {
                if artwork.category != cat {
                    return false;
                }
            }
            if let Some(style) = style {
                if artwork.style != style {
                    return false;
                }
            }
            if artwork.views < min_views || artwork.likes < min_likes {
                return false;
            }
            match &needle {
                Some(needle) => artwork.search_haystack().contains(needle),
                None => true,
            }
        })
        .collect();

    sort_artworks(&mut matched, req.sort_mode(), now);

    let total = matched.len();
    // Saturating math keeps absurd page numbers on the clamp path: they
    // produce an empty page, never a panic or a wrapped slice.
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let has_more = page.saturating_mul(per_page) < total;
    let results: Vec<Artwork> = matched.into_iter().skip(start).take(per_page).collect();

    Ok(ArtworkPage {
        page,
        per_page,
        total,
        has_more,
        results,
    })
}

/// `"all"`, empty, and whitespace-only filter values mean "no filter".
fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "all")
}

/// Sort in place per the requested mode. Every mode breaks ties on id
/// ascending so re-running the same query yields the same order.
fn sort_artworks(items: &mut [Artwork], mode: SortMode, now: DateTime<Utc>) {
    match mode {
        SortMode::Popular => {
            items.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.id.cmp(&b.id)));
        }
        SortMode::Newest => {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        }
        SortMode::Oldest => {
            items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        }
        SortMode::Alpha => {
            items.sort_by(|a, b| {
                a.title
                    .to_lowercase()
                    .cmp(&b.title.to_lowercase())
                    .then_with(|| a.id.cmp(&b.id))
            });
        }
        SortMode::Trending => {
            items.sort_by(|a, b| {
                ranking::artwork_score(b, now)
                    .partial_cmp(&ranking::artwork_score(a, now))
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.id.cmp(&b.id))
            });
        }
    }
}
