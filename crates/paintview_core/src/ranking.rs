//! Time-decayed trending score and ranked preview lists.
//!
//! The trending formula lives here and nowhere else: the query engine's
//! `trending` sort and the summary preview lists both call
//! [`trending_score`], so the order a client previews is the order the
//! server serves.

use crate::constants::{
    SUMMARY_LIST_LEN, TRENDING_AGE_OFFSET_HOURS, TRENDING_DECAY_EXPONENT, TRENDING_LIKE_WEIGHT,
    TRENDING_MIN_AGE_HOURS, TRENDING_VIEW_WEIGHT,
};
use crate::models::Artwork;
use chrono::{DateTime, Utc};

/// Age of an item in hours, floored at one hour so brand-new items do not
/// dominate purely by recency.
pub fn age_hours(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - created_at).num_milliseconds() as f64 / 1000.0;
    (seconds / 3600.0).max(TRENDING_MIN_AGE_HOURS)
}

/// Trending score for an item with the given effective counts.
///
/// `score = (0.6*views + 2.0*likes) / (hours + 2)^1.2` where `hours` is
/// floored at 1. Likes weigh roughly 3.3x a view; the divisor grows
/// super-linearly with age.
pub fn trending_score(
    views: u64,
    likes: u64,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let engagement = TRENDING_VIEW_WEIGHT * views as f64 + TRENDING_LIKE_WEIGHT * likes as f64;
    let decay =
        (age_hours(created_at, now) + TRENDING_AGE_OFFSET_HOURS).powf(TRENDING_DECAY_EXPONENT);
    engagement / decay
}

/// Score a count-annotated artwork.
pub fn artwork_score(artwork: &Artwork, now: DateTime<Utc>) -> f64 {
    trending_score(artwork.views, artwork.likes, artwork.created_at, now)
}

/// Top trending artworks for the summary preview list.
///
/// Ties break on identifier ascending, matching the query engine.
pub fn top_trending(mut items: Vec<Artwork>, now: DateTime<Utc>) -> Vec<Artwork> {
    items.sort_by(|a, b| {
        artwork_score(b, now)
            .partial_cmp(&artwork_score(a, now))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    items.truncate(SUMMARY_LIST_LEN);
    items
}

/// Top artworks by effective views for the summary preview list.
pub fn top_popular(mut items: Vec<Artwork>) -> Vec<Artwork> {
    items.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.id.cmp(&b.id)));
    items.truncate(SUMMARY_LIST_LEN);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn artwork(id: &str, views: u64, likes: u64, created_at: DateTime<Utc>) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: id.to_string(),
            artist: "artist".to_string(),
            year: "2000".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "realism".to_string(),
            desc: String::new(),
            img: String::new(),
            views,
            likes,
            created_at,
        }
    }

    #[test]
    fn test_score_matches_closed_form() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let created = now - Duration::hours(1);
        // (0.6*100 + 2.0*10) / (1 + 2)^1.2 == 80 / 3^1.2
        let expected = 80.0 / 3f64.powf(1.2);
        let actual = trending_score(100, 10, created, now);
        assert!((actual - expected).abs() < 1e-12, "{actual} vs {expected}");
    }

    #[test]
    fn test_likes_outrank_views_at_equal_age() {
        let now = Utc::now();
        let created = now - Duration::hours(1);
        // 2.0*50 = 100 beats 0.6*100 + 2.0*10 = 80 under the same divisor.
        let like_heavy = trending_score(50, 50, created, now);
        let view_heavy = trending_score(100, 10, created, now);
        assert!(like_heavy > view_heavy);
    }

    #[test]
    fn test_score_strictly_decreases_with_age() {
        let now = Utc::now();
        let fresh = trending_score(1000, 100, now - Duration::hours(2), now);
        let older = trending_score(1000, 100, now - Duration::hours(20), now);
        let oldest = trending_score(1000, 100, now - Duration::days(300), now);
        assert!(fresh > older);
        assert!(older > oldest);
    }

    #[test]
    fn test_score_strictly_increases_with_likes() {
        let now = Utc::now();
        let created = now - Duration::hours(5);
        let few = trending_score(100, 10, created, now);
        let more = trending_score(100, 11, created, now);
        assert!(more > few);
    }

    #[test]
    fn test_age_floor_caps_recency_advantage() {
        let now = Utc::now();
        // Anything younger than an hour scores as if it were exactly an hour old.
        let newborn = trending_score(100, 10, now, now);
        let half_hour = trending_score(100, 10, now - Duration::minutes(30), now);
        let one_hour = trending_score(100, 10, now - Duration::hours(1), now);
        assert_eq!(newborn, one_hour);
        assert_eq!(half_hour, one_hour);
    }

    #[test]
    fn test_top_trending_orders_and_truncates() {
        let now = Utc::now();
        let created = now - Duration::hours(1);
        let mut items = Vec::new();
        for i in 0..8u64 {
            items.push(artwork(&format!("art-{i}"), 0, i * 10, created));
        }
        let top = top_trending(items, now);
        assert_eq!(top.len(), SUMMARY_LIST_LEN);
        assert_eq!(top[0].id, "art-7");
        assert_eq!(top[4].id, "art-3");
    }

    #[test]
    fn test_top_popular_sorts_by_views_with_id_tiebreak() {
        let now = Utc::now();
        let created = now - Duration::hours(1);
        let items = vec![
            artwork("b", 100, 0, created),
            artwork("a", 100, 0, created),
            artwork("c", 500, 0, created),
        ];
        let top = top_popular(items);
        assert_eq!(top[0].id, "c");
        assert_eq!(top[1].id, "a");
        assert_eq!(top[2].id, "b");
    }
}
