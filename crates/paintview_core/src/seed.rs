//! Demo catalog seed data and the simulated-ingestion generator.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::models::Artwork;
use chrono::{Duration, TimeZone, Utc};
use rand::Rng;

/// The five demo artworks the catalog ships with.
pub fn demo_artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            id: "mona-lisa".to_string(),
            title: "Mona Lisa".to_string(),
            artist: "Leonardo da Vinci".to_string(),
            year: "1503".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "realism".to_string(),
            desc: "Portrait of Lisa Gherardini — Louvre Museum (public domain link)".to_string(),
            img: "https://upload.wikimedia.org/wikipedia/commons/6/6a/Mona_Lisa.jpg".to_string(),
            views: 250_000,
            likes: 54_000,
            created_at: Utc.with_ymd_and_hms(1503, 1, 1, 0, 0, 0).unwrap(),
        },
        Artwork {
            id: "starry-night".to_string(),
            title: "The Starry Night".to_string(),
            artist: "Vincent van Gogh".to_string(),
            year: "1889".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "post-impressionism".to_string(),
            desc: "Van Gogh's swirling night sky".to_string(),
            img: "https://upload.wikimedia.org/wikipedia/commons/e/ea/The_Starry_Night.jpg"
                .to_string(),
            views: 180_000,
            likes: 42_000,
            created_at: Utc.with_ymd_and_hms(1889, 6, 1, 0, 0, 0).unwrap(),
        },
        Artwork {
            id: "the-scream".to_string(),
            title: "The Scream".to_string(),
            artist: "Edvard Munch".to_string(),
            year: "1893".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "expressionism".to_string(),
            desc: "Iconic expressionist work".to_string(),
            img: "https://upload.wikimedia.org/wikipedia/commons/f/f4/The_Scream.jpg".to_string(),
            views: 120_000,
            likes: 27_000,
            created_at: Utc.with_ymd_and_hms(1893, 1, 1, 0, 0, 0).unwrap(),
        },
        Artwork {
            id: "girl-with-pearl".to_string(),
            title: "Girl with a Pearl Earring".to_string(),
            artist: "Johannes Vermeer".to_string(),
            year: "1665".to_string(),
            medium: "oil".to_string(),
            category: "paintings".to_string(),
            style: "baroque".to_string(),
            desc: "The 'Mona Lisa of the North'".to_string(),
            img: "https://upload.wikimedia.org/wikipedia/commons/d/d7/Meisje_met_de_parel.jpg"
                .to_string(),
            views: 95_000,
            likes: 21_000,
            created_at: Utc.with_ymd_and_hms(1665, 1, 1, 0, 0, 0).unwrap(),
        },
        Artwork {
            id: "ink-sketch".to_string(),
            title: "Study of Hands (Sketch)".to_string(),
            artist: "Albrecht Dürer".to_string(),
            year: "1500".to_string(),
            medium: "ink".to_string(),
            category: "sketches".to_string(),
            style: "realism".to_string(),
            desc: "A detailed sketch study.".to_string(),
            img: "https://upload.wikimedia.org/wikipedia/commons/4/4f/Albrecht_D%C3%BCrer_014.jpg"
                .to_string(),
            views: 32_000,
            likes: 5_400,
            created_at: Utc.with_ymd_and_hms(1500, 1, 1, 0, 0, 0).unwrap(),
        },
    ]
}

/// Seed the demo artworks into an empty catalog.
///
/// # Returns
/// Number of artworks inserted.
///
/// # Errors
/// Propagates store errors, including duplicate ids when called twice.
pub fn seed_catalog(catalog: &Catalog) -> Result<usize, AppError> {
    let artworks = demo_artworks();
    let count = artworks.len();
    for artwork in artworks {
        catalog.artworks.insert(artwork)?;
    }
    Ok(count)
}

const SYNC_ARTISTS: &[&str] = &["Studio", "Collector", "Unknown"];
const SYNC_MEDIUMS: &[&str] = &["oil", "acrylic", "digital"];
const SYNC_CATEGORIES: &[&str] = &["paintings", "drawings", "sketches"];
const SYNC_STYLES: &[&str] = &["abstract", "realism", "impressionism"];

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options[rng.gen_range(0..options.len())].to_string()
}

/// Generate a batch of synthetic artworks, standing in for a real scraper
/// worker. Ids carry the generation timestamp plus a random nonce so two
/// batches in the same millisecond do not collide.
pub fn synthetic_batch(count: usize) -> Vec<Artwork> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let nonce: u32 = rng.gen_range(0..1_000_000);

    (0..count)
        .map(|i| {
            let age = Duration::minutes(rng.gen_range(0..60 * 24 * 365));
            let year = rng.gen_range(1990..2020);
            Artwork {
                id: format!("sync-{}-{}-{}", now.timestamp_millis(), nonce, i),
                title: format!("Synced Artwork #{}", i + 1),
                artist: pick(&mut rng, SYNC_ARTISTS),
                year: year.to_string(),
                medium: pick(&mut rng, SYNC_MEDIUMS),
                category: pick(&mut rng, SYNC_CATEGORIES),
                style: pick(&mut rng, SYNC_STYLES),
                desc: "Auto-synced demo artwork (metadata from scraper)".to_string(),
                img: format!(
                    "https://picsum.photos/seed/{}/800/600",
                    rng.gen_range(0..1_000_000_000u64)
                ),
                views: rng.gen_range(0..10_000),
                likes: rng.gen_range(0..3_000),
                created_at: now - age,
            }
        })
        .collect()
}

/// Ingest a synthetic batch, skipping any id collisions.
///
/// # Returns
/// Number of artworks actually inserted.
pub fn ingest_synthetic(catalog: &Catalog, count: usize) -> Result<usize, AppError> {
    let mut added = 0;
    for artwork in synthetic_batch(count) {
        match catalog.artworks.insert(artwork) {
            Ok(()) => added += 1,
            Err(AppError::BadRequest(msg)) => {
                tracing::debug!("Skipping synthetic artwork: {}", msg);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_artworks_have_unique_ids() {
        let artworks = demo_artworks();
        let mut ids: Vec<_> = artworks.iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), artworks.len());
    }

    #[test]
    fn test_seed_catalog_twice_fails_on_duplicates() {
        let catalog = Catalog::new();
        assert_eq!(seed_catalog(&catalog).unwrap(), 5);
        assert!(seed_catalog(&catalog).is_err());
        assert_eq!(catalog.artworks.len().unwrap(), 5);
    }

    #[test]
    fn test_synthetic_batch_shape() {
        let batch = synthetic_batch(50);
        assert_eq!(batch.len(), 50);
        for artwork in &batch {
            assert!(artwork.id.starts_with("sync-"));
            assert!(artwork.views < 10_000);
            assert!(artwork.likes < 3_000);
            assert!(artwork.created_at <= Utc::now());
        }
    }

    #[test]
    fn test_ingest_synthetic_adds_to_seeded_catalog() {
        let catalog = Catalog::new();
        seed_catalog(&catalog).unwrap();
        let added = ingest_synthetic(&catalog, 10).unwrap();
        assert_eq!(added, 10);
        assert_eq!(catalog.artworks.len().unwrap(), 15);
    }
}
