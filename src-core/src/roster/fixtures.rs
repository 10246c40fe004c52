//! Built-in rosters used when `cards.json` cannot be loaded.

use crate::config::asset_path;

use super::types::{ProfileExtra, ProfileRecord};

const CURATED_PROFILES: &str = include_str!("../../config/curated_profiles.json");

const FILLER_BIO: &str = "Another hilarious student with their own unique quirks and study habits that somehow work for them.";
const GENERATED_BIO: &str = "A funny student with unique study habits and campus adventures.";

/// The five hand-written profiles.
///
/// # Panics
/// Panics if the embedded JSON is invalid (a build-time bug).
pub fn curated_profiles(base_path: &str) -> Vec<ProfileRecord> {
    let mut records: Vec<ProfileRecord> = serde_json::from_str(CURATED_PROFILES)
        .expect("embedded curated_profiles.json must be a valid roster");
    for record in &mut records {
        record.image = asset_path(base_path, &record.image);
    }
    records
}

/// Templated profiles numbered from `first_id`.
pub fn filler_profiles(base_path: &str, first_id: u32, count: u32) -> Vec<ProfileRecord> {
    (first_id..first_id + count)
        .map(|n| ProfileRecord {
            id: n,
            name: format!("Student {}", n),
            role: format!("Campus Character #{}", n),
            bio: FILLER_BIO.to_string(),
            image: asset_path(
                base_path,
                &format!("/placeholder.svg?height=200&width=200&query=funny-student-{}", n),
            ),
            tags: vec![format!("Skill{}", n), format!("Quirk{}", n)],
            extra: Some(ProfileExtra {
                location: Some(format!("Study Spot {}", n)),
                contact: Some(format!("@student{}", n)),
            }),
        })
        .collect()
}

/// Curated profiles followed by `filler_count` generated ones.
pub fn curated_fallback(base_path: &str, filler_count: u32) -> Vec<ProfileRecord> {
    let mut records = curated_profiles(base_path);
    let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    records.extend(filler_profiles(base_path, next_id, filler_count));
    records
}

/// Plain generated roster with ids `1..=count` and no extra details.
pub fn generated_fallback(base_path: &str, count: u32) -> Vec<ProfileRecord> {
    (1..=count)
        .map(|n| ProfileRecord {
            id: n,
            name: format!("Student {}", n),
            role: format!("Campus Character {}", n),
            bio: GENERATED_BIO.to_string(),
            image: asset_path(
                base_path,
                &format!("/placeholder.svg?height=200&width=200&query=student-{}", n),
            ),
            tags: vec![format!("Skill{}", n), format!("Quirk{}", n)],
            extra: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_curated_profiles_load() {
        let records = curated_profiles("");
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name, "Coffee Addict Casey");
        assert!(records.iter().all(|r| r.extra.is_some()));
    }

    #[test]
    fn test_curated_images_use_base_path() {
        let records = curated_profiles("/srms");
        assert_eq!(records[1].image, "/srms/studious-student-with-books.png");
    }

    #[test]
    fn test_curated_fallback_has_25_unique_ids() {
        let records = curated_fallback("", 20);
        assert_eq!(records.len(), 25);
        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 25);
        assert_eq!(records[5].id, 6);
        assert_eq!(records[5].name, "Student 6");
        assert_eq!(records[24].tags, vec!["Skill25", "Quirk25"]);
    }

    #[test]
    fn test_generated_fallback_shape() {
        let records = generated_fallback("", 25);
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[24].role, "Campus Character 25");
        assert!(records.iter().all(|r| r.extra.is_none()));
    }
}
