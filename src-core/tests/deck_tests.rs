use std::collections::HashSet;

use cardreveal_core::roster::{self, FallbackPolicy, RosterConfig};
use cardreveal_core::{Deck, FetchOutcome, PlacementConfig, RosterOrigin, Session};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn fallback_deck(rng: &mut SmallRng) -> Deck {
    let roster = roster::resolve(
        FetchOutcome::Status(503),
        &RosterConfig::default(),
        "",
    );
    let mut deck = Deck::new(PlacementConfig::default());
    deck.initialize(roster.records, rng);
    deck
}

#[test]
fn test_full_cycle_with_fixture_roster() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut deck = fallback_deck(&mut rng);
    assert_eq!(deck.len(), 25);

    for _ in 0..25 {
        let id = deck
            .open_random(&mut rng)
            .map(|r| r.id)
            .expect("Deck should still have unopened cards");
        assert!(deck.commit_open(id));
    }

    assert_eq!(deck.opened_count(), 25);
    assert!(deck.open_random(&mut rng).is_none(), "26th pick must be empty");

    deck.reset_all();
    assert_eq!(deck.opened_count(), 0);
    assert!(deck.open_random(&mut rng).is_some());
}

#[test]
fn test_opened_count_matches_distinct_commits() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut deck = fallback_deck(&mut rng);
    let mut committed = HashSet::new();

    for _ in 0..200 {
        // Mix random picks with repeated manual commits of arbitrary ids.
        if rng.random_bool(0.5) {
            if let Some(id) = deck.open_random(&mut rng).map(|r| r.id) {
                deck.commit_open(id);
                committed.insert(id);
            }
        } else {
            let id = rng.random_range(1..=30);
            if deck.commit_open(id) {
                committed.insert(id);
            }
        }
        assert_eq!(deck.opened_count(), committed.len());
    }

    let mut orders: Vec<usize> = deck
        .cards()
        .iter()
        .filter_map(|c| c.open_order)
        .collect();
    orders.sort_unstable();
    assert_eq!(orders, (0..committed.len()).collect::<Vec<_>>());
    assert!(deck
        .cards()
        .iter()
        .all(|c| c.is_opened == c.open_order.is_some()));
}

#[test]
fn test_open_random_none_iff_all_opened() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut deck = fallback_deck(&mut rng);
    let ids: Vec<u32> = deck.cards().iter().map(|c| c.id()).collect();
    for id in &ids {
        assert!(deck.open_random(&mut rng).is_some());
        deck.commit_open(*id);
    }
    assert!(deck.open_random(&mut rng).is_none());
}

#[test]
fn test_reset_from_any_state() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut deck = fallback_deck(&mut rng);
    deck.reset_all();
    assert_eq!(deck.opened_count(), 0);

    for id in [4, 4, 19, 1] {
        deck.commit_open(id);
    }
    deck.reset_all();
    assert_eq!(deck.opened_count(), 0);
    assert!(deck
        .cards()
        .iter()
        .all(|c| !c.is_opened && c.open_order.is_none()));
}

#[test]
fn test_edit_touches_only_target() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut deck = fallback_deck(&mut rng);
    deck.commit_open(6);
    deck.commit_open(10);
    let before = deck.cards().to_vec();

    let mut record = deck.reveal(10).unwrap().clone();
    record.role = "Edited role".to_string();
    record.tags = vec!["new".to_string()];
    assert!(deck.edit(10, record.clone()));

    assert_eq!(deck.opened_count(), 2);
    for (old, new) in before.iter().zip(deck.cards()) {
        if old.id() == 10 {
            assert_eq!(new.record, record);
            assert_eq!(new.is_opened, old.is_opened);
            assert_eq!(new.open_order, old.open_order);
            assert_eq!(new.position, old.position);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_fallback_sizes_per_failure_mode() {
    let split = RosterConfig {
        fallback_policy: FallbackPolicy::Split,
        ..RosterConfig::default()
    };

    let http = roster::resolve(FetchOutcome::Status(404), &split, "");
    assert_eq!((http.origin, http.records.len()), (RosterOrigin::CuratedFallback, 25));

    let thrown = roster::resolve(FetchOutcome::Failed("TypeError".into()), &split, "");
    assert_eq!((thrown.origin, thrown.records.len()), (RosterOrigin::GeneratedFallback, 25));
}

#[test]
fn test_session_end_to_end() {
    let config = cardreveal_core::AppConfig::default();
    let mut session = Session::new(&config, 99);
    assert!(session.is_loading());

    session.install_roster(roster::resolve(
        FetchOutcome::Failed("offline".into()),
        &config.roster,
        &config.assets.base_path,
    ));
    session.mark_min_elapsed();
    assert!(!session.is_loading());

    for _ in 0..25 {
        let id = session.begin_pick().expect("unopened card available");
        assert_eq!(session.finish_pick(), Some(id));
        assert!(session.close_selected());
    }
    assert_eq!(session.deck().opened_count(), 25);
    assert!(session.begin_pick().is_none());

    session.reset();
    assert_eq!(session.deck().opened_count(), 0);
    assert!(session.begin_pick().is_some());
}
