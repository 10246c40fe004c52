//! Page-level state container.
//!
//! The frontend keeps one [`Session`] in a reactive signal and changes it
//! only through these methods, so each user action is a single update.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::admin::{AdminGate, AdminSession};
use crate::config::AppConfig;
use crate::deck::Deck;
use crate::error::CardRevealError;
use crate::roster::{ProfileRecord, Roster, RosterOrigin};

/// Decides when the loading screen may be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGate {
    roster_ready: bool,
    min_elapsed: bool,
    wait_for_roster: bool,
}

impl LoadGate {
    pub fn new(wait_for_roster: bool) -> Self {
        Self {
            roster_ready: false,
            min_elapsed: false,
            wait_for_roster,
        }
    }

    pub fn mark_roster_ready(&mut self) {
        self.roster_ready = true;
    }

    pub fn mark_min_elapsed(&mut self) {
        self.min_elapsed = true;
    }

    pub fn roster_ready(&self) -> bool {
        self.roster_ready
    }

    pub fn is_loading(&self) -> bool {
        !self.min_elapsed || (self.wait_for_roster && !self.roster_ready)
    }
}

pub struct Session {
    deck: Deck,
    rng: SmallRng,
    gate: AdminGate,
    reshuffle_on_reset: bool,
    origin: Option<RosterOrigin>,
    selected: Option<u32>,
    picking: Option<u32>,
    sound_enabled: bool,
    admin: AdminSession,
    editing: Option<u32>,
    show_login: bool,
    show_about: bool,
    loading: LoadGate,
}

impl Session {
    pub fn new(config: &AppConfig, seed: u64) -> Self {
        Self {
            deck: Deck::new(config.placement.clone()),
            rng: SmallRng::seed_from_u64(seed),
            gate: AdminGate::new(config.admin.clone()),
            reshuffle_on_reset: config.placement.reshuffle_on_reset,
            origin: None,
            selected: None,
            picking: None,
            sound_enabled: false,
            admin: AdminSession::default(),
            editing: None,
            show_login: false,
            show_about: false,
            loading: LoadGate::new(config.loading.wait_for_roster),
        }
    }

    /// Install the page's roster. Only the first roster is taken, so a
    /// request that settles after the wait deadline cannot replace the
    /// fallback mid-session.
    pub fn install_roster(&mut self, roster: Roster) -> bool {
        if self.loading.roster_ready() {
            debug!("Ignoring late roster ({:?})", roster.origin);
            return false;
        }
        info!(
            "Installing {} profiles ({:?})",
            roster.records.len(),
            roster.origin
        );
        self.deck.initialize(roster.records, &mut self.rng);
        self.origin = Some(roster.origin);
        self.selected = None;
        self.picking = None;
        self.editing = None;
        self.loading.mark_roster_ready();
        true
    }

    pub fn roster_ready(&self) -> bool {
        self.loading.roster_ready()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn origin(&self) -> Option<RosterOrigin> {
        self.origin
    }

    // -- Loading --

    pub fn mark_min_elapsed(&mut self) {
        self.loading.mark_min_elapsed();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    // -- Reveal flow --

    /// Choose a random unopened card and hold it as the pending pick.
    /// Does nothing while a pick is pending or a profile is open.
    pub fn begin_pick(&mut self) -> Option<u32> {
        if self.picking.is_some() || self.selected.is_some() {
            return None;
        }
        let id = self.deck.open_random(&mut self.rng).map(|r| r.id)?;
        debug!("Picking card {}", id);
        self.picking = Some(id);
        Some(id)
    }

    /// Open the pending pick's profile.
    pub fn finish_pick(&mut self) -> Option<u32> {
        let id = self.picking.take()?;
        self.selected = Some(id);
        Some(id)
    }

    pub fn picking(&self) -> Option<u32> {
        self.picking
    }

    /// Open a profile directly. Unknown ids are ignored, as is any
    /// selection while a random pick is pending.
    pub fn select(&mut self, id: u32) -> bool {
        if self.picking.is_some() {
            debug!("Ignoring selection of {} during a pick", id);
            return false;
        }
        match self.deck.reveal(id) {
            Ok(_) => {
                self.selected = Some(id);
                true
            }
            Err(e) => {
                debug!("Ignoring selection: {}", e);
                false
            }
        }
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&ProfileRecord> {
        self.selected.and_then(|id| self.deck.reveal(id).ok())
    }

    /// Dismiss the open profile and count it as opened.
    pub fn close_selected(&mut self) -> bool {
        match self.selected.take() {
            Some(id) => self.deck.commit_open(id),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.deck.reset_all();
        if self.reshuffle_on_reset {
            self.deck.reshuffle(&mut self.rng);
        }
        self.selected = None;
        self.picking = None;
        info!("Deck reset");
    }

    // -- Sound --

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn should_play_sound(&self, reduced_motion: bool) -> bool {
        self.sound_enabled && !reduced_motion
    }

    // -- Overlays --

    pub fn open_about(&mut self) {
        self.show_about = true;
    }

    pub fn close_about(&mut self) {
        self.show_about = false;
    }

    pub fn show_about(&self) -> bool {
        self.show_about
    }

    pub fn open_login(&mut self) {
        self.show_login = true;
    }

    pub fn close_login(&mut self) {
        self.show_login = false;
    }

    pub fn show_login(&self) -> bool {
        self.show_login
    }

    // -- Admin --

    pub fn login(&mut self, username: &str, password: &str) -> Result<(), CardRevealError> {
        self.gate.check(username, password)?;
        self.admin = AdminSession::Admin;
        self.show_login = false;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.admin = AdminSession::Visitor;
        self.editing = None;
    }

    pub fn is_admin(&self) -> bool {
        self.admin.is_admin()
    }

    pub fn begin_edit(&mut self, id: u32) -> bool {
        if !self.is_admin() || self.deck.get(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn editing(&self) -> Option<u32> {
        self.editing
    }

    pub fn editing_record(&self) -> Option<&ProfileRecord> {
        self.editing.and_then(|id| self.deck.reveal(id).ok())
    }

    pub fn save_edit(&mut self, record: ProfileRecord) -> bool {
        match self.editing.take() {
            Some(id) if self.is_admin() => self.deck.edit(id, record),
            _ => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fixtures::curated_fallback;

    fn session() -> Session {
        let mut s = Session::new(&AppConfig::default(), 9);
        s.install_roster(Roster {
            records: curated_fallback("", 20),
            origin: RosterOrigin::CuratedFallback,
        });
        s
    }

    #[test]
    fn test_load_gate_waits_for_both() {
        let mut gate = LoadGate::new(true);
        assert!(gate.is_loading());
        gate.mark_min_elapsed();
        assert!(gate.is_loading());
        gate.mark_roster_ready();
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_load_gate_timer_only() {
        let mut gate = LoadGate::new(false);
        gate.mark_min_elapsed();
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_deadline_fallback_ends_loading_and_wins() {
        let config = AppConfig::default();
        let mut s = Session::new(&config, 4);
        s.mark_min_elapsed();
        assert!(s.is_loading());

        // Request never settled: the wait deadline installs the fallback.
        assert!(!s.roster_ready());
        let fallback = crate::roster::resolve(
            crate::roster::FetchOutcome::Failed("roster request timed out".into()),
            &config.roster,
            "",
        );
        assert!(s.install_roster(fallback));
        assert!(!s.is_loading());
        assert_eq!(s.origin(), Some(RosterOrigin::CuratedFallback));

        s.select(2);
        s.close_selected();
        let late = Roster {
            records: curated_fallback("", 0),
            origin: RosterOrigin::Fetched,
        };
        assert!(!s.install_roster(late));
        assert_eq!(s.origin(), Some(RosterOrigin::CuratedFallback));
        assert_eq!(s.deck().len(), 25);
        assert_eq!(s.deck().opened_count(), 1);
    }

    #[test]
    fn test_select_refused_while_picking() {
        let mut s = session();
        let id = s.begin_pick().unwrap();
        let other = s.deck().cards().iter().map(|c| c.id()).find(|&c| c != id).unwrap();
        assert!(!s.select(other));
        assert!(s.selected().is_none());
        assert_eq!(s.finish_pick(), Some(id));
        assert_eq!(s.selected(), Some(id));
    }

    #[test]
    fn test_pick_then_close_commits() {
        let mut s = session();
        let id = s.begin_pick().unwrap();
        assert_eq!(s.picking(), Some(id));
        assert_eq!(s.deck().opened_count(), 0);
        assert_eq!(s.finish_pick(), Some(id));
        assert_eq!(s.selected(), Some(id));
        assert!(s.close_selected());
        assert_eq!(s.deck().opened_count(), 1);
        assert!(s.deck().get(id).unwrap().is_opened);
    }

    #[test]
    fn test_pick_ignored_while_profile_open() {
        let mut s = session();
        assert!(s.select(3));
        assert!(s.begin_pick().is_none());
    }

    #[test]
    fn test_reopening_opened_card_does_not_recount() {
        let mut s = session();
        s.select(3);
        s.close_selected();
        s.select(3);
        assert!(!s.close_selected());
        assert_eq!(s.deck().opened_count(), 1);
    }

    #[test]
    fn test_select_unknown_id() {
        let mut s = session();
        assert!(!s.select(500));
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut s = session();
        s.select(1);
        s.close_selected();
        s.begin_pick();
        s.reset();
        assert_eq!(s.deck().opened_count(), 0);
        assert!(s.picking().is_none());
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_sound_respects_reduced_motion() {
        let mut s = session();
        assert!(!s.should_play_sound(false));
        s.toggle_sound();
        assert!(s.should_play_sound(false));
        assert!(!s.should_play_sound(true));
    }

    #[test]
    fn test_edit_requires_admin() {
        let mut s = session();
        assert!(!s.begin_edit(2));
        assert!(s.login("wrong", "creds").is_err());
        assert!(!s.is_admin());

        s.open_login();
        s.login("yashxoxo", "yashg5577").unwrap();
        assert!(!s.show_login());
        assert!(s.begin_edit(2));

        let mut record = s.editing_record().unwrap().clone();
        record.bio = "Rewritten".to_string();
        assert!(s.save_edit(record));
        assert_eq!(s.deck().reveal(2).unwrap().bio, "Rewritten");
        assert!(s.editing().is_none());
    }

    #[test]
    fn test_logout_drops_edit() {
        let mut s = session();
        s.login("yashxoxo", "yashg5577").unwrap();
        s.begin_edit(1);
        s.logout();
        assert!(s.editing().is_none());
        let record = s.deck().reveal(1).unwrap().clone();
        assert!(!s.save_edit(record));
    }
}
