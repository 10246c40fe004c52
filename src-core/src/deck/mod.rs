//! Card state machine.
//!
//! Each profile is wrapped in a [`CardState`] tracking whether it has been
//! opened, the order it was opened in, and where its floating card sits.
//! Revealing a card and committing it as opened are separate steps: the UI
//! shows the profile first and only marks it opened once the profile is
//! dismissed.

pub mod placement;

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::CardRevealError;
use crate::roster::ProfileRecord;

use placement::{place_randomly, PlacementConfig, ScreenPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub record: ProfileRecord,
    pub is_opened: bool,
    /// Opened-count at the moment this card was opened. `None` while unopened.
    pub open_order: Option<usize>,
    pub position: ScreenPosition,
}

impl CardState {
    pub fn id(&self) -> u32 {
        self.record.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<CardState>,
    opened_count: usize,
    placement: PlacementConfig,
}

impl Deck {
    pub fn new(placement: PlacementConfig) -> Self {
        Self {
            cards: Vec::new(),
            opened_count: 0,
            placement,
        }
    }

    /// Replace the collection with fresh, unopened cards.
    ///
    /// Records repeating an earlier id are dropped so that ids stay unique.
    pub fn initialize<R: Rng + ?Sized>(&mut self, records: Vec<ProfileRecord>, rng: &mut R) {
        let mut seen = HashSet::new();
        let mut cards = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                warn!("Dropping duplicate card id {}", record.id);
                continue;
            }
            cards.push(CardState {
                record,
                is_opened: false,
                open_order: None,
                position: place_randomly(&self.placement, rng),
            });
        }
        info!("Deck initialized with {} cards", cards.len());
        self.cards = cards;
        self.opened_count = 0;
    }

    /// Pick an unopened card uniformly at random without opening it.
    /// Returns `None` once every card has been opened.
    pub fn open_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&ProfileRecord> {
        let unopened: Vec<&CardState> = self.cards.iter().filter(|c| !c.is_opened).collect();
        if unopened.is_empty() {
            return None;
        }
        let index = rng.random_range(0..unopened.len());
        Some(&unopened[index].record)
    }

    /// Direct selection for the click path.
    pub fn reveal(&self, id: u32) -> Result<&ProfileRecord, CardRevealError> {
        self.get(id)
            .map(|c| &c.record)
            .ok_or(CardRevealError::NotFound(id))
    }

    /// Mark a card opened. Returns `false` if it was already opened or the
    /// id is unknown; the opened count never moves twice for one id.
    pub fn commit_open(&mut self, id: u32) -> bool {
        let order = self.opened_count;
        match self.cards.iter_mut().find(|c| c.record.id == id) {
            Some(card) if !card.is_opened => {
                card.is_opened = true;
                card.open_order = Some(order);
                self.opened_count += 1;
                true
            }
            Some(_) => false,
            None => {
                debug!("commit_open: no card with id {}", id);
                false
            }
        }
    }

    /// Close every card. Positions are left where they are.
    pub fn reset_all(&mut self) {
        for card in &mut self.cards {
            card.is_opened = false;
            card.open_order = None;
        }
        self.opened_count = 0;
    }

    /// Draw a new position for every card.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for card in &mut self.cards {
            card.position = place_randomly(&self.placement, rng);
        }
    }

    /// Replace the record behind `id`, keeping open state and position.
    /// Unknown ids are ignored.
    pub fn edit(&mut self, id: u32, mut record: ProfileRecord) -> bool {
        match self.cards.iter_mut().find(|c| c.record.id == id) {
            Some(card) => {
                record.id = id;
                card.record = record;
                true
            }
            None => {
                debug!("edit: no card with id {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&CardState> {
        self.cards.iter().find(|c| c.record.id == id)
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn opened_count(&self) -> usize {
        self.opened_count
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.opened_count
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Opened cards in the order they were opened.
    pub fn opened_in_order(&self) -> Vec<&CardState> {
        let mut opened: Vec<&CardState> = self.cards.iter().filter(|c| c.is_opened).collect();
        opened.sort_by_key(|c| c.open_order);
        opened
    }
}
