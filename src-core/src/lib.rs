//! Core of the Card Reveal page: roster loading, the card state machine,
//! floating-card placement, the cosmetic admin gate and the page session.
//!
//! Nothing in this crate touches the browser, so all of it runs under
//! native `cargo test`.

pub mod admin;
pub mod config;
pub mod deck;
mod error;
pub mod roster;
pub mod session;
pub mod ticker;

pub use config::{default_config, AppConfig};
pub use deck::placement::{PlacementConfig, ScreenPosition};
pub use deck::{CardState, Deck};
pub use error::CardRevealError;
pub use roster::{FetchOutcome, ProfileDraft, ProfileRecord, Roster, RosterOrigin};
pub use session::Session;
