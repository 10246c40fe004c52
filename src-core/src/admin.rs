//! Admin gate for the edit panel.
//!
//! The credentials ship inside the page bundle and are compared in the
//! browser. This hides the edit panel from casual visitors and nothing more:
//! it is not an access-control boundary, and any deployment beyond a local
//! demo needs server-side authentication instead.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CardRevealError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "yashxoxo".to_string(),
            password: "yashg5577".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    config: AdminConfig,
}

impl AdminGate {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, username: &str, password: &str) -> Result<(), CardRevealError> {
        if username == self.config.username && password == self.config.password {
            info!("Admin panel unlocked");
            Ok(())
        } else {
            warn!("Rejected admin login for '{}'", username);
            Err(CardRevealError::InvalidCredentials)
        }
    }
}

/// Whether the edit panel is unlocked for this page session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    Visitor,
    Admin,
}

impl AdminSession {
    pub fn is_admin(&self) -> bool {
        matches!(self, AdminSession::Admin)
    }
}
