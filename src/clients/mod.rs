//! Read-only client directory.
//!
//! The roster of bookable clients is owned outside the booking store. It is
//! constructed explicitly (from a fixed list, a `roster.toml` file, or the
//! built-in sample roster) and passed into whatever needs it; nothing in the
//! crate holds it as hidden module-level state.

pub mod roster;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{ClientId, CoachId};
use crate::models::booking::{Client, ClientStatus};

/// Error loading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Roster file shape: a list of `[[clients]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    clients: Vec<Client>,
}

/// An immutable directory of bookable clients.
#[derive(Debug, Clone)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    /// Build a directory from an explicit client list.
    pub fn from_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Load a directory from a `roster.toml` file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let contents = fs::read_to_string(path)?;
        let file: RosterFile = toml::from_str(&contents)?;
        Ok(Self::from_clients(file.clients))
    }

    /// The built-in sample roster used for development and tests.
    pub fn sample() -> Self {
        Self::from_clients(roster::sample_roster())
    }

    pub fn all(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == *id)
    }

    /// Case-insensitive substring search over name, phone, and email.
    ///
    /// An empty query matches everyone, which is what the booking form shows
    /// before the coach starts typing.
    pub fn search(&self, query: &str) -> Vec<&Client> {
        let needle = query.to_lowercase();
        self.clients
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
                    || c.email
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn by_coach(&self, coach_id: &CoachId) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|c| c.coach_id == *coach_id)
            .collect()
    }

    pub fn by_status(&self, status: ClientStatus) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|c| c.status == status)
            .collect()
    }

    pub fn active(&self) -> Vec<&Client> {
        self.by_status(ClientStatus::Active)
    }
}
