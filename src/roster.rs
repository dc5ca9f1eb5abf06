//! Bounded pool of player identities.
//!
//! Every player in a session carries a small positive id unique for the
//! session's lifetime. Ids come from a [`Roster`]; releasing a handle
//! consumes it, so a released player cannot be used again.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Maximum number of identities a roster can hand out at once.
pub const ROSTER_CAPACITY: usize = 127;

/// Unique identifier of a player, positive and at most
/// [`ROSTER_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Returns the raw numeric id.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's id and display name, as shown in game narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique id issued by the roster.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// An issued identity.
///
/// Deliberately not `Clone`: the handle is the proof that the identity is
/// still live. [`Roster::release`] takes it by value, so any later use of a
/// released player is a compile error rather than a runtime fault.
#[derive(Debug)]
pub struct PlayerHandle {
    identity: Identity,
}

impl PlayerHandle {
    /// Returns the player's id.
    pub fn id(&self) -> PlayerId {
        self.identity.id
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Returns the full identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Arena allocator for player identities.
///
/// Ids are handed out lowest-free-first, starting at 1. The pool holds at
/// most [`ROSTER_CAPACITY`] concurrent identities; exhaustion is a fatal
/// setup error for the caller.
#[derive(Debug)]
pub struct Roster {
    in_use: [bool; ROSTER_CAPACITY],
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            in_use: [false; ROSTER_CAPACITY],
        }
    }

    /// Issues a handle for the lowest free id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Exhausted`] when every id is taken.
    #[instrument(skip(self, name))]
    pub fn allocate(&mut self, name: impl Into<String>) -> Result<PlayerHandle, RosterError> {
        let slot = self
            .in_use
            .iter()
            .position(|taken| !taken)
            .ok_or(RosterError::Exhausted)?;
        self.in_use[slot] = true;
        let id = PlayerId(slot as u8 + 1);
        debug!(%id, "issued player id");
        Ok(PlayerHandle {
            identity: Identity {
                id,
                name: name.into(),
            },
        })
    }

    /// Returns a handle's id to the pool, consuming the handle.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ForeignHandle`] if the id is not currently
    /// issued by this roster.
    #[instrument(skip(self, handle), fields(id = %handle.id()))]
    pub fn release(&mut self, handle: PlayerHandle) -> Result<(), RosterError> {
        let id = handle.id();
        let slot = id.get() as usize - 1;
        if !self.in_use[slot] {
            return Err(RosterError::ForeignHandle { id });
        }
        self.in_use[slot] = false;
        debug!(%id, "released player id");
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_ascend() {
        let mut roster = Roster::new();
        let a = roster.allocate("a").unwrap();
        let b = roster.allocate("b").unwrap();
        assert_eq!(a.id().get(), 1);
        assert_eq!(b.id().get(), 2);
    }

    #[test]
    fn test_release_frees_lowest_id() {
        let mut roster = Roster::new();
        let a = roster.allocate("a").unwrap();
        let _b = roster.allocate("b").unwrap();
        roster.release(a).unwrap();
        let c = roster.allocate("c").unwrap();
        assert_eq!(c.id().get(), 1);
    }

    #[test]
    fn test_exhaustion() {
        let mut roster = Roster::new();
        let mut handles = Vec::new();
        for i in 0..ROSTER_CAPACITY {
            handles.push(roster.allocate(format!("p{i}")).unwrap());
        }
        assert_eq!(
            roster.allocate("overflow").unwrap_err(),
            RosterError::Exhausted
        );
        // Freeing one slot makes allocation possible again.
        roster.release(handles.pop().unwrap()).unwrap();
        assert!(roster.allocate("again").is_ok());
    }

    #[test]
    fn test_double_release_is_foreign() {
        let mut roster = Roster::new();
        let a = roster.allocate("a").unwrap();
        let id = a.id();
        roster.release(a).unwrap();
        // Forge a handle with the same id via a fresh roster to simulate
        // a stray release.
        let mut other = Roster::new();
        let forged = other.allocate("a").unwrap();
        assert_eq!(forged.id(), id);
        assert_eq!(
            roster.release(forged).unwrap_err(),
            RosterError::ForeignHandle { id }
        );
    }
}
