//! Combat logging
//!
//! Records every combat event of a raid for display and post-match analysis.

use serde::{Deserialize, Serialize};

/// A single entry in the combat log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    /// Round the event happened in (0 = before the first round)
    pub round: u32,
    /// The type of event
    pub event_type: CombatLogEventType,
    /// Human-readable description of the event
    pub message: String,
}

/// Types of combat log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatLogEventType {
    /// Damage dealt
    Damage,
    /// Health restored or transferred
    Healing,
    /// Special power fired
    AbilityUsed,
    /// Stun applied or consumed
    CrowdControl,
    /// Match event (start, end, etc.)
    MatchEvent,
}

impl CombatLogEventType {
    /// Whether the event is narrated on the console; plain hits and heals
    /// only show up in the statistics.
    pub fn is_narrated(&self) -> bool {
        !matches!(
            self,
            CombatLogEventType::Damage | CombatLogEventType::Healing
        )
    }
}

/// The combat log storing all events
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    /// All log entries in chronological order
    pub entries: Vec<CombatLogEntry>,
    /// Current round
    pub round: u32,
}

impl CombatLog {
    pub fn set_round(&mut self, round: u32) {
        self.round = round;
    }

    /// Add a new entry to the log
    pub fn log(&mut self, event_type: CombatLogEventType, message: String) {
        tracing::debug!(round = self.round, kind = ?event_type, "{}", message);
        self.entries.push(CombatLogEntry {
            round: self.round,
            event_type,
            message,
        });
    }

    /// All entries recorded during `round`
    pub fn for_round(&self, round: u32) -> &[CombatLogEntry] {
        let start = self.entries.partition_point(|e| e.round < round);
        let end = self.entries.partition_point(|e| e.round <= round);
        &self.entries[start..end]
    }
}
