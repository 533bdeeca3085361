//! Raid simulation from a roster file
//!
//! ## Usage
//!
//! ```bash
//! # Play the built-in raid
//! cargo run --release
//!
//! # Play a custom roster with a fixed seed and keep the match record
//! cargo run --release -- --roster raid.ron --seed 42 --output record.json
//! ```
//!
//! ## RON Roster
//!
//! ```ron
//! (
//!     boss: (name: "Serega", health: 4000, damage: 50),
//!     heroes: [
//!         (class: Warrior, name: "Aron", health: 290, damage: 10),
//!         (class: Medic, name: "Leonard", health: 250, damage: 5, heal_points: Some(15)),
//!     ],
//!     seed: Some(42),
//! )
//! ```

pub mod config;
pub mod runner;

pub use config::{ConfigError, RosterConfig};
pub use runner::{play, run_simulation, MatchRecord, SimulationError};
