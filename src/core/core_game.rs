//! Lifecycle controller: one demon from hatching to death to rebirth.
//!
//! `DemonGame` owns the creature for its whole life and is the only
//! thing that creates or resets it. Both the interactive binary and the
//! batch simulator drive the game through this type, so the two always
//! share the same mechanics.

use crate::core::actions::{apply_action, Action, ActionEvent};
use crate::core::demon::Demon;
use crate::core::tick::{game_tick, TickResult};
use crate::names::generate_name;
use crate::rng::DrawRng;

pub struct DemonGame {
    demon: Demon,
    lives_completed: u32,
}

impl DemonGame {
    /// Hatches a fresh demon with a generated name.
    pub fn new(rng: &mut impl DrawRng) -> Self {
        Self {
            demon: Demon::new(generate_name(rng)),
            lives_completed: 0,
        }
    }

    pub fn demon(&self) -> &Demon {
        &self.demon
    }

    pub fn demon_mut(&mut self) -> &mut Demon {
        &mut self.demon
    }

    pub fn is_dead(&self) -> bool {
        self.demon.is_dead()
    }

    /// Number of lives that have ended since this game started.
    pub fn lives_completed(&self) -> u32 {
        self.lives_completed
    }

    /// Applies one player action. Silent no-op on a dead demon.
    pub fn take_action(&mut self, action: Action, rng: &mut impl DrawRng) -> Option<ActionEvent> {
        apply_action(&mut self.demon, action, rng)
    }

    /// Runs one status evaluation pass.
    pub fn tick(&mut self, rng: &mut impl DrawRng) -> TickResult {
        game_tick(&mut self.demon, rng)
    }

    /// Replaces the demon with a freshly hatched one under a new name.
    ///
    /// Every field goes back to its initial value and the event queue
    /// starts empty; nothing from the previous life carries over.
    pub fn reset(&mut self, rng: &mut impl DrawRng) {
        if self.demon.is_dead() {
            self.lives_completed += 1;
        }
        self.demon = Demon::new(generate_name(rng));
    }
}
