//! The demon itself: its stats, stomach, age stage, and pending events.

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::constants::{MAX_ACTIONS_TAKEN, STARTING_HEALTH, STOMACH_SIZE};
use crate::core::stat_math::saturating_adjust;

/// Age stage of a demon. Transitions are one-directional: once grown,
/// a demon never reverts to an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LifeStage {
    Child,
    Teen,
    Adult,
}

impl LifeStage {
    pub fn label(self) -> &'static str {
        match self {
            LifeStage::Child => "Child",
            LifeStage::Teen => "Teen",
            LifeStage::Adult => "Adult",
        }
    }
}

/// A queued status change produced during a tick.
///
/// Events are requests, not yet-applied facts; state only changes for a
/// category when its event is dequeued and applied, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    GotSickRandomly,
    GotSickFromPoop,
    GotSickFromObesity,
    GotSickFromMalnourishment,
    Pooped,
    LostDiscipline,
}

/// The full mutable state of one demon.
///
/// Owned exclusively by its lifecycle controller; the event queue is
/// private to the creature and is always empty across resets.
#[derive(Debug, Clone)]
pub struct Demon {
    pub name: String,
    /// 0 is perfect, positive means too hungry, negative means too full.
    pub hunger: i32,
    pub happiness: i32,
    pub discipline: i32,
    pub health: i32,
    pub poop_count: i32,
    pub actions_taken: i32,
    pub is_sick: bool,
    /// Remaining digestion ticks per eaten food; 0 means an empty slot.
    pub stomach: [i32; STOMACH_SIZE],
    pub stage: LifeStage,
    pub pending_events: VecDeque<StatusEvent>,
}

impl Demon {
    /// A freshly hatched demon: full health, everything else at zero.
    pub fn new(name: String) -> Self {
        Self {
            name,
            hunger: 0,
            happiness: 0,
            discipline: 0,
            health: STARTING_HEALTH,
            poop_count: 0,
            actions_taken: 0,
            is_sick: false,
            stomach: [0; STOMACH_SIZE],
            stage: LifeStage::Child,
            pending_events: VecDeque::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Number of stomach slots currently digesting food.
    pub fn foods_digesting(&self) -> usize {
        self.stomach.iter().filter(|&&ticks| ticks > 0).count()
    }

    /// Final-stat record for batch aggregation.
    pub fn snapshot(&self) -> DemonSnapshot {
        DemonSnapshot {
            hunger: self.hunger,
            happiness: self.happiness,
            discipline: self.discipline,
            health: self.health,
            poop_count: self.poop_count,
            actions_taken: self.actions_taken,
            was_sick: self.is_sick,
            stage: self.stage,
        }
    }

    pub fn adjust_hunger(&mut self, delta: i32) {
        self.hunger = saturating_adjust(self.hunger, delta, i32::MIN, i32::MAX);
    }

    pub fn adjust_happiness(&mut self, delta: i32) {
        self.happiness = saturating_adjust(self.happiness, delta, i32::MIN, i32::MAX);
    }

    pub fn adjust_discipline(&mut self, delta: i32) {
        self.discipline = saturating_adjust(self.discipline, delta, i32::MIN, i32::MAX);
    }

    pub fn adjust_health(&mut self, delta: i32) {
        self.health = saturating_adjust(self.health, delta, i32::MIN, i32::MAX);
    }

    pub fn adjust_poop_count(&mut self, delta: i32) {
        self.poop_count = saturating_adjust(self.poop_count, delta, 0, i32::MAX);
    }

    pub fn count_action(&mut self) {
        self.actions_taken = saturating_adjust(self.actions_taken, 1, 0, MAX_ACTIONS_TAKEN);
    }
}

/// Frozen copy of a demon's stats, recorded at the end of a life.
#[derive(Debug, Clone, Serialize)]
pub struct DemonSnapshot {
    pub hunger: i32,
    pub happiness: i32,
    pub discipline: i32,
    pub health: i32,
    pub poop_count: i32,
    pub actions_taken: i32,
    pub was_sick: bool,
    pub stage: LifeStage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_demon_initial_values() {
        let demon = Demon::new("Azgoth".to_string());
        assert_eq!(demon.hunger, 0);
        assert_eq!(demon.happiness, 0);
        assert_eq!(demon.discipline, 0);
        assert_eq!(demon.health, STARTING_HEALTH);
        assert_eq!(demon.poop_count, 0);
        assert_eq!(demon.actions_taken, 0);
        assert!(!demon.is_sick);
        assert_eq!(demon.stomach, [0; STOMACH_SIZE]);
        assert_eq!(demon.stage, LifeStage::Child);
        assert!(demon.pending_events.is_empty());
        assert!(!demon.is_dead());
    }

    #[test]
    fn test_poop_count_never_negative() {
        let mut demon = Demon::new("Belrax".to_string());
        demon.adjust_poop_count(-3);
        assert_eq!(demon.poop_count, 0);
    }

    #[test]
    fn test_actions_taken_caps_at_i16_max() {
        let mut demon = Demon::new("Belrax".to_string());
        demon.actions_taken = MAX_ACTIONS_TAKEN;
        demon.count_action();
        assert_eq!(demon.actions_taken, MAX_ACTIONS_TAKEN);
    }

    #[test]
    fn test_foods_digesting_counts_occupied_slots() {
        let mut demon = Demon::new("Belrax".to_string());
        assert_eq!(demon.foods_digesting(), 0);
        demon.stomach[0] = 3;
        demon.stomach[4] = 1;
        assert_eq!(demon.foods_digesting(), 2);
    }

    #[test]
    fn test_life_stages_are_ordered() {
        assert!(LifeStage::Child < LifeStage::Teen);
        assert!(LifeStage::Teen < LifeStage::Adult);
    }
}
