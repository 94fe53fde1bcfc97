//! Maps core events to human-readable log lines.
//!
//! This is the bridge between pure game-logic events and the
//! presentation layer; game logic itself never formats text for the UI.

use std::collections::VecDeque;

use crate::core::actions::ActionEvent;
use crate::core::constants::EVENT_LOG_CAPACITY;
use crate::core::tick::{SickCause, TickEvent, WeightKind};

/// A bounded scrollback of log lines, newest last.
#[derive(Debug, Default)]
pub struct EventLog {
    lines: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == EVENT_LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Describes the outcome of a player action.
pub fn describe_action_event(name: &str, event: ActionEvent) -> String {
    match event {
        ActionEvent::RefusedFoodSick => format!("{} was too sick to eat", name),
        ActionEvent::RefusedFoodUnruly => format!("{} was too unruly to eat", name),
        ActionEvent::Ate => format!("{} ate the food", name),
        ActionEvent::TooFullToEat => format!("{} was too full to eat", name),
        ActionEvent::Overate { eaten: 0 } => format!("{} tried to gorge, but was too full", name),
        ActionEvent::Overate { eaten } => {
            format!("{} greedily wolfed down {} helpings", name, eaten)
        }
        ActionEvent::Played => format!("You played with {}", name),
        ActionEvent::RefusedPlay => format!("{} was too unruly to play", name),
        ActionEvent::Scolded { while_sick: false } => format!("You scolded {}", name),
        ActionEvent::Scolded { while_sick: true } => {
            format!("You scolded {}, but it was sick", name)
        }
        ActionEvent::Cured => format!("You gave {} medicine, and it was cured", name),
        ActionEvent::MedicineFailed => format!("You gave {} medicine, but it didn't work", name),
        ActionEvent::FlushedPoop => "You flushed a poop".to_string(),
        ActionEvent::FlushedNothing => "You flushed nothing".to_string(),
    }
}

/// Describes one observable happening of a tick.
pub fn describe_tick_event(name: &str, event: TickEvent) -> String {
    match event {
        TickEvent::SicknessToll { .. } => format!("{} lost health to sickness", name),
        TickEvent::Stench { .. } => format!("The smell is getting to {}", name),
        TickEvent::WeightToll {
            kind: WeightKind::Obese,
            ..
        } => format!("{} lost health to obesity", name),
        TickEvent::WeightToll {
            kind: WeightKind::Malnourished,
            ..
        } => format!("{} lost health to malnourishment", name),
        TickEvent::AgedUp { stage } => format!("{} grew into a {}", name, stage.label()),
        TickEvent::FellSick {
            cause: SickCause::Random,
        } => format!("{} randomly got sick", name),
        TickEvent::FellSick {
            cause: SickCause::Poop,
        } => format!("Poop made {} sick", name),
        TickEvent::FellSick {
            cause: SickCause::Obesity,
        } => format!("Obesity made {} sick", name),
        TickEvent::FellSick {
            cause: SickCause::Malnourishment,
        } => format!("Malnourishment made {} sick", name),
        TickEvent::Pooped => format!("{} pooped", name),
        TickEvent::LostDiscipline { .. } => format!("{} became less disciplined", name),
        TickEvent::Died => format!("{} died", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_caps_at_capacity() {
        let mut log = EventLog::new();
        for i in 0..(EVENT_LOG_CAPACITY + 10) {
            log.push(format!("line {}", i));
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        // Oldest lines were dropped
        assert_eq!(log.lines().next(), Some("line 10"));
    }

    #[test]
    fn test_action_lines_mention_the_demon() {
        let line = describe_action_event("Azgon", ActionEvent::Ate);
        assert!(line.contains("Azgon"));
    }

    #[test]
    fn test_overeat_line_distinguishes_nothing_eaten() {
        let none = describe_action_event("Azgon", ActionEvent::Overate { eaten: 0 });
        let some = describe_action_event("Azgon", ActionEvent::Overate { eaten: 3 });
        assert_ne!(none, some);
    }
}
