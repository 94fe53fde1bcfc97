//! The automated caretaker used by batch runs.

use crate::core::actions::Action;
use crate::core::constants::MALNOURISHED_THRESHOLD;
use crate::core::demon::Demon;

/// Picks the next action for a demon, most urgent need first:
/// cure sickness, feed real hunger, clear poop, correct discipline,
/// feed mild hunger, and otherwise play.
pub fn choose_action(demon: &Demon) -> Action {
    if demon.is_sick {
        Action::Medicine
    } else if demon.hunger > MALNOURISHED_THRESHOLD {
        Action::Feed
    } else if demon.poop_count > 0 {
        Action::Clean
    } else if demon.discipline < 0 {
        Action::Discipline
    } else if demon.hunger > 0 {
        Action::Feed
    } else {
        Action::Play
    }
}
