//! Player actions and the discipline check that gates them.
//!
//! Every handler counts as an action and carries a fixed hunger cost,
//! applied centrally by [`apply_action`]; the branch-specific effects
//! live in the individual handlers. All "failures" here (refusing to
//! eat, a full stomach, medicine not working, flushing nothing) are
//! ordinary modeled outcomes, not errors.

use crate::core::constants::{
    DIGESTION_MIN_TICKS, DIGESTION_TICK_SPAN, DISCIPLINE_GAINED_PER_SCOLDING, FEED_HUNGER_COST,
    FLUSH_HUNGER_COST, HAPPINESS_GAINED_EATING_HUNGRY, HAPPINESS_GAINED_PER_PLAY,
    HAPPINESS_LOST_EATING_FULL, HAPPINESS_LOST_PER_MEDICINE, HAPPINESS_LOST_PER_SCOLDING,
    HUNGER_RESTORED_PER_FOOD, MEDICINE_CURE_THRESHOLD, MEDICINE_DRAW_SPAN, MEDICINE_HUNGER_COST,
    OVEREAT_ATTEMPTS, PLAY_HUNGER_COST, SCOLD_HUNGER_COST, UNRULY_ADULT_THRESHOLD,
    UNRULY_DRAW_SPAN, UNRULY_TEEN_THRESHOLD,
};
use crate::core::demon::{Demon, LifeStage};
use crate::rng::DrawRng;

/// The five things a caretaker can do to a demon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Feed,
    Play,
    Discipline,
    Medicine,
    Clean,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Feed,
        Action::Play,
        Action::Discipline,
        Action::Medicine,
        Action::Clean,
    ];

    /// The mandatory hunger delta every invocation of this action
    /// applies, whichever branch it takes.
    pub fn hunger_cost(self) -> i32 {
        match self {
            Action::Feed => FEED_HUNGER_COST,
            Action::Play => PLAY_HUNGER_COST,
            Action::Discipline => SCOLD_HUNGER_COST,
            Action::Medicine => MEDICINE_HUNGER_COST,
            Action::Clean => FLUSH_HUNGER_COST,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Feed => "Feed",
            Action::Play => "Play",
            Action::Discipline => "Discipline",
            Action::Medicine => "Medicine",
            Action::Clean => "Clean",
        }
    }
}

/// What actually happened when an action was applied.
///
/// The presentation layer maps these to log lines; the simulator counts
/// them. Game logic never touches UI types directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEvent {
    /// Sick demons refuse food half the time.
    RefusedFoodSick,
    /// The discipline check failed and the coin landed on refusal.
    RefusedFoodUnruly,
    /// One food unit eaten normally.
    Ate,
    /// No empty stomach slot; nothing was eaten.
    TooFullToEat,
    /// Unruly overeating: up to three units wolfed down.
    Overate { eaten: u32 },
    Played,
    RefusedPlay,
    Scolded { while_sick: bool },
    Cured,
    MedicineFailed,
    FlushedPoop,
    FlushedNothing,
}

/// Discipline check: is the demon refusing to cooperate right now?
///
/// Not idempotent: every call consumes RNG state, so two consecutive
/// checks on the same demon may disagree. Unruliness is a per-call roll,
/// not a stored attribute.
pub fn is_unruly(demon: &Demon, rng: &mut impl DrawRng) -> bool {
    if demon.discipline < 0 {
        let threshold = match demon.discipline {
            -1 => 4,
            -2 => 5,
            -3 => 6,
            _ => 7,
        };
        rng.draw_below(UNRULY_DRAW_SPAN) < threshold
    } else {
        match demon.stage {
            LifeStage::Teen => rng.draw_below(UNRULY_DRAW_SPAN) < UNRULY_TEEN_THRESHOLD,
            LifeStage::Adult => rng.draw_below(UNRULY_DRAW_SPAN) < UNRULY_ADULT_THRESHOLD,
            LifeStage::Child => false,
        }
    }
}

/// Applies one action to the demon.
///
/// Returns `None` without touching anything if the demon is dead; there
/// are no error returns, only state-conditional branching. Otherwise the
/// action is counted, its branch runs, and its fixed hunger cost lands.
pub fn apply_action(
    demon: &mut Demon,
    action: Action,
    rng: &mut impl DrawRng,
) -> Option<ActionEvent> {
    if demon.is_dead() {
        return None;
    }

    demon.count_action();

    let event = match action {
        Action::Feed => feed(demon, rng),
        Action::Play => play(demon, rng),
        Action::Discipline => scold(demon),
        Action::Medicine => medicate(demon, rng),
        Action::Clean => flush(demon),
    };

    demon.adjust_hunger(action.hunger_cost());

    Some(event)
}

/// Feeding makes the demon happier if it is hungry.
fn feed(demon: &mut Demon, rng: &mut impl DrawRng) -> ActionEvent {
    // A sick demon refuses food half the time
    if demon.is_sick && rng.draw_below(2) == 1 {
        ActionEvent::RefusedFoodSick
    } else if is_unruly(demon, rng) {
        // An unruly demon either turns its nose up or gorges itself
        if rng.draw_below(2) == 1 {
            ActionEvent::RefusedFoodUnruly
        } else {
            let mut eaten = 0;
            for _ in 0..OVEREAT_ATTEMPTS {
                if eat_one_food(demon, rng) {
                    eaten += 1;
                }
            }
            ActionEvent::Overate { eaten }
        }
    } else if eat_one_food(demon, rng) {
        ActionEvent::Ate
    } else {
        ActionEvent::TooFullToEat
    }
}

/// Puts one food unit in the first empty stomach slot.
///
/// Returns false if the stomach is full; the failed eat changes nothing
/// beyond the caller's own hunger cost.
fn eat_one_food(demon: &mut Demon, rng: &mut impl DrawRng) -> bool {
    let slot = match demon.stomach.iter().position(|&ticks| ticks == 0) {
        Some(slot) => slot,
        None => return false,
    };

    // Eating when hungry is pleasant, eating when stuffed is not
    if demon.hunger > 0 {
        demon.adjust_happiness(HAPPINESS_GAINED_EATING_HUNGRY);
    } else {
        demon.adjust_happiness(-HAPPINESS_LOST_EATING_FULL);
    }

    demon.stomach[slot] = DIGESTION_MIN_TICKS + rng.draw_below(DIGESTION_TICK_SPAN) as i32;
    demon.adjust_hunger(-HUNGER_RESTORED_PER_FOOD);
    true
}

fn play(demon: &mut Demon, rng: &mut impl DrawRng) -> ActionEvent {
    if is_unruly(demon, rng) {
        ActionEvent::RefusedPlay
    } else {
        let gained = match demon.stage {
            LifeStage::Adult => HAPPINESS_GAINED_PER_PLAY / 2,
            LifeStage::Child | LifeStage::Teen => HAPPINESS_GAINED_PER_PLAY,
        };
        demon.adjust_happiness(gained);
        ActionEvent::Played
    }
}

/// Scolding always stings; it only teaches a demon that is well enough
/// to listen.
fn scold(demon: &mut Demon) -> ActionEvent {
    demon.adjust_happiness(-HAPPINESS_LOST_PER_SCOLDING);
    let while_sick = demon.is_sick;
    if !while_sick {
        demon.adjust_discipline(DISCIPLINE_GAINED_PER_SCOLDING);
    }
    ActionEvent::Scolded { while_sick }
}

fn medicate(demon: &mut Demon, rng: &mut impl DrawRng) -> ActionEvent {
    let cured = rng.draw_below(MEDICINE_DRAW_SPAN) < MEDICINE_CURE_THRESHOLD;
    if cured {
        demon.is_sick = false;
    }
    demon.adjust_happiness(-HAPPINESS_LOST_PER_MEDICINE);
    if cured {
        ActionEvent::Cured
    } else {
        ActionEvent::MedicineFailed
    }
}

fn flush(demon: &mut Demon) -> ActionEvent {
    if demon.poop_count > 0 {
        demon.adjust_poop_count(-1);
        ActionEvent::FlushedPoop
    } else {
        ActionEvent::FlushedNothing
    }
}
