//! The per-turn status evaluation pass.
//!
//! [`game_tick`] runs once after every player action. The step order is
//! fixed: it determines which probabilistic effects can compound within
//! one tick, and which draws land on which formulas. Status changes
//! generated by a tick are queued as [`StatusEvent`]s and applied at most
//! one per tick, oldest first. This throttles how many state
//! changes can land per turn.

use crate::core::constants::{
    ADULT_ACTIONS_TAKEN, CONTENT_DRIFT_DRAW_SPAN, DISCIPLINE_LOST_ADULT, DISCIPLINE_LOST_TEEN,
    HAPPINESS_LOST_PER_STANDING_POOP, HEALTH_LOST_PER_SICKNESS, HEALTH_LOST_PER_WEIGHT,
    MALNOURISHED_THRESHOLD, OBESE_THRESHOLD, POOP_SICKNESS_BASE, POOP_SICKNESS_DRAW_SPAN,
    RANDOM_SICKNESS_DRAW_SPAN, STOMACH_SIZE, TEEN_ACTIONS_TAKEN, UNHAPPY_DRIFT_DRAW_SPAN,
    WEIGHT_SICKNESS_DRAW_SPAN, WEIGHT_SICKNESS_THRESHOLD,
};
use crate::core::demon::{Demon, LifeStage, StatusEvent};
use crate::rng::DrawRng;

/// Why a demon fell sick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SickCause {
    Random,
    Poop,
    Obesity,
    Malnourishment,
}

/// Which side of the weight window the demon is outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    Obese,
    Malnourished,
}

/// An observable happening of one tick, in chronological order.
///
/// The presentation layer maps these to log lines; the simulator counts
/// them. Queued-but-unapplied status events are not reported, only
/// effects that actually landed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Sickness took its health toll this tick.
    SicknessToll { health_lost: i32 },
    /// Standing poop made the demon sad.
    Stench { happiness_lost: i32 },
    /// The demon is outside the healthy weight window.
    WeightToll { kind: WeightKind, health_lost: i32 },
    /// The demon grew into a new life stage.
    AgedUp { stage: LifeStage },
    /// A queued sickness event was applied to a healthy demon.
    FellSick { cause: SickCause },
    /// A queued poop event was applied.
    Pooped,
    /// A queued discipline loss was applied (children are immune).
    LostDiscipline { stage: LifeStage, amount: i32 },
    /// Health reached zero; the life is over.
    Died,
}

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    pub died: bool,
}

/// Runs one status evaluation pass over the demon.
///
/// No-op on a dead demon. Otherwise the ten steps run in fixed order:
/// sickness toll, random sickness roll, digestion, poop sickness roll,
/// poop unhappiness, weight toll, discipline drift, age transition, the
/// single event application, and the death check. On death the remaining
/// queue is discarded so nothing leaks into the next life.
pub fn game_tick(demon: &mut Demon, rng: &mut impl DrawRng) -> TickResult {
    let mut result = TickResult::default();

    if demon.is_dead() {
        return result;
    }

    // ── 1. Sickness health toll ─────────────────────────────────
    if demon.is_sick {
        demon.adjust_health(-HEALTH_LOST_PER_SICKNESS);
        result.events.push(TickEvent::SicknessToll {
            health_lost: HEALTH_LOST_PER_SICKNESS,
        });
    }

    // ── 2. Random sickness onset ────────────────────────────────
    if rng.draw_below(RANDOM_SICKNESS_DRAW_SPAN) == 0 {
        demon.pending_events.push_back(StatusEvent::GotSickRandomly);
    }

    // ── 3. Digestion ────────────────────────────────────────────
    // Each food digesting ticks down; each one that finishes queues
    // its own poop event.
    for slot in 0..STOMACH_SIZE {
        if demon.stomach[slot] > 0 {
            demon.stomach[slot] -= 1;
            if demon.stomach[slot] == 0 {
                demon.pending_events.push_back(StatusEvent::Pooped);
            }
        }
    }

    // ── 4. Poop-induced sickness ────────────────────────────────
    // 1 poop -> 25%, 2 -> 50%, 3 -> 75%, 4+ -> certain. The draw is
    // consumed even at zero poop.
    if rng.draw_below(POOP_SICKNESS_DRAW_SPAN) as i32 > POOP_SICKNESS_BASE - demon.poop_count {
        demon.pending_events.push_back(StatusEvent::GotSickFromPoop);
    }

    // ── 5. Poop unhappiness ─────────────────────────────────────
    // Flat, not scaled by pile size.
    if demon.poop_count > 0 {
        demon.adjust_happiness(-HAPPINESS_LOST_PER_STANDING_POOP);
        result.events.push(TickEvent::Stench {
            happiness_lost: HAPPINESS_LOST_PER_STANDING_POOP,
        });
    }

    // ── 6. Weight health toll ───────────────────────────────────
    if demon.hunger < OBESE_THRESHOLD {
        if rng.draw_below(WEIGHT_SICKNESS_DRAW_SPAN) >= WEIGHT_SICKNESS_THRESHOLD {
            demon
                .pending_events
                .push_back(StatusEvent::GotSickFromObesity);
        }
        demon.adjust_health(-HEALTH_LOST_PER_WEIGHT);
        result.events.push(TickEvent::WeightToll {
            kind: WeightKind::Obese,
            health_lost: HEALTH_LOST_PER_WEIGHT,
        });
    } else if demon.hunger > MALNOURISHED_THRESHOLD {
        if rng.draw_below(WEIGHT_SICKNESS_DRAW_SPAN) >= WEIGHT_SICKNESS_THRESHOLD {
            demon
                .pending_events
                .push_back(StatusEvent::GotSickFromMalnourishment);
        }
        demon.adjust_health(-HEALTH_LOST_PER_WEIGHT);
        result.events.push(TickEvent::WeightToll {
            kind: WeightKind::Malnourished,
            health_lost: HEALTH_LOST_PER_WEIGHT,
        });
    }

    // ── 7. Discipline drift ─────────────────────────────────────
    // Rare while content; once unhappy the odds climb with misery:
    // happiness 0 -> 25%, -1 -> 50%, -2 -> 75%, -3 and below -> certain.
    let drifting = if demon.happiness > 0 {
        rng.draw_below(CONTENT_DRIFT_DRAW_SPAN) == 0
    } else {
        (rng.draw_below(UNHAPPY_DRIFT_DRAW_SPAN) as i64) < 1 - demon.happiness as i64
    };
    if drifting {
        demon.pending_events.push_back(StatusEvent::LostDiscipline);
    }

    // ── 8. Age transition ───────────────────────────────────────
    if demon.actions_taken >= ADULT_ACTIONS_TAKEN {
        if demon.stage != LifeStage::Adult {
            demon.stage = LifeStage::Adult;
            result.events.push(TickEvent::AgedUp {
                stage: LifeStage::Adult,
            });
        }
    } else if demon.actions_taken >= TEEN_ACTIONS_TAKEN && demon.stage == LifeStage::Child {
        demon.stage = LifeStage::Teen;
        result.events.push(TickEvent::AgedUp {
            stage: LifeStage::Teen,
        });
    }

    // ── 9. Apply exactly one queued event ───────────────────────
    // Oldest first; anything else queued this tick waits its turn.
    if let Some(event) = demon.pending_events.pop_front() {
        apply_status_event(demon, event, &mut result);
    }

    // ── 10. Death check ─────────────────────────────────────────
    if demon.is_dead() {
        demon.pending_events.clear();
        result.events.push(TickEvent::Died);
        result.died = true;
    }

    result
}

/// Applies one dequeued status event. This is the only place state
/// actually changes for these categories.
fn apply_status_event(demon: &mut Demon, event: StatusEvent, result: &mut TickResult) {
    match event {
        StatusEvent::GotSickRandomly => apply_sickness(demon, SickCause::Random, result),
        StatusEvent::GotSickFromPoop => apply_sickness(demon, SickCause::Poop, result),
        StatusEvent::GotSickFromObesity => apply_sickness(demon, SickCause::Obesity, result),
        StatusEvent::GotSickFromMalnourishment => {
            apply_sickness(demon, SickCause::Malnourishment, result)
        }
        StatusEvent::Pooped => {
            demon.adjust_poop_count(1);
            result.events.push(TickEvent::Pooped);
        }
        StatusEvent::LostDiscipline => match demon.stage {
            // Children are immune to discipline loss
            LifeStage::Child => {}
            LifeStage::Teen => {
                demon.adjust_discipline(-DISCIPLINE_LOST_TEEN);
                result.events.push(TickEvent::LostDiscipline {
                    stage: LifeStage::Teen,
                    amount: DISCIPLINE_LOST_TEEN,
                });
            }
            LifeStage::Adult => {
                demon.adjust_discipline(-DISCIPLINE_LOST_ADULT);
                result.events.push(TickEvent::LostDiscipline {
                    stage: LifeStage::Adult,
                    amount: DISCIPLINE_LOST_ADULT,
                });
            }
        },
    }
}

/// Already-sick demons don't get sicker, and there is no duplicate
/// announcement.
fn apply_sickness(demon: &mut Demon, cause: SickCause, result: &mut TickResult) {
    if !demon.is_sick {
        demon.is_sick = true;
        result.events.push(TickEvent::FellSick { cause });
    }
}
