//! Behavior tests for the five action handlers and the discipline check.
//!
//! These use scripted draw sequences so each probabilistic branch is
//! pinned down exactly. Draw order per action:
//! - Feed: sick coin (if sick), discipline check, unruly coin (if
//!   unruly), then one digestion draw per successful eat
//! - Play: discipline check only
//! - Discipline / Clean: no draws
//! - Medicine: one cure draw

use imp::core::actions::{apply_action, is_unruly, Action, ActionEvent};
use imp::core::constants::{MAX_ACTIONS_TAKEN, STARTING_HEALTH, STOMACH_SIZE};
use imp::core::demon::{Demon, LifeStage};
use imp::rng::ScriptedRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn demon() -> Demon {
    Demon::new("Testling".to_string())
}

// ── Discipline check ────────────────────────────────────────────────

#[test]
fn test_unruly_thresholds_scale_with_negative_discipline() {
    // (discipline, draw, expected)
    let cases = [
        (-1, 3, true),
        (-1, 4, false),
        (-2, 4, true), // draw 4 < threshold 5
        (-2, 5, false),
        (-3, 5, true),
        (-3, 6, false),
        (-4, 6, true),
        (-4, 7, false),
        (-9, 6, true), // deep negatives cap at 7/8
        (-9, 7, false),
    ];
    for (discipline, draw, expected) in cases {
        let mut d = demon();
        d.discipline = discipline;
        let mut rng = ScriptedRng::new([draw]);
        assert_eq!(
            is_unruly(&d, &mut rng),
            expected,
            "discipline {} draw {}",
            discipline,
            draw
        );
        assert_eq!(rng.remaining(), 0);
    }
}

#[test]
fn test_teens_and_adults_can_be_unruly_without_negative_discipline() {
    let mut d = demon();
    d.stage = LifeStage::Teen;
    assert!(is_unruly(&d, &mut ScriptedRng::new([1])));
    assert!(!is_unruly(&d, &mut ScriptedRng::new([2])));

    d.stage = LifeStage::Adult;
    assert!(is_unruly(&d, &mut ScriptedRng::new([0])));
    assert!(!is_unruly(&d, &mut ScriptedRng::new([1])));
}

#[test]
fn test_well_behaved_children_are_never_unruly() {
    let d = demon();
    let mut rng = ScriptedRng::new([]);
    // Consumes no draws at all
    assert!(!is_unruly(&d, &mut rng));
}

// ── Feed ────────────────────────────────────────────────────────────

#[test]
fn test_feed_with_full_stomach_only_costs_the_action_hunger() {
    let mut d = demon();
    d.stomach = [3; STOMACH_SIZE];

    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::TooFullToEat));
    assert_eq!(d.hunger, 1);
    assert_eq!(d.happiness, 0);
    assert_eq!(d.actions_taken, 1);
    assert_eq!(d.stomach, [3; STOMACH_SIZE]);
}

#[test]
fn test_feed_fills_exactly_one_slot_and_restores_hunger() {
    let mut d = demon();
    d.hunger = 10;

    // Digestion draw 2 -> slot gets 3 + 2 = 5 ticks
    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([2]));

    assert_eq!(event, Some(ActionEvent::Ate));
    assert_eq!(d.stomach[0], 5);
    assert_eq!(d.foods_digesting(), 1);
    // -5 from the food, +1 action cost
    assert_eq!(d.hunger, 6);
    // Eating while hungry is pleasant
    assert_eq!(d.happiness, 1);
}

#[test]
fn test_feeding_a_demon_that_is_not_hungry_makes_it_sad() {
    let mut d = demon();

    apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([0]));

    assert_eq!(d.happiness, -3);
    assert_eq!(d.hunger, -4);
}

#[test]
fn test_digestion_times_always_land_between_three_and_six() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..200 {
        let mut d = demon();
        d.hunger = 10;
        apply_action(&mut d, Action::Feed, &mut rng);
        let filled: Vec<i32> = d.stomach.iter().copied().filter(|&t| t > 0).collect();
        assert_eq!(filled.len(), 1);
        assert!((3..=6).contains(&filled[0]));
    }
}

#[test]
fn test_sick_demon_refuses_food_on_the_coin_flip() {
    let mut d = demon();
    d.is_sick = true;

    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([1]));

    assert_eq!(event, Some(ActionEvent::RefusedFoodSick));
    assert_eq!(d.hunger, 1);
    assert_eq!(d.foods_digesting(), 0);
}

#[test]
fn test_sick_demon_can_still_eat_on_the_other_coin_face() {
    let mut d = demon();
    d.is_sick = true;
    d.hunger = 10;

    // Coin 0 -> eats; digestion draw 3 -> slot 6
    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([0, 3]));

    assert_eq!(event, Some(ActionEvent::Ate));
    assert_eq!(d.stomach[0], 6);
    assert_eq!(d.hunger, 6);
}

#[test]
fn test_unruly_demon_refuses_food_entirely() {
    let mut d = demon();
    d.discipline = -2;

    // Check draw 4 (unruly), coin 1 (refuse)
    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([4, 1]));

    assert_eq!(event, Some(ActionEvent::RefusedFoodUnruly));
    assert_eq!(d.hunger, 1);
    assert_eq!(d.foods_digesting(), 0);
}

#[test]
fn test_unruly_demon_overeats_three_units() {
    let mut d = demon();
    d.discipline = -2;

    // Check draw 4 (unruly), coin 0 (overeat), digestion draws 0, 1, 2
    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([4, 0, 0, 1, 2]));

    assert_eq!(event, Some(ActionEvent::Overate { eaten: 3 }));
    assert_eq!(d.stomach[0], 3);
    assert_eq!(d.stomach[1], 4);
    assert_eq!(d.stomach[2], 5);
    // Three units at -5 each, +1 action cost
    assert_eq!(d.hunger, -14);
    // Every unit was eaten with hunger <= 0
    assert_eq!(d.happiness, -9);
}

#[test]
fn test_overeating_stops_silently_when_the_stomach_fills() {
    let mut d = demon();
    d.discipline = -2;
    d.stomach = [3, 3, 3, 3, 0];

    let event = apply_action(&mut d, Action::Feed, &mut ScriptedRng::new([4, 0, 1]));

    assert_eq!(event, Some(ActionEvent::Overate { eaten: 1 }));
    assert_eq!(d.foods_digesting(), STOMACH_SIZE);
}

// ── Play ────────────────────────────────────────────────────────────

#[test]
fn test_playing_with_a_child_gives_full_happiness() {
    let mut d = demon();

    let event = apply_action(&mut d, Action::Play, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::Played));
    assert_eq!(d.happiness, 4);
    assert_eq!(d.hunger, 3);
}

#[test]
fn test_playing_with_an_adult_gives_half_happiness() {
    let mut d = demon();
    d.stage = LifeStage::Adult;

    // Check draw 7 -> not unruly (7 < 1 is false)
    apply_action(&mut d, Action::Play, &mut ScriptedRng::new([7]));

    assert_eq!(d.happiness, 2);
}

#[test]
fn test_unruly_demon_refuses_to_play_but_still_gets_hungry() {
    let mut d = demon();
    d.stage = LifeStage::Teen;

    // Check draw 1 -> unruly (1 < 2)
    let event = apply_action(&mut d, Action::Play, &mut ScriptedRng::new([1]));

    assert_eq!(event, Some(ActionEvent::RefusedPlay));
    assert_eq!(d.happiness, 0);
    assert_eq!(d.hunger, 3);
}

// ── Discipline ──────────────────────────────────────────────────────

#[test]
fn test_scolding_teaches_a_healthy_demon() {
    let mut d = demon();

    let event = apply_action(&mut d, Action::Discipline, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::Scolded { while_sick: false }));
    assert_eq!(d.happiness, -6);
    assert_eq!(d.discipline, 4);
    assert_eq!(d.hunger, 1);
}

#[test]
fn test_scolding_a_sick_demon_teaches_nothing() {
    let mut d = demon();
    d.is_sick = true;

    let event = apply_action(&mut d, Action::Discipline, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::Scolded { while_sick: true }));
    assert_eq!(d.happiness, -6);
    assert_eq!(d.discipline, 0);
}

// ── Medicine ────────────────────────────────────────────────────────

#[test]
fn test_medicine_cures_on_a_draw_below_six() {
    let mut d = demon();
    d.is_sick = true;

    let event = apply_action(&mut d, Action::Medicine, &mut ScriptedRng::new([5]));

    assert_eq!(event, Some(ActionEvent::Cured));
    assert!(!d.is_sick);
    assert_eq!(d.happiness, -4);
    assert_eq!(d.hunger, 1);
}

#[test]
fn test_medicine_fails_on_a_draw_of_six_or_seven() {
    for draw in [6, 7] {
        let mut d = demon();
        d.is_sick = true;

        let event = apply_action(&mut d, Action::Medicine, &mut ScriptedRng::new([draw]));

        assert_eq!(event, Some(ActionEvent::MedicineFailed));
        assert!(d.is_sick);
        assert_eq!(d.happiness, -4);
    }
}

// ── Clean ───────────────────────────────────────────────────────────

#[test]
fn test_cleaning_flushes_one_poop() {
    let mut d = demon();
    d.poop_count = 2;

    let event = apply_action(&mut d, Action::Clean, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::FlushedPoop));
    assert_eq!(d.poop_count, 1);
    assert_eq!(d.hunger, 1);
}

#[test]
fn test_cleaning_nothing_is_a_noop_besides_the_hunger_cost() {
    let mut d = demon();

    let event = apply_action(&mut d, Action::Clean, &mut ScriptedRng::new([]));

    assert_eq!(event, Some(ActionEvent::FlushedNothing));
    assert_eq!(d.poop_count, 0);
    assert_eq!(d.hunger, 1);
}

// ── Shared action contract ──────────────────────────────────────────

#[test]
fn test_dead_demons_reject_every_action() {
    for action in Action::ALL {
        let mut d = demon();
        d.health = 0;

        let event = apply_action(&mut d, action, &mut ScriptedRng::new([]));

        assert_eq!(event, None, "{:?} ran on a dead demon", action);
        assert_eq!(d.actions_taken, 0);
        assert_eq!(d.hunger, 0);
    }
}

#[test]
fn test_actions_taken_never_exceeds_the_cap() {
    let mut d = demon();
    d.actions_taken = MAX_ACTIONS_TAKEN - 1;

    apply_action(&mut d, Action::Clean, &mut ScriptedRng::new([]));
    assert_eq!(d.actions_taken, MAX_ACTIONS_TAKEN);

    apply_action(&mut d, Action::Clean, &mut ScriptedRng::new([]));
    assert_eq!(d.actions_taken, MAX_ACTIONS_TAKEN);
    assert_eq!(d.health, STARTING_HEALTH);
}
