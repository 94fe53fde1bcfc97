//! Main simulation runner.
//!
//! Each life gets its own seeded RNG stream and a fresh demon; statistics
//! are accumulated externally from the events the engine reports, so the
//! engine itself stays free of bookkeeping.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::caretaker::choose_action;
use super::config::SimConfig;
use super::report::SimReport;
use crate::core::core_game::DemonGame;
use crate::core::demon::DemonSnapshot;
use crate::core::tick::{SickCause, TickEvent};

/// Everything recorded about one simulated life.
#[derive(Debug, Clone)]
pub struct LifeStats {
    /// Final stats at death (or at cutoff).
    pub snapshot: DemonSnapshot,
    pub total_ticks: u64,
    /// False when the life hit the tick cutoff instead of dying.
    pub died: bool,

    // Applied status events, counted as they land
    pub random_sickness: u64,
    pub poop_sickness: u64,
    pub obesity_sickness: u64,
    pub malnourishment_sickness: u64,
    pub poops: u64,
    pub discipline_losses: u64,
}

impl LifeStats {
    fn record(&mut self, event: &TickEvent) {
        match event {
            TickEvent::FellSick {
                cause: SickCause::Random,
            } => self.random_sickness += 1,
            TickEvent::FellSick {
                cause: SickCause::Poop,
            } => self.poop_sickness += 1,
            TickEvent::FellSick {
                cause: SickCause::Obesity,
            } => self.obesity_sickness += 1,
            TickEvent::FellSick {
                cause: SickCause::Malnourishment,
            } => self.malnourishment_sickness += 1,
            TickEvent::Pooped => self.poops += 1,
            TickEvent::LostDiscipline { .. } => self.discipline_losses += 1,
            _ => {}
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_lives = Vec::with_capacity(config.num_lives as usize);

    for life_idx in 0..config.num_lives {
        // Each life gets its own RNG stream
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + life_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let life = simulate_single_life(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Life {}/{} - {} ticks, {} actions, died {} as {}, {} poops",
                life_idx + 1,
                config.num_lives,
                life.total_ticks,
                life.snapshot.actions_taken,
                if life.died { "yes" } else { "no (cutoff)" },
                life.snapshot.stage.label(),
                life.poops,
            );
        }

        all_lives.push(life);
    }

    SimReport::from_lives(all_lives)
}

/// Runs one life start to finish under the automated caretaker.
fn simulate_single_life(config: &SimConfig, rng: &mut ChaCha8Rng) -> LifeStats {
    let mut game = DemonGame::new(rng);
    let mut stats = LifeStats {
        snapshot: game.demon().snapshot(),
        total_ticks: 0,
        died: false,
        random_sickness: 0,
        poop_sickness: 0,
        obesity_sickness: 0,
        malnourishment_sickness: 0,
        poops: 0,
        discipline_losses: 0,
    };

    while !game.is_dead() && stats.total_ticks < config.max_ticks_per_life {
        let action = choose_action(game.demon());
        let _ = game.take_action(action, rng);
        let result = game.tick(rng);
        for event in &result.events {
            stats.record(event);
        }
        stats.total_ticks += 1;
    }

    stats.died = game.is_dead();
    stats.snapshot = game.demon().snapshot();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig {
            num_lives: 3,
            seed: Some(42),
            max_ticks_per_life: 5_000,
            verbosity: 0,
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.num_lives, b.num_lives);
        assert_eq!(a.mean_ticks, b.mean_ticks);
        assert_eq!(a.mean_actions, b.mean_actions);
    }

    #[test]
    fn test_every_life_is_recorded() {
        let config = SimConfig {
            num_lives: 5,
            seed: Some(7),
            max_ticks_per_life: 5_000,
            verbosity: 0,
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_lives, 5);
        assert_eq!(report.lives.len(), 5);
        assert_eq!(report.lives_completed + report.lives_cut_off, 5);
    }
}
