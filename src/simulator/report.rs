//! Simulation report generation.

use super::runner::LifeStats;
use crate::core::demon::LifeStage;

/// Aggregated results from multiple simulated lives.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_lives: u32,
    /// Lives that ended in death.
    pub lives_completed: u32,
    /// Lives that hit the tick cutoff still alive.
    pub lives_cut_off: u32,

    // Life length
    pub mean_ticks: f64,
    pub std_ticks: f64,
    pub mean_actions: f64,
    pub std_actions: f64,

    // Final stat distributions
    pub mean_hunger: f64,
    pub std_hunger: f64,
    pub mean_happiness: f64,
    pub std_happiness: f64,
    pub mean_discipline: f64,
    pub std_discipline: f64,
    pub mean_health: f64,
    pub std_health: f64,
    pub mean_poop_count: f64,
    pub std_poop_count: f64,

    // Final life stage counts
    pub ended_as_child: u32,
    pub ended_as_teen: u32,
    pub ended_as_adult: u32,
    pub sick_at_end: u32,

    // Applied status events per thousand ticks, across all lives
    pub random_sickness_rate: f64,
    pub poop_sickness_rate: f64,
    pub obesity_sickness_rate: f64,
    pub malnourishment_sickness_rate: f64,
    pub poop_rate: f64,
    pub discipline_loss_rate: f64,

    /// Individual life stats for detailed analysis.
    pub lives: Vec<LifeStats>,
}

impl SimReport {
    /// Create a new report from completed life stats.
    pub fn from_lives(lives: Vec<LifeStats>) -> Self {
        let num_lives = lives.len() as u32;
        let lives_completed = lives.iter().filter(|l| l.died).count() as u32;
        let lives_cut_off = num_lives - lives_completed;

        let (mean_ticks, std_ticks) = mean_and_std_dev(lives.iter().map(|l| l.total_ticks as f64));
        let (mean_actions, std_actions) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.actions_taken as f64));
        let (mean_hunger, std_hunger) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.hunger as f64));
        let (mean_happiness, std_happiness) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.happiness as f64));
        let (mean_discipline, std_discipline) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.discipline as f64));
        let (mean_health, std_health) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.health as f64));
        let (mean_poop_count, std_poop_count) =
            mean_and_std_dev(lives.iter().map(|l| l.snapshot.poop_count as f64));

        let ended_as_child = stage_count(&lives, LifeStage::Child);
        let ended_as_teen = stage_count(&lives, LifeStage::Teen);
        let ended_as_adult = stage_count(&lives, LifeStage::Adult);
        let sick_at_end = lives.iter().filter(|l| l.snapshot.was_sick).count() as u32;

        let total_ticks: u64 = lives.iter().map(|l| l.total_ticks).sum();
        let rate = |count: u64| {
            if total_ticks == 0 {
                0.0
            } else {
                count as f64 * 1000.0 / total_ticks as f64
            }
        };

        let random_sickness_rate = rate(lives.iter().map(|l| l.random_sickness).sum());
        let poop_sickness_rate = rate(lives.iter().map(|l| l.poop_sickness).sum());
        let obesity_sickness_rate = rate(lives.iter().map(|l| l.obesity_sickness).sum());
        let malnourishment_sickness_rate =
            rate(lives.iter().map(|l| l.malnourishment_sickness).sum());
        let poop_rate = rate(lives.iter().map(|l| l.poops).sum());
        let discipline_loss_rate = rate(lives.iter().map(|l| l.discipline_losses).sum());

        Self {
            num_lives,
            lives_completed,
            lives_cut_off,
            mean_ticks,
            std_ticks,
            mean_actions,
            std_actions,
            mean_hunger,
            std_hunger,
            mean_happiness,
            std_happiness,
            mean_discipline,
            std_discipline,
            mean_health,
            std_health,
            mean_poop_count,
            std_poop_count,
            ended_as_child,
            ended_as_teen,
            ended_as_adult,
            sick_at_end,
            random_sickness_rate,
            poop_sickness_rate,
            obesity_sickness_rate,
            malnourishment_sickness_rate,
            poop_rate,
            discipline_loss_rate,
            lives,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("  SIMULATION RESULTS\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Lives simulated:  {}\n", self.num_lives));
        report.push_str(&format!(
            "  Died / cut off:   {} / {}\n\n",
            self.lives_completed, self.lives_cut_off
        ));

        report.push_str("  Life length (mean ± std dev)\n");
        report.push_str(&format!(
            "    Ticks:          {:>10.1} ± {:.1}\n",
            self.mean_ticks, self.std_ticks
        ));
        report.push_str(&format!(
            "    Actions:        {:>10.1} ± {:.1}\n\n",
            self.mean_actions, self.std_actions
        ));

        report.push_str("  Final stats (mean ± std dev)\n");
        report.push_str(&format!(
            "    Hunger:         {:>10.1} ± {:.1}\n",
            self.mean_hunger, self.std_hunger
        ));
        report.push_str(&format!(
            "    Happiness:      {:>10.1} ± {:.1}\n",
            self.mean_happiness, self.std_happiness
        ));
        report.push_str(&format!(
            "    Discipline:     {:>10.1} ± {:.1}\n",
            self.mean_discipline, self.std_discipline
        ));
        report.push_str(&format!(
            "    Health:         {:>10.1} ± {:.1}\n",
            self.mean_health, self.std_health
        ));
        report.push_str(&format!(
            "    Poop count:     {:>10.1} ± {:.1}\n\n",
            self.mean_poop_count, self.std_poop_count
        ));

        report.push_str("  Final life stage\n");
        report.push_str(&format!(
            "    Child / Teen / Adult:  {} / {} / {}\n",
            self.ended_as_child, self.ended_as_teen, self.ended_as_adult
        ));
        report.push_str(&format!("    Sick at the end:       {}\n\n", self.sick_at_end));

        report.push_str("  Status events applied (per 1000 ticks)\n");
        report.push_str(&format!(
            "    Random sickness:        {:>8.2}\n",
            self.random_sickness_rate
        ));
        report.push_str(&format!(
            "    Poop sickness:          {:>8.2}\n",
            self.poop_sickness_rate
        ));
        report.push_str(&format!(
            "    Obesity sickness:       {:>8.2}\n",
            self.obesity_sickness_rate
        ));
        report.push_str(&format!(
            "    Malnourish sickness:    {:>8.2}\n",
            self.malnourishment_sickness_rate
        ));
        report.push_str(&format!(
            "    Poops:                  {:>8.2}\n",
            self.poop_rate
        ));
        report.push_str(&format!(
            "    Discipline losses:      {:>8.2}\n",
            self.discipline_loss_rate
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn stage_count(lives: &[LifeStats], stage: LifeStage) -> u32 {
    lives.iter().filter(|l| l.snapshot.stage == stage).count() as u32
}

/// Mean and population standard deviation; (0, 0) for an empty series.
fn mean_and_std_dev(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let n = values.clone().count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    let variance = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    (mean, variance.sqrt())
}

// Implement Serialize for JSON output; per-life detail stays out of it.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 27)?;
        state.serialize_field("num_lives", &self.num_lives)?;
        state.serialize_field("lives_completed", &self.lives_completed)?;
        state.serialize_field("lives_cut_off", &self.lives_cut_off)?;
        state.serialize_field("mean_ticks", &self.mean_ticks)?;
        state.serialize_field("std_ticks", &self.std_ticks)?;
        state.serialize_field("mean_actions", &self.mean_actions)?;
        state.serialize_field("std_actions", &self.std_actions)?;
        state.serialize_field("mean_hunger", &self.mean_hunger)?;
        state.serialize_field("std_hunger", &self.std_hunger)?;
        state.serialize_field("mean_happiness", &self.mean_happiness)?;
        state.serialize_field("std_happiness", &self.std_happiness)?;
        state.serialize_field("mean_discipline", &self.mean_discipline)?;
        state.serialize_field("std_discipline", &self.std_discipline)?;
        state.serialize_field("mean_health", &self.mean_health)?;
        state.serialize_field("std_health", &self.std_health)?;
        state.serialize_field("mean_poop_count", &self.mean_poop_count)?;
        state.serialize_field("std_poop_count", &self.std_poop_count)?;
        state.serialize_field("ended_as_child", &self.ended_as_child)?;
        state.serialize_field("ended_as_teen", &self.ended_as_teen)?;
        state.serialize_field("ended_as_adult", &self.ended_as_adult)?;
        state.serialize_field("sick_at_end", &self.sick_at_end)?;
        state.serialize_field("random_sickness_rate", &self.random_sickness_rate)?;
        state.serialize_field("poop_sickness_rate", &self.poop_sickness_rate)?;
        state.serialize_field("obesity_sickness_rate", &self.obesity_sickness_rate)?;
        state.serialize_field(
            "malnourishment_sickness_rate",
            &self.malnourishment_sickness_rate,
        )?;
        state.serialize_field("poop_rate", &self.poop_rate)?;
        state.serialize_field("discipline_loss_rate", &self.discipline_loss_rate)?;
        state.end()
    }
}
