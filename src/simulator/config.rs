//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of complete lives to simulate
    pub num_lives: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks per life before the run is cut off
    pub max_ticks_per_life: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-life detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_lives: 1000,
            seed: None,
            max_ticks_per_life: 100_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a smoke run.
    pub fn smoke_test() -> Self {
        Self {
            num_lives: 10,
            seed: Some(0),
            max_ticks_per_life: 10_000,
            verbosity: 0,
        }
    }
}
