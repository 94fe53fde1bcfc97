// Creature lifecycle
pub const STARTING_HEALTH: i32 = 50;
pub const STOMACH_SIZE: usize = 5;
pub const MAX_ACTIONS_TAKEN: i32 = i16::MAX as i32;

// Age transitions, measured in actions taken
pub const TEEN_ACTIONS_TAKEN: i32 = 33;
pub const ADULT_ACTIONS_TAKEN: i32 = 66;

// Every action modifies hunger somehow
pub const FEED_HUNGER_COST: i32 = 1;
pub const PLAY_HUNGER_COST: i32 = 3;
pub const SCOLD_HUNGER_COST: i32 = 1;
pub const MEDICINE_HUNGER_COST: i32 = 1;
pub const FLUSH_HUNGER_COST: i32 = 1;

// Eating and digestion
pub const HUNGER_RESTORED_PER_FOOD: i32 = 5;
pub const HAPPINESS_GAINED_EATING_HUNGRY: i32 = 1;
pub const HAPPINESS_LOST_EATING_FULL: i32 = 3;
pub const DIGESTION_MIN_TICKS: i32 = 3;
pub const DIGESTION_TICK_SPAN: u32 = 4; // digest time is 3 + draw(0..4) ticks
pub const OVEREAT_ATTEMPTS: u32 = 3;

// Playing makes the demon happy, less so once grown up (halved for adults)
pub const HAPPINESS_GAINED_PER_PLAY: i32 = 4;

// Scolding decreases happiness, increases discipline
pub const HAPPINESS_LOST_PER_SCOLDING: i32 = 6;
pub const DISCIPLINE_GAINED_PER_SCOLDING: i32 = 4;

// Medicine works 6 times in 8, and is always unpleasant
pub const MEDICINE_DRAW_SPAN: u32 = 8;
pub const MEDICINE_CURE_THRESHOLD: u32 = 6;
pub const HAPPINESS_LOST_PER_MEDICINE: i32 = 4;

// Sickness
pub const HEALTH_LOST_PER_SICKNESS: i32 = 1;
pub const RANDOM_SICKNESS_DRAW_SPAN: u32 = 12; // 1/12 chance per tick

// Standing poop: sickness odds scale with the pile, sadness does not
pub const POOP_SICKNESS_DRAW_SPAN: u32 = 4;
pub const POOP_SICKNESS_BASE: i32 = 3; // sick when draw(0..4) > 3 - poopCount
pub const HAPPINESS_LOST_PER_STANDING_POOP: i32 = 5;

// Weight: too full (obese) or too hungry (malnourished)
pub const OBESE_THRESHOLD: i32 = -20;
pub const MALNOURISHED_THRESHOLD: i32 = 20;
pub const WEIGHT_SICKNESS_DRAW_SPAN: u32 = 8;
pub const WEIGHT_SICKNESS_THRESHOLD: u32 = 5; // sick when draw(0..8) >= 5
pub const HEALTH_LOST_PER_WEIGHT: i32 = 2;

// Discipline drift: rare while content, common while unhappy
pub const CONTENT_DRIFT_DRAW_SPAN: u32 = 16; // 1/16 chance when happiness > 0
pub const UNHAPPY_DRIFT_DRAW_SPAN: u32 = 4; // draw(0..4) < 1 - happiness otherwise
pub const DISCIPLINE_LOST_TEEN: i32 = 6;
pub const DISCIPLINE_LOST_ADULT: i32 = 2;

// Discipline check draw spans and thresholds (out of 8)
pub const UNRULY_DRAW_SPAN: u32 = 8;
pub const UNRULY_TEEN_THRESHOLD: u32 = 2;
pub const UNRULY_ADULT_THRESHOLD: u32 = 1;

// Names
pub const NAME_MAX_LENGTH: usize = 16;

// Event log shown in the TUI
pub const EVENT_LOG_CAPACITY: usize = 100;
