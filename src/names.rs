//! Cosmetic demon name generation.
//!
//! Names are concatenated from syllable tables using the injected draw
//! source, so a seeded simulation names its demons reproducibly.

use crate::core::constants::NAME_MAX_LENGTH;
use crate::rng::DrawRng;

const FIRST_SYLLABLES: [&str; 12] = [
    "Az", "Bel", "Gor", "Kra", "Mal", "Mor", "Naz", "Thu", "Ulg", "Vex", "Xag", "Zar",
];

const MIDDLE_SYLLABLES: [&str; 8] = ["do", "ga", "ke", "lo", "mu", "ne", "ra", "zi"];

const LAST_SYLLABLES: [&str; 8] = [
    "bub", "gon", "loth", "mon", "noth", "rax", "thos", "zor",
];

/// Generates a demon name of two or three syllables, capped at
/// [`NAME_MAX_LENGTH`] characters.
pub fn generate_name(rng: &mut impl DrawRng) -> String {
    let mut name = String::new();
    name.push_str(pick(&FIRST_SYLLABLES, rng));
    if rng.draw_below(2) == 1 {
        name.push_str(pick(&MIDDLE_SYLLABLES, rng));
    }
    name.push_str(pick(&LAST_SYLLABLES, rng));
    name.truncate(NAME_MAX_LENGTH);
    name
}

fn pick<'a>(table: &'a [&'a str], rng: &mut impl DrawRng) -> &'a str {
    table[rng.draw_below(table.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_are_nonempty_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let name = generate_name(&mut rng);
            assert!(!name.is_empty());
            assert!(name.len() <= NAME_MAX_LENGTH);
        }
    }

    #[test]
    fn test_two_syllable_name_from_script() {
        // first syllable 0 ("Az"), no middle, last syllable 1 ("gon")
        let mut rng = ScriptedRng::new([0, 0, 1]);
        assert_eq!(generate_name(&mut rng), "Azgon");
    }

    #[test]
    fn test_three_syllable_name_from_script() {
        // first 4 ("Mal"), middle chosen (1), middle 2 ("ke"), last 5 ("rax")
        let mut rng = ScriptedRng::new([4, 1, 2, 5]);
        assert_eq!(generate_name(&mut rng), "Malkerax");
    }
}
