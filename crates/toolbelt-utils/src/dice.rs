//! Dice

use rand::Rng;

/// Roll a six-sided die.
pub fn dice_roll<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}
