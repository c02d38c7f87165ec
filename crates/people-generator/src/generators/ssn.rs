//! Synthetic social security numbers.
//!
//! Area numbers are drawn from ranges the SSA never assigns (900-999 and
//! 666), so generated values cannot collide with a real number.

use rand::Rng;

/// First never-assigned area number in the 900 block.
const AREA_BLOCK_START: u16 = 900;
/// Number of area values in the 900 block.
const AREA_BLOCK_LEN: u16 = 100;
/// The lone never-assigned area outside the 900 block.
const AREA_666: u16 = 666;

/// Generate an `AREA-GROUP-SERIAL` string.
pub fn generate_ssn<R: Rng>(rng: &mut R) -> String {
    let area = generate_area(rng);
    let group = rng.gen_range(10..=99u16);
    let serial = rng.gen_range(1000..=9999u16);
    format!("{area}-{group}-{serial}")
}

/// Uniform over 900..=999 plus 666.
fn generate_area<R: Rng>(rng: &mut R) -> u16 {
    let slot = rng.gen_range(0..=AREA_BLOCK_LEN);
    if slot == AREA_BLOCK_LEN {
        AREA_666
    } else {
        AREA_BLOCK_START + slot
    }
}
