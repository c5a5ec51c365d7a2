// File:    key_generator.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Draws random machine settings: rotor choice and order, reflector, start positions and plugs.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{ALPHABET_SIZE, Code, MODULUS};
use crate::catalog::{REFLECTORS, ROTORS};
use crate::error::{ConfigError, Result};
use crate::machine::MachineConfig;
use crate::permutation::Permutation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Largest number of plug pairs the alphabet can hold.
pub const MAX_PLUG_PAIRS: usize = ALPHABET_SIZE / 2;

/// Generates random settings with `rotor_count` distinct rotors and
/// `plug_pairs` plugboard cables.
///
/// With a `seed` the result is reproducible; without one the generator is
/// seeded from the operating system.
///
/// # Errors
///
/// Returns a configuration error if the catalog cannot supply `rotor_count`
/// distinct rotors or more than [`MAX_PLUG_PAIRS`] pairs are requested.
pub fn generate_config(rotor_count: usize, plug_pairs: usize, seed: Option<u64>) -> Result<MachineConfig> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    generate_config_with(&mut rng, rotor_count, plug_pairs)
}

/// Like [`generate_config`], drawing from the given random number generator.
///
/// # Errors
///
/// See [`generate_config`].
pub fn generate_config_with<R: Rng>(
    rng: &mut R,
    rotor_count: usize,
    plug_pairs: usize,
) -> Result<MachineConfig> {
    if rotor_count == 0 {
        return Err(ConfigError::EmptyRotorStack.into());
    }
    if rotor_count > ROTORS.len() {
        return Err(ConfigError::RotorCountOutOfRange {
            requested: rotor_count,
            available: ROTORS.len(),
        }
        .into());
    }
    if plug_pairs > MAX_PLUG_PAIRS {
        return Err(ConfigError::TooManyPlugs { requested: plug_pairs, max: MAX_PLUG_PAIRS }.into());
    }

    let mut rotors: Vec<usize> = (1..=ROTORS.len()).collect();
    rotors.shuffle(rng);
    rotors.truncate(rotor_count);

    let reflector = rng.random_range(1..=REFLECTORS.len());

    let positions: String = (0..rotor_count)
        .map(|_| char::from(b'A' + rng.random_range(0..MODULUS)))
        .collect();

    let mut letters: Vec<Code> = (0..MODULUS).collect();
    letters.shuffle(rng);
    let pairs = letters
        .chunks_exact(2)
        .take(plug_pairs)
        .map(|pair| format!("{}{}", char::from(b'A' + pair[0]), char::from(b'A' + pair[1])))
        .collect::<Vec<_>>()
        .join(" ");
    let plugboard = Permutation::from_pairs(&pairs)?;

    Ok(MachineConfig::new(rotors, reflector)
        .with_plugboard(plugboard)
        .with_positions(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honours_requested_sizes() {
        let config = generate_config(4, 7, Some(1)).unwrap();
        assert_eq!(config.rotors.len(), 4);
        assert_eq!(config.positions.len(), 4);
        assert_eq!(config.plugboard.pairs().len(), 7);
    }
}
