// File:    machine.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Assembles plugboard, rotor stack and reflector into a machine and runs the substitution pipeline.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The assembled machine and its substitution pipeline.
//!
//! Every key press first steps the rotors and then sends the letter through
//! plugboard, rotors, reflector, rotors backwards and plugboard again. For a
//! fixed rotor state this is its own inverse, so the same operation both
//! enciphers and deciphers.

use crate::alphabet::{self, Code};
use crate::catalog;
use crate::error::{ConfigError, Error, Result};
use crate::permutation::Permutation;
use crate::rotor::RotorStack;
use log::debug;
use serde::Serialize;

/// Everything needed to set up a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineConfig {
    /// 1-based catalog identities of the rotors, rightmost (fastest) first.
    pub rotors: Vec<usize>,
    /// 1-based catalog identity of the reflector.
    pub reflector: usize,
    /// Plugboard wiring; must consist of swaps only.
    pub plugboard: Permutation,
    /// Start position letter of every rotor, in the same order as `rotors`.
    pub positions: String,
}

impl MachineConfig {
    /// Settings with the given rotors and reflector, no plugs, every rotor at `A`.
    #[must_use]
    pub fn new(rotors: Vec<usize>, reflector: usize) -> Self {
        let positions = "A".repeat(rotors.len());
        Self { rotors, reflector, plugboard: Permutation::identity(), positions }
    }

    /// Replaces the plugboard wiring.
    #[must_use]
    pub fn with_plugboard(mut self, plugboard: Permutation) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Replaces the start positions, e.g. `"QEV"`.
    #[must_use]
    pub fn with_positions(mut self, positions: impl Into<String>) -> Self {
        self.positions = positions.into();
        self
    }

    fn start_positions(&self) -> Result<Vec<Code>> {
        let positions = self
            .positions
            .chars()
            .map(|ch| alphabet::letter_code(ch).ok_or_else(|| ConfigError::InvalidPosition(ch.to_string())))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if positions.len() != self.rotors.len() {
            return Err(ConfigError::PositionCountMismatch {
                positions: positions.len(),
                rotors: self.rotors.len(),
            }
            .into());
        }
        Ok(positions)
    }
}

impl Default for MachineConfig {
    /// Rotors II, I, III with reflector UKW-B, no plugs, at `AAA`.
    fn default() -> Self {
        Self::new(vec![2, 1, 3], 1)
    }
}

/// A configured machine.
///
/// The rotor positions are the only state that changes; one machine must be
/// used for exactly one stream of text.
#[derive(Debug, Clone)]
pub struct Machine {
    stack: RotorStack,
    reflector: Permutation,
    plugboard: Permutation,
    start: Vec<Code>,
}

impl Machine {
    /// Configures a machine from `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a rotor or reflector identity is
    /// outside the catalog, the plugboard is not made of swaps, or the start
    /// positions do not fit the rotors.
    pub fn new(config: &MachineConfig) -> Result<Self> {
        if config.rotors.is_empty() {
            return Err(ConfigError::EmptyRotorStack.into());
        }
        let start = config.start_positions()?;
        let stack = RotorStack::configure_at(&config.rotors, &start)?;
        let reflector_spec = catalog::reflector(config.reflector)?;
        let reflector = Permutation::from_letters(reflector_spec.wiring)?;
        config.plugboard.ensure_involution()?;

        debug!(
            "Configured machine: rotors {:?}, reflector {}, {} plug pair(s), positions {}",
            config.rotors,
            reflector_spec.name,
            config.plugboard.pairs().len(),
            config.positions.to_ascii_uppercase()
        );

        Ok(Self {
            stack,
            reflector,
            plugboard: config.plugboard,
            start,
        })
    }

    /// Current rotor positions as letters, rightmost first.
    #[must_use]
    pub fn positions(&self) -> String {
        self.stack.positions().into_iter().map(|p| char::from(b'A' + p)).collect()
    }

    /// Turns the rotors back to their configured start positions.
    pub fn reset(&mut self) {
        self.stack.restore(&self.start);
    }

    /// Advances the rotors by one key press.
    pub fn step(&mut self) {
        self.stack.step();
    }

    /// Sends one letter through the pipeline at the current rotor state.
    ///
    /// Must be called after [`Machine::step`] for the same key press.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if `code` is outside the
    /// alphabet or a table turns out to be malformed.
    pub fn transform(&self, code: Code) -> Result<Code> {
        let mut code = lookup(&self.plugboard, code, "plugboard")?;
        for i in 0..self.stack.len() {
            code = self.stack.forward_lookup(i, code)?;
        }
        code = lookup(&self.reflector, code, "reflector")?;
        for i in (0..self.stack.len()).rev() {
            code = self.stack.inverse_lookup(i, code)?;
        }
        lookup(&self.plugboard, code, "plugboard")
    }

    /// Presses one key: steps the rotors, then transforms the letter.
    ///
    /// # Errors
    ///
    /// See [`Machine::transform`].
    pub fn press(&mut self, code: Code) -> Result<Code> {
        self.step();
        self.transform(code)
    }

    /// Enciphers or deciphers a sequence of codes, continuing from the
    /// current rotor state.
    ///
    /// # Errors
    ///
    /// See [`Machine::transform`].
    pub fn process(&mut self, codes: &[Code]) -> Result<Vec<Code>> {
        codes.iter().map(|&code| self.press(code)).collect()
    }

    /// Like [`Machine::process`], overwriting the input.
    ///
    /// # Errors
    ///
    /// See [`Machine::transform`].
    pub fn process_in_place(&mut self, codes: &mut [Code]) -> Result<()> {
        for code in codes {
            *code = self.press(*code)?;
        }
        Ok(())
    }

    /// Encodes `text`, runs it through the machine and decodes the result.
    ///
    /// # Errors
    ///
    /// See [`Machine::transform`].
    pub fn process_text(&mut self, text: &str) -> Result<String> {
        let mut codes = alphabet::encode(text);
        self.process_in_place(&mut codes)?;
        alphabet::decode(&codes)
    }
}

fn lookup(table: &Permutation, code: Code, stage: &str) -> Result<Code> {
    table
        .get(code)
        .ok_or_else(|| Error::InvariantViolation(format!("{stage} was fed code {code}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_reference_machine() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors, vec![2, 1, 3]);
        assert_eq!(config.reflector, 1);
        assert_eq!(config.positions, "AAA");
        assert_eq!(config.plugboard, Permutation::identity());
    }

    #[test]
    fn reset_restores_start_positions() {
        let mut machine = Machine::new(&MachineConfig::default().with_positions("QEV")).unwrap();
        machine.process(&[0; 40]).unwrap();
        assert_ne!(machine.positions(), "QEV");
        machine.reset();
        assert_eq!(machine.positions(), "QEV");
    }

    #[test]
    fn transform_rejects_out_of_range_code() {
        let machine = Machine::new(&MachineConfig::default()).unwrap();
        assert!(machine.transform(26).unwrap_err().is_invariant_violation());
    }
}
