// File:    rotor.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Rotor instances and the stack that steps them like a gear train.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The rotor stack: the only part of the machine that changes while it runs.
//!
//! A rotor that has turned `k` times behaves as if its wiring table had been
//! rotated left `k` times, i.e. entry `i` of the current table is entry
//! `(i + k) mod 26` of the base wiring. The base wiring is never touched;
//! only the offset moves.

use crate::alphabet::{Code, MODULUS};
use crate::catalog::{self, RotorSpec};
use crate::error::{ConfigError, Error, Result};
use crate::permutation::Permutation;
use log::debug;

/// A rotor fitted in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: &'static str,
    wiring: Permutation,
    turnover: Code,
    offset: Code,
}

impl Rotor {
    /// Fits the catalog rotor `spec`, already turned `position` times.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the catalog entry is malformed or
    /// `position` is not a letter code.
    pub fn from_spec(spec: &'static RotorSpec, position: Code) -> Result<Self> {
        let wiring = Permutation::from_letters(spec.wiring)?;
        let turnover = crate::alphabet::letter_code(spec.turnover).ok_or_else(|| {
            ConfigError::InvalidWiring {
                wiring: spec.wiring.to_owned(),
                reason: format!("turnover '{}' is not a letter", spec.turnover),
            }
        })?;
        if position >= MODULUS {
            return Err(ConfigError::InvalidPosition(position.to_string()).into());
        }
        Ok(Self { name: spec.name, wiring, turnover, offset: position })
    }

    /// Catalog name of the rotor.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// How far the rotor has turned from its unrotated state.
    #[must_use]
    pub const fn position(&self) -> Code {
        self.offset
    }

    /// Turns the rotor by one position.
    pub const fn advance(&mut self) {
        self.offset = (self.offset + 1) % MODULUS;
    }

    /// `true` while the first entry of the current table is the turnover letter.
    #[must_use]
    pub const fn at_turnover(&self) -> bool {
        self.entry(0) == self.turnover
    }

    /// Entry `index` of the current (rotated) table. `index` must be a valid code.
    const fn entry(&self, index: Code) -> Code {
        self.wiring.as_array()[((index + self.offset) % MODULUS) as usize]
    }

    /// The value at position `code` of the current table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if `code` is outside the alphabet.
    pub fn forward(&self, code: Code) -> Result<Code> {
        if code < MODULUS {
            Ok(self.entry(code))
        } else {
            Err(Error::InvariantViolation(format!(
                "rotor {} was fed code {code}",
                self.name
            )))
        }
    }

    /// The position of the current table that holds `code`, found by a linear scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if no position holds `code`,
    /// which only a malformed wiring can cause.
    pub fn inverse(&self, code: Code) -> Result<Code> {
        // Position in the base wiring, shifted back by the rotation.
        self.wiring
            .position_of(code)
            .map(|base| (base + MODULUS - self.offset) % MODULUS)
            .ok_or_else(|| {
                Error::InvariantViolation(format!(
                    "rotor {} has no entry holding code {code}",
                    self.name
                ))
            })
    }
}

/// The ordered rotors of a machine. Index 0 is the rightmost, fastest rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorStack {
    rotors: Vec<Rotor>,
}

impl RotorStack {
    /// Fits the rotors named by `identities` (1-based catalog numbers,
    /// rightmost first), all unrotated.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no rotor is named or an identity is
    /// outside the catalog.
    pub fn configure(identities: &[usize]) -> Result<Self> {
        Self::configure_at(identities, &vec![0; identities.len()])
    }

    /// Like [`RotorStack::configure`], with rotor `i` turned `positions[i]` times.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no rotor is named, an identity is
    /// outside the catalog, or the positions do not match the rotors.
    pub fn configure_at(identities: &[usize], positions: &[Code]) -> Result<Self> {
        if identities.is_empty() {
            return Err(ConfigError::EmptyRotorStack.into());
        }
        if identities.len() != positions.len() {
            return Err(ConfigError::PositionCountMismatch {
                positions: positions.len(),
                rotors: identities.len(),
            }
            .into());
        }

        let rotors = identities
            .iter()
            .zip(positions)
            .map(|(&id, &position)| Rotor::from_spec(catalog::rotor(id)?, position))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Configured rotor stack {:?} (right to left)",
            rotors.iter().map(Rotor::name).collect::<Vec<_>>()
        );
        Ok(Self { rotors })
    }

    /// Turns every rotor back to the given positions.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the positions do not match the rotors.
    pub fn set_positions(&mut self, positions: &[Code]) -> Result<()> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigError::PositionCountMismatch {
                positions: positions.len(),
                rotors: self.rotors.len(),
            }
            .into());
        }
        if let Some(&bad) = positions.iter().find(|&&p| p >= MODULUS) {
            return Err(ConfigError::InvalidPosition(bad.to_string()).into());
        }
        self.restore(positions);
        Ok(())
    }

    /// Sets positions already known to fit the stack.
    pub(crate) fn restore(&mut self, positions: &[Code]) {
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.offset = position % MODULUS;
        }
    }

    /// Advances the mechanism by one key press.
    ///
    /// The rightmost rotor always turns. Then, from right to left, a rotor
    /// whose first entry is its turnover letter turns its left neighbour.
    pub fn step(&mut self) {
        let Some(first) = self.rotors.first_mut() else {
            return;
        };
        first.advance();
        for i in 1..self.rotors.len() {
            if self.rotors[i - 1].at_turnover() {
                self.rotors[i].advance();
            }
        }
    }

    /// Number of rotors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// `true` if the stack holds no rotor; never the case once configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Current position of every rotor, rightmost first.
    #[must_use]
    pub fn positions(&self) -> Vec<Code> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Passes `code` through rotor `index` on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] for a bad rotor index or code.
    pub fn forward_lookup(&self, index: usize, code: Code) -> Result<Code> {
        self.rotor(index)?.forward(code)
    }

    /// Passes `code` back through rotor `index` after the reflector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] for a bad rotor index or if the
    /// rotor has no entry holding `code`.
    pub fn inverse_lookup(&self, index: usize, code: Code) -> Result<Code> {
        self.rotor(index)?.inverse(code)
    }

    fn rotor(&self, index: usize) -> Result<&Rotor> {
        self.rotors.get(index).ok_or_else(|| {
            Error::InvariantViolation(format!(
                "rotor index {index} out of range for a {}-rotor stack",
                self.rotors.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_rotates_the_table_left() {
        let mut rotor = Rotor::from_spec(&catalog::ROTORS[0], 0).unwrap();
        // I = EKMF...
        assert_eq!(rotor.forward(0).unwrap(), 4);
        rotor.advance();
        assert_eq!(rotor.forward(0).unwrap(), 10);
        assert_eq!(rotor.forward(25).unwrap(), 4);
    }

    #[test]
    fn inverse_undoes_forward_at_every_position() {
        let mut rotor = Rotor::from_spec(&catalog::ROTORS[3], 0).unwrap();
        for _ in 0..MODULUS {
            for code in 0..MODULUS {
                assert_eq!(rotor.inverse(rotor.forward(code).unwrap()).unwrap(), code);
            }
            rotor.advance();
        }
    }

    #[test]
    fn position_wraps_after_a_full_turn() {
        let mut rotor = Rotor::from_spec(&catalog::ROTORS[1], 25).unwrap();
        rotor.advance();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn forward_rejects_out_of_range_code() {
        let rotor = Rotor::from_spec(&catalog::ROTORS[0], 0).unwrap();
        assert!(rotor.forward(MODULUS).unwrap_err().is_invariant_violation());
    }

    #[test]
    fn lookup_rejects_missing_rotor() {
        let stack = RotorStack::configure(&[1, 2]).unwrap();
        assert!(stack.forward_lookup(2, 0).unwrap_err().is_invariant_violation());
        assert!(stack.inverse_lookup(7, 0).unwrap_err().is_invariant_violation());
    }
}
