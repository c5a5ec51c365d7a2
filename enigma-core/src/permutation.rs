// File:    permutation.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: A validated bijection on the alphabet, used for rotor, reflector and plugboard wiring.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Wiring tables.

use crate::alphabet::{self, ALPHABET_SIZE, Code};
use crate::error::{ConfigError, Result};
use std::fmt;

/// A permutation of the alphabet: every code appears exactly once.
///
/// The only way to obtain one is through a validating constructor, so every
/// lookup in a `Permutation` has an answer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([Code; ALPHABET_SIZE]);

impl Permutation {
    /// The wiring that leaves every letter alone.
    #[must_use]
    pub fn identity() -> Self {
        let mut table = [0; ALPHABET_SIZE];
        for (code, slot) in (0..).zip(table.iter_mut()) {
            *slot = code;
        }
        Self(table)
    }

    /// Builds a table from its 26-letter notation, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// Letter `i` of the string is the image of code `i`. Case is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWiring`] if the string is not a
    /// rearrangement of the 26 letters.
    pub fn from_letters(wiring: &str) -> Result<Self> {
        let invalid = |reason: String| ConfigError::InvalidWiring {
            wiring: wiring.to_owned(),
            reason,
        };

        let count = wiring.chars().count();
        if count != ALPHABET_SIZE {
            return Err(invalid(format!("expected {ALPHABET_SIZE} letters, got {count}")).into());
        }

        let mut table = [0; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];
        for (slot, ch) in table.iter_mut().zip(wiring.chars()) {
            let code = alphabet::letter_code(ch)
                .ok_or_else(|| invalid(format!("'{ch}' is not a letter")))?;
            if seen[usize::from(code)] {
                return Err(invalid(format!("'{}' appears twice", ch.to_ascii_uppercase())).into());
            }
            seen[usize::from(code)] = true;
            *slot = code;
        }
        Ok(Self(table))
    }

    /// Builds a self-inverse table from swapped pairs, e.g. `"AB CD EF"`.
    ///
    /// Pairs are separated by whitespace or commas; unmentioned letters map
    /// to themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlugPair`] for a pair that is not two
    /// distinct letters and [`ConfigError::DuplicatePlug`] when a letter is
    /// used twice.
    pub fn from_pairs(pairs: &str) -> Result<Self> {
        let mut table = Self::identity().0;
        let mut plugged = [false; ALPHABET_SIZE];

        for pair in pairs
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
        {
            let codes: Vec<Option<Code>> = pair.chars().map(alphabet::letter_code).collect();
            let (a, b) = match codes.as_slice() {
                [Some(a), Some(b)] if a != b => (*a, *b),
                _ => return Err(ConfigError::InvalidPlugPair(pair.to_owned()).into()),
            };
            for code in [a, b] {
                if plugged[usize::from(code)] {
                    return Err(ConfigError::DuplicatePlug(letter(code)).into());
                }
                plugged[usize::from(code)] = true;
            }
            table[usize::from(a)] = b;
            table[usize::from(b)] = a;
        }
        Ok(Self(table))
    }

    /// Image of `code`, or `None` when `code` is outside the alphabet.
    #[must_use]
    pub fn get(&self, code: Code) -> Option<Code> {
        self.0.get(usize::from(code)).copied()
    }

    /// The position holding `code`, found by scanning the table.
    #[must_use]
    pub fn position_of(&self, code: Code) -> Option<Code> {
        (0..).zip(self.0).find_map(|(pos, value)| (value == code).then_some(pos))
    }

    /// The raw table.
    #[must_use]
    pub const fn as_array(&self) -> &[Code; ALPHABET_SIZE] {
        &self.0
    }

    /// `true` if applying the table twice gives the identity.
    #[must_use]
    pub fn is_involution(&self) -> bool {
        self.first_non_involutory().is_none()
    }

    /// `true` if some letter maps to itself.
    #[must_use]
    pub fn has_fixed_point(&self) -> bool {
        (0..).zip(self.0).any(|(code, image): (Code, Code)| code == image)
    }

    /// Rejects tables that are not made purely of swaps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlugboardNotInvolutory`] naming the first letter
    /// whose image does not map back to it.
    pub fn ensure_involution(&self) -> Result<()> {
        match self.first_non_involutory() {
            None => Ok(()),
            Some(code) => {
                let image = self.0[usize::from(code)];
                let back = self.0[usize::from(image)];
                Err(ConfigError::PlugboardNotInvolutory {
                    letter: letter(code),
                    image: letter(image),
                    back: letter(back),
                }
                .into())
            }
        }
    }

    /// The swapped pairs of the table, each listed once with the smaller letter first.
    #[must_use]
    pub fn pairs(&self) -> Vec<(char, char)> {
        (0..)
            .zip(self.0)
            .filter(|&(code, image): &(Code, Code)| code < image && self.0[usize::from(image)] == code)
            .map(|(code, image)| (letter(code), letter(image)))
            .collect()
    }

    fn first_non_involutory(&self) -> Option<Code> {
        (0..)
            .zip(self.0)
            .find_map(|(code, image): (Code, Code)| (self.0[usize::from(image)] != code).then_some(code))
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

fn letter(code: Code) -> char {
    char::from(b'A' + code)
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&code| write!(f, "{}", letter(code)))
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({self})")
    }
}

impl serde::Serialize for Permutation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rejects_repeated_letter() {
        let err = Permutation::from_letters("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidWiring { .. })));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Permutation::from_letters("ABC").is_err());
    }

    #[test]
    fn pairs_build_swaps() {
        let plugs = Permutation::from_pairs("AB, cd").unwrap();
        assert_eq!(plugs.get(0), Some(1));
        assert_eq!(plugs.get(3), Some(2));
        assert_eq!(plugs.get(4), Some(4));
        assert!(plugs.is_involution());
        assert_eq!(plugs.pairs(), vec![('A', 'B'), ('C', 'D')]);
    }

    #[test]
    fn pairs_reject_reuse() {
        let err = Permutation::from_pairs("AB BC").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::DuplicatePlug('B'))));
        assert!(Permutation::from_pairs("AA").is_err());
        assert!(Permutation::from_pairs("ABC").is_err());
    }

    #[test]
    fn detects_non_involution() {
        let rotor = Permutation::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert!(!rotor.is_involution());
        let err = rotor.ensure_involution().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::PlugboardNotInvolutory { letter: 'A', image: 'E', back: 'L' })
        ));
    }

    #[test]
    fn position_of_finds_the_preimage() {
        let rotor = Permutation::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert_eq!(rotor.position_of(4), Some(0));
        assert_eq!(rotor.position_of(9), Some(25));
        assert_eq!(rotor.position_of(26), None);
    }

    #[test]
    fn display_round_trips() {
        let wiring = "QDCBJXGHVEWUTNYSARPMLIKFOZ";
        assert_eq!(Permutation::from_letters(wiring).unwrap().to_string(), wiring);
    }
}
