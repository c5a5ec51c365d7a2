// File:    error.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Error types shared by the cipher engine, separating configuration mistakes from broken internal invariants.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the cipher engine.
//!
//! Only configuration problems are meant to reach users. An
//! [`Error::InvariantViolation`] means a table inside the engine is malformed
//! and points at a programming error rather than bad input.

use thiserror::Error;

/// Top-level error type for all engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested machine settings are not usable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An internal table turned out to be malformed.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for programmer-error conditions that no input can cause.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

/// Problems with the settings a machine is configured from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Rotor identity outside the catalog.
    #[error("unknown rotor {id}: the catalog holds rotors 1 to {available}")]
    UnknownRotor {
        /// The requested 1-based rotor identity.
        id: usize,
        /// Number of rotors in the catalog.
        available: usize,
    },

    /// Reflector identity outside the catalog.
    #[error("unknown reflector {id}: the catalog holds reflectors 1 to {available}")]
    UnknownReflector {
        /// The requested 1-based reflector identity.
        id: usize,
        /// Number of reflectors in the catalog.
        available: usize,
    },

    /// A wiring table is not a permutation of the alphabet.
    #[error("invalid wiring '{wiring}': {reason}")]
    InvalidWiring {
        /// The offending table as given.
        wiring: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The plugboard would not undo itself on the return path.
    #[error("plugboard is not made of swaps: {letter} maps to {image}, which maps to {back}")]
    PlugboardNotInvolutory {
        /// First letter of the broken cycle.
        letter: char,
        /// Where the plugboard sends `letter`.
        image: char,
        /// Where the plugboard sends `image`.
        back: char,
    },

    /// A plug pair is not two distinct letters.
    #[error("invalid plug pair '{0}': expected two distinct letters")]
    InvalidPlugPair(String),

    /// A letter appears in more than one plug pair.
    #[error("letter {0} is plugged more than once")]
    DuplicatePlug(char),

    /// A rotor start position is not a letter.
    #[error("invalid rotor position '{0}': expected a letter A-Z")]
    InvalidPosition(String),

    /// The number of start positions differs from the number of rotors.
    #[error("{positions} start positions given for {rotors} rotors")]
    PositionCountMismatch {
        /// Number of positions supplied.
        positions: usize,
        /// Number of rotors selected.
        rotors: usize,
    },

    /// More rotors requested than the catalog can supply without repeats.
    #[error("cannot pick {requested} distinct rotors from a catalog of {available}")]
    RotorCountOutOfRange {
        /// Number of rotors requested.
        requested: usize,
        /// Number of rotors in the catalog.
        available: usize,
    },

    /// More plug pairs requested than the alphabet allows.
    #[error("cannot fit {requested} plug pairs: at most {max} are possible")]
    TooManyPlugs {
        /// Number of pairs requested.
        requested: usize,
        /// Largest possible number of pairs.
        max: usize,
    },

    /// A machine needs at least one rotor.
    #[error("at least one rotor must be selected")]
    EmptyRotorStack,
}

/// Type alias for `Result` with the engine's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
