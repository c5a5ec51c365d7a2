// File:    catalog.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The fixed catalog of rotor and reflector wirings the machine can be assembled from.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Rotor and reflector catalog.
//!
//! Identities are 1-based, following the historical numbering (rotor `I` is
//! identity 1).

use crate::error::{ConfigError, Result};
use serde::Serialize;

/// A rotor as it comes out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotorSpec {
    /// Roman numeral the rotor is known by.
    pub name: &'static str,
    /// 26-letter wiring.
    pub wiring: &'static str,
    /// Wiring letter that, when it reaches the first entry, turns the next rotor.
    pub turnover: char,
}

/// A reflector. Reflectors never move, so they carry no turnover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReflectorSpec {
    /// Conventional reflector name.
    pub name: &'static str,
    /// 26-letter wiring; an involution without fixed points.
    pub wiring: &'static str,
}

/// Every rotor the machine can be fitted with.
pub static ROTORS: [RotorSpec; 5] = [
    RotorSpec { name: "I", wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", turnover: 'R' },
    RotorSpec { name: "II", wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", turnover: 'F' },
    RotorSpec { name: "III", wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", turnover: 'W' },
    RotorSpec { name: "IV", wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", turnover: 'K' },
    RotorSpec { name: "V", wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", turnover: 'A' },
];

/// Every reflector the machine can be fitted with.
pub static REFLECTORS: [ReflectorSpec; 4] = [
    ReflectorSpec { name: "UKW-B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
    ReflectorSpec { name: "UKW-C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
    ReflectorSpec { name: "UKW-B thin", wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS" },
    ReflectorSpec { name: "UKW-C thin", wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ" },
];

/// Looks up a rotor by its 1-based identity.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownRotor`] if `id` is not in the catalog.
pub fn rotor(id: usize) -> Result<&'static RotorSpec> {
    id.checked_sub(1)
        .and_then(|index| ROTORS.get(index))
        .ok_or_else(|| ConfigError::UnknownRotor { id, available: ROTORS.len() }.into())
}

/// Looks up a reflector by its 1-based identity.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownReflector`] if `id` is not in the catalog.
pub fn reflector(id: usize) -> Result<&'static ReflectorSpec> {
    id.checked_sub(1)
        .and_then(|index| REFLECTORS.get(index))
        .ok_or_else(|| ConfigError::UnknownReflector { id, available: REFLECTORS.len() }.into())
}
