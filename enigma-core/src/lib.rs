// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for enigma-core, tying the codec, catalog, rotors and machine together.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Enigma Core Library
//!
//! This library simulates a rotor cipher machine: a plugboard, a stack of
//! stepping rotors and a fixed reflector. Because the wiring is symmetric,
//! running ciphertext through a machine set up like the one that produced it
//! gives back the plaintext.
//!
//! ```
//! use enigma_core::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default();
//! let ciphertext = Machine::new(&config)?.process_text("HELLOWORLD")?;
//! let plaintext = Machine::new(&config)?.process_text(&ciphertext)?;
//! assert_eq!(plaintext, "HELLOWORLD");
//! # Ok::<(), enigma_core::Error>(())
//! ```

/// Conversion between letters and alphabet codes.
pub mod alphabet;
/// The built-in rotor and reflector wirings.
pub mod catalog;
/// Error types for configuration and internal failures.
pub mod error;
/// Random machine settings.
pub mod key_generator;
/// The assembled machine and its substitution pipeline.
pub mod machine;
/// Validated wiring tables.
pub mod permutation;
/// Rotors and the stepping mechanism.
pub mod rotor;
/// Chunked processing of byte streams.
pub mod stream;

pub use error::{ConfigError, Error, Result};
pub use machine::{Machine, MachineConfig};
pub use permutation::Permutation;
