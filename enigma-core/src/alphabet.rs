// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Maps readable letters to the dense integer codes the engine works with, and back.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The alphabet codec.
//!
//! The machine only has letter keys, so anything that is not a Latin letter
//! is typed as `X`. Case is folded on the way in and never restored.

use crate::error::{Error, Result};

/// Number of symbols in the alphabet; the size of every table in the engine.
pub const ALPHABET_SIZE: usize = 26;

/// A letter as the engine sees it, always in `0..ALPHABET_SIZE`.
pub type Code = u8;

/// [`ALPHABET_SIZE`] as a [`Code`], for modular arithmetic on codes.
#[allow(clippy::cast_possible_truncation)]
pub const MODULUS: Code = ALPHABET_SIZE as Code;

/// Code substituted for every character that is not a letter (`X`).
pub const PLACEHOLDER: Code = b'X' - b'A';

/// Maps one byte to its code. Never fails.
#[must_use]
pub const fn encode_byte(byte: u8) -> Code {
    match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a',
        _ => PLACEHOLDER,
    }
}

/// Maps one character to its code. Non-ASCII letters count as invalid.
#[must_use]
pub fn encode_char(ch: char) -> Code {
    u8::try_from(ch).map_or(PLACEHOLDER, encode_byte)
}

/// Encodes text, one code per character.
#[must_use]
pub fn encode(text: &str) -> Vec<Code> {
    text.chars().map(encode_char).collect()
}

/// Encodes raw bytes onto the end of `out`, one code per byte.
pub fn encode_bytes_into(bytes: &[u8], out: &mut Vec<Code>) {
    out.extend(bytes.iter().copied().map(encode_byte));
}

/// Maps a code back to its uppercase letter.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if `code` is outside the alphabet.
pub fn decode_code(code: Code) -> Result<char> {
    if usize::from(code) < ALPHABET_SIZE {
        Ok(char::from(b'A' + code))
    } else {
        Err(Error::InvariantViolation(format!(
            "code {code} is outside the {ALPHABET_SIZE}-letter alphabet"
        )))
    }
}

/// Decodes codes into an uppercase string of the same length.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if any code is outside the alphabet.
pub fn decode(codes: &[Code]) -> Result<String> {
    codes.iter().map(|&code| decode_code(code)).collect()
}

/// Appends the uppercase letters for `codes` to `out` as ASCII bytes.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if any code is outside the alphabet;
/// `out` then holds the letters decoded before it.
pub fn decode_into(codes: &[Code], out: &mut Vec<u8>) -> Result<()> {
    for &code in codes {
        decode_code(code)?;
        out.push(b'A' + code);
    }
    Ok(())
}

/// Parses a single letter of a setting (rotor position, plug) into its code.
///
/// Unlike [`encode_char`] this does not substitute the placeholder.
#[must_use]
pub fn letter_code(ch: char) -> Option<Code> {
    ch.is_ascii_alphabetic().then(|| encode_char(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_fold_case() {
        assert_eq!(encode("AZaz"), vec![0, 25, 0, 25]);
    }

    #[test]
    fn non_letters_become_placeholder() {
        assert_eq!(encode("1 ,é"), vec![PLACEHOLDER; 4]);
        let mut codes = Vec::new();
        encode_bytes_into("é".as_bytes(), &mut codes);
        assert_eq!(codes, vec![PLACEHOLDER; 2]);
    }

    #[test]
    fn every_byte_value_has_a_code() {
        for byte in 0u8..=255 {
            let expected = if byte.is_ascii_alphabetic() {
                byte.to_ascii_uppercase() - b'A'
            } else {
                PLACEHOLDER
            };
            assert_eq!(encode_byte(byte), expected, "byte {byte:#04x}");
        }
    }

    #[test]
    fn decode_into_appends_letters() {
        let mut out = b"> ".to_vec();
        decode_into(&[7, 8], &mut out).unwrap();
        assert_eq!(out, b"> HI");
        assert!(decode_into(&[30], &mut out).unwrap_err().is_invariant_violation());
    }

    #[test]
    fn decode_rejects_out_of_range() {
        let err = decode(&[0, 26]).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn letter_code_only_accepts_letters() {
        assert_eq!(letter_code('q'), Some(16));
        assert_eq!(letter_code('?'), None);
    }
}
