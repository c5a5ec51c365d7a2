// File:    stream.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Feeds a byte stream through a machine in bounded chunks and writes the resulting letters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{self, Code};
use crate::error::Result;
use crate::machine::Machine;
use log::trace;
use std::io::{ErrorKind, Read, Write};

/// Number of bytes read from the input at a time.
pub const CHUNK_SIZE: usize = 127;

/// Enciphers or deciphers everything `reader` yields and writes it to `writer`.
///
/// Every input byte becomes exactly one output letter, except for the line
/// ending (`\n`, `\r\n` or `\r`) that terminates the input, which is dropped.
/// Line breaks inside the text are ordinary non-letters and come out as `X`.
/// The machine keeps turning across chunk boundaries. When at least one
/// letter was written, the output is terminated with a single `\n`.
///
/// # Arguments
///
/// * `reader` - The source of the plaintext or ciphertext.
/// * `writer` - The destination for the resulting ciphertext or plaintext.
/// * `machine` - The machine to run the text through, at its current rotor positions.
///
/// # Returns
///
/// The number of letters processed.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if reading or writing fails.
pub fn process_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    machine: &mut Machine,
) -> Result<usize> {
    let mut buffer = [0; CHUNK_SIZE];
    // A trailing line ending is only known to be final at end of input.
    let mut held: Vec<u8> = Vec::with_capacity(2);
    let mut chunk: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + 2);
    let mut codes: Vec<Code> = Vec::with_capacity(CHUNK_SIZE + 2);
    let mut letters: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + 2);
    let mut total = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        chunk.clear();
        chunk.append(&mut held);
        chunk.extend_from_slice(&buffer[..bytes_read]);
        let keep = chunk.len() - line_ending_len(&chunk);
        held.extend_from_slice(&chunk[keep..]);
        chunk.truncate(keep);

        codes.clear();
        alphabet::encode_bytes_into(&chunk, &mut codes);
        machine.process_in_place(&mut codes)?;
        letters.clear();
        alphabet::decode_into(&codes, &mut letters)?;
        writer.write_all(&letters)?;

        total += codes.len();
        trace!(
            "Processed chunk of {} letters ({total} so far), rotors now at {}",
            codes.len(),
            machine.positions()
        );
    }

    if total > 0 {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(total)
}

fn line_ending_len(bytes: &[u8]) -> usize {
    if bytes.ends_with(b"\r\n") {
        2
    } else if bytes.ends_with(b"\n") || bytes.ends_with(b"\r") {
        1
    } else {
        0
    }
}
