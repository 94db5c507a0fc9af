//! The modular-crypt alphabet used by crypt(3)-style password hash formats.
//!
//! `ALPHABET` packs bits big-endian. `ALPHABET_LE` is the same character
//! ordering packed least-significant bits first, the order used by the
//! md5-crypt and sha-crypt families. Neither format pads.

use crate::alphabet::Base64Alphabet;
use crate::decode::{self, Decoder};
use crate::encode::{self, Encoder};

const CHARACTERS: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const ALPHABET: Base64Alphabet = match Base64Alphabet::new(CHARACTERS, false) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const ALPHABET_LE: Base64Alphabet = match Base64Alphabet::new(CHARACTERS, true) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

const ENCODER: Encoder = Encoder::new(&ALPHABET, false);
const DECODER: Decoder = Decoder::new(&ALPHABET, false);
const ENCODER_LE: Encoder = Encoder::new(&ALPHABET_LE, false);
const DECODER_LE: Decoder = Decoder::new(&ALPHABET_LE, false);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, encode::Error> {
    ENCODER.encode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, decode::Error> {
    DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, decode::Error> {
    DECODER.decode_into(input, output)
}

pub fn encode_le(input: impl AsRef<[u8]>) -> String {
    ENCODER_LE.encode(input)
}

pub fn encode_le_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, encode::Error> {
    ENCODER_LE.encode_into(input, output)
}

pub fn decode_le(input: impl AsRef<[u8]>) -> Result<Vec<u8>, decode::Error> {
    DECODER_LE.decode(input)
}

pub fn decode_le_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, decode::Error> {
    DECODER_LE.decode_into(input, output)
}
