//! The BCrypt alphabet. BCrypt hashes pack bits big-endian and never pad.

use crate::alphabet::Base64Alphabet;
use crate::decode::{self, Decoder};
use crate::encode::{self, Encoder};

pub const ALPHABET: Base64Alphabet =
    match Base64Alphabet::new(b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", false) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

const ENCODER: Encoder = Encoder::new(&ALPHABET, false);
const DECODER: Decoder = Decoder::new(&ALPHABET, false);

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
