use crate::alphabet::Base64Alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    InvalidTrailingBits,
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::InvalidTrailingBits => write!(f, "Non-zero bits after the last decoded byte"),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Turns base-64 characters back into bytes. Characters outside the alphabet
/// are rejected with their position; when `padding` is set, `=` characters
/// are skipped instead of rejected.
pub struct Decoder<'a> {
    alphabet: &'a Base64Alphabet,
    padding: bool,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Base64Alphabet, padding: bool) -> Self {
        Self { alphabet, padding }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let little_endian = self.alphabet.little_endian();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut output_index = 0;
        for (input_index, &character) in input.as_ref().iter().enumerate() {
            if self.padding && character == b'=' {
                continue;
            }
            let value = match self.alphabet.decode(character) {
                Some(value) => value,
                None if character >= 128 => {
                    return Err(Error::NonAsciiCharacter {
                        character,
                        index: input_index,
                    });
                }
                None => {
                    return Err(Error::InvalidCharacter {
                        character: character as char,
                        index: input_index,
                    });
                }
            };
            if little_endian {
                accumulator |= (value as usize) << bits;
                bits += 6;
                while bits >= 8 {
                    *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (accumulator & 0xff) as u8;
                    output_index += 1;
                    accumulator >>= 8;
                    bits -= 8;
                }
            } else {
                accumulator = (accumulator << 6) | (value as usize);
                bits += 6;
                while bits >= 8 {
                    bits -= 8;
                    *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (accumulator >> bits) as u8;
                    output_index += 1;
                    accumulator &= (1 << bits) - 1;
                }
            }
        }
        if accumulator != 0 {
            return Err(Error::InvalidTrailingBits);
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len() * 6 / 8];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}
