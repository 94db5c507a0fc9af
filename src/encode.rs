use crate::alphabet::Base64Alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Turns a byte stream into base-64 characters, packing bits in the direction
/// the alphabet's endianness flag dictates. When `padding` is set, the output
/// is padded with `=` to a four-character boundary.
pub struct Encoder<'a> {
    alphabet: &'a Base64Alphabet,
    padding: bool,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Base64Alphabet, padding: bool) -> Self {
        Self { alphabet, padding }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        if self.alphabet.little_endian() {
            for &value in input.as_ref() {
                accumulator |= (value as usize) << bits;
                bits += 8;
                while bits >= 6 {
                    *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode((accumulator & 0x3f) as u8);
                    index += 1;
                    accumulator >>= 6;
                    bits -= 6;
                }
            }
            if bits > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator as u8);
                index += 1;
            }
        } else {
            for &value in input.as_ref() {
                accumulator = (accumulator << 8) | (value as usize);
                bits += 8;
                while bits >= 6 {
                    bits -= 6;
                    *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode((accumulator >> bits) as u8);
                    index += 1;
                    accumulator &= (1 << bits) - 1;
                }
            }
            if bits > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode((accumulator << (6 - bits)) as u8);
                index += 1;
            }
        }
        if self.padding {
            while index % 4 != 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = b'=';
                index += 1;
            }
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; (input.as_ref().len() + 2) / 3 * 4];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }
}
