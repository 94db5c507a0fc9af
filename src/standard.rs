//! The standard RFC 4648 base-64 alphabet, with `=` padding.

use crate::alphabet::Base64Alphabet;
use crate::decode::{self, Decoder};
use crate::encode::{self, Encoder};

pub const ALPHABET: Base64Alphabet =
    match Base64Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/", false) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

const ENCODER: Encoder = Encoder::new(&ALPHABET, true);
const DECODER: Decoder = Decoder::new(&ALPHABET, true);

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

#[cfg(test)]
mod tests {
    use super::ALPHABET;

    #[test]
    fn alphabet() {
        assert_eq!(ALPHABET.encode(0), b'A');
        assert_eq!(ALPHABET.encode(25), b'Z');
        assert_eq!(ALPHABET.encode(26), b'a');
        assert_eq!(ALPHABET.encode(51), b'z');
        assert_eq!(ALPHABET.encode(52), b'0');
        assert_eq!(ALPHABET.encode(61), b'9');
        assert_eq!(ALPHABET.encode(62), b'+');
        assert_eq!(ALPHABET.encode(63), b'/');
        assert_eq!(ALPHABET.decode(b'+'), Some(62));
        assert_eq!(ALPHABET.decode(b'!'), None);
        assert_eq!(ALPHABET.decode(b'='), None);
    }

    #[test]
    fn encode() {
        assert_eq!(super::encode([0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]), "FPucA9l+");
        assert_eq!(super::encode([0x14, 0xfb, 0x9c, 0x03, 0xd9]), "FPucA9k=");
        assert_eq!(super::encode([0x14, 0xfb, 0x9c, 0x03]), "FPucAw==");
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode(b"f"), "Zg==");
        assert_eq!(super::encode(b"fo"), "Zm8=");
        assert_eq!(super::encode(b"foo"), "Zm9v");
        assert_eq!(super::encode(b"foob"), "Zm9vYg==");
        assert_eq!(super::encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(super::encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("FPucA9l+"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
        assert_eq!(super::decode("FPucA9k="), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9]));
        assert_eq!(super::decode("FPucAw=="), Ok(vec![0x14, 0xfb, 0x9c, 0x03]));
        assert_eq!(super::decode(""), Ok(b"".to_vec()));
        assert_eq!(super::decode("Zg=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("Zm9vYg=="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("Zm9vYmE="), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("Zm9vYmFy"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            super::decode("Zm9!"),
            Err(crate::decode::Error::InvalidCharacter { character: '!', index: 3 })
        );
        assert_eq!(
            super::decode([0x5a, 0xc3, 0xa9]),
            Err(crate::decode::Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into(b"foob", &mut output), Ok(8));
        assert_eq!(&output, b"Zm9vYg==");
        let mut output = [0u8; 4];
        assert_eq!(super::encode_into(b"foob", &mut output), Err(crate::encode::Error::BufferTooSmall));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("Zm9vYg==", &mut output), Ok(4));
        assert_eq!(&output, b"foob");
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("Zm9vYg==", &mut output), Err(crate::decode::Error::BufferTooSmall));
    }
}
