//! Base-64 encoding and decoding over the alphabet families used by password
//! hash formats: the standard RFC 4648 alphabet, the modular-crypt alphabet
//! in both bit-packing orders, and the BCrypt alphabet.

pub mod alphabet;
pub mod bcrypt;
pub mod decode;
pub mod encode;
pub mod mod_crypt;
pub mod standard;

pub use self::{alphabet::Base64Alphabet, decode::Decoder, encode::Encoder};
