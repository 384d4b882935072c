// Text/Morse translation module
// Fixed symbol tables and the bidirectional codec

pub mod codec;
pub mod table;

pub use codec::{decode, encode, Conversion};
