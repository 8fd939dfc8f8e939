//! WebDriver Classic wire codec.
//!
//! Translates between host values and Classic JSON payloads:
//!
//! - [`encode`] rewrites references (and raw BiDi `node` objects handed over
//!   without deserialization) into single-entry identifier objects.
//! - [`decode`] resolves identifier objects against a [`Session`] into
//!   [`ClassicReference`]s, checking for identifiers before treating an object
//!   as a plain mapping.
//!
//! The session is always passed per call; nothing is bound at construction.
//!
//! [`Session`]: crate::session::Session
//! [`ClassicReference`]: crate::reference::ClassicReference

mod decoder;
mod encoder;

pub use decoder::{decode, decode_value, decode_value_with, decode_with};
pub use encoder::{encode, encode_value, encode_value_with, encode_with};
