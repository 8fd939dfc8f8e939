//! Wire shapes shared by the WebDriver BiDi and Classic protocols.
//!
//! This crate contains the serde-serializable types and constants that both
//! protocol generations put on the wire. They are the "protocol layer": the
//! shapes of data as transmitted, nothing more.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with protocol**: Match the W3C WebDriver and WebDriver BiDi schemas
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Value conversion, session lookups and command dispatch are built on top of
//! these types in `wdb-runtime` and `wdb-rs`.

pub mod browsing_context;
pub mod classic;
pub mod session;

pub use browsing_context::*;
pub use classic::*;
pub use session::*;
