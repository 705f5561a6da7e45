//! Typed builders for Alexa Smart Home messages.
//!
//! The core of the crate is the [`discovery`] module, which assembles and
//! validates the device capability graph returned in a `Discover.Response`.
//! The [`envelope`] and [`skill`] modules provide the message envelopes and a
//! minimal handler dispatch around it.

pub mod discovery;
pub mod envelope;
pub mod error;
pub mod limits;
pub mod resources;
pub mod skill;
pub mod utils;

pub use error::{Error, ErrorKind, Result};
