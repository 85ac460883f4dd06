//! Core domain model for beatles-song.
//!
//! This crate defines the song [`Record`], the immutable [`Catalog`] keyed
//! by title signature, and the text transforms used to turn free-form
//! queries into signatures.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod record;
pub mod signature;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use record::Record;
pub use signature::{normalize, purge_annotations};
