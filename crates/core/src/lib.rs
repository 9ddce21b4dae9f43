//! Domain logic for the portfolio gallery.
//!
//! Nothing in this crate touches the network or the database; the `db` and
//! `api` crates feed it rows and request payloads.

pub mod error;
pub mod gallery;
pub mod settings;
pub mod slug;
pub mod types;
