//! MusicBrainz release search.
//!
//! Pages through `/ws/2/release/?query=...` results.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API/Search

pub mod dto;
mod adapter;
mod client;

pub use client::MusicBrainzClient;
