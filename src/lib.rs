// SPDX-License-Identifier: MIT OR Apache-2.0

//! ngfind - Bigram-ranked fuzzy matching library
//!
//! Shared modules for the ngfind CLI tool: the candidate store, the scorers,
//! the ranker, the viewport and the selection queue, tied together by
//! [`session::Session`].

pub mod candidate;
pub mod config;
pub mod errors;
pub mod ranker;
pub mod scorer;
pub mod selection;
pub mod session;
pub mod viewport;

pub use candidate::{Candidate, CandidateStore};
pub use ranker::{RankedCandidate, RankedView};
pub use scorer::{MatchOptions, Strategy};
pub use selection::SelectionQueue;
pub use session::{build_session, Session};
pub use viewport::Viewport;
