//! # Backend API
//!
//! Everything that talks HTTP to the analyzer backend lives here.
//! The rest of the crate only sees the [`AnalysisBackend`] trait and the
//! typed results it returns; swapping the transport (or substituting a
//! test double) never touches the core or the TUI.

pub mod backend;
pub mod http;
pub mod types;

pub use backend::{AnalysisBackend, ApiError};
pub use http::HttpBackend;
pub use types::{AnalysisResult, AnalyzeRequest, CorpusStats};
