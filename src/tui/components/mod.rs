//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `StatusHeader`: app title, connectivity indicator, status line
//! - `Spinner`: loading indicator, animated by the event loop clock
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `QueryInput`: question field with cursor and internal scrolling
//! - `ResultPanel`: scrollable analysis view (persistent scroll state)
//! - `Suggestions`: example-questions overlay (persistent selection)
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields or function
//! parameters), not by directly accessing global state. Dependencies stay
//! explicit and each component file is self-contained: state types, event
//! types, rendering, event handling, and tests all live together.

pub mod query_input;
pub mod result_panel;
pub mod spinner;
pub mod status_header;
pub mod suggestions;

pub use query_input::{InputEvent, QueryInput};
pub use result_panel::{ResultPanel, ResultPanelState};
pub use spinner::Spinner;
pub use status_header::StatusHeader;
pub use suggestions::{Suggestions, SuggestionsState};
