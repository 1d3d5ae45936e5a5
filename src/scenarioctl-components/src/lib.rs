//! # Scenarioctl Components
//!
//! Widgets and state types shared by every record page:
//!
//! - [`focus::FocusManager`] - circular or clamped index cycling
//! - [`input::InputState`] - single-line text buffer with a grapheme cursor
//! - [`key_hints::KeyHintsBar`] - the `[key] Description | ...` help line
//! - [`record`] - record identifiers, row snapshots, submit handlers and the
//!   error type shared by forms and pages
//! - [`form`] - the dynamic form engine driven by field definitions
//! - [`table::RecordTable`] - the record grid
//! - [`nav::NavList`] - the list of tables on the left
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               scenarioctl-tui                │
//! │   (App shell, RecordPage, entity pages)      │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │           scenarioctl-components             │
//! │  form · record · table · nav · key_hints     │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │   scenarioctl-core (style, Action, KeyMapper)│
//! └──────────────────────────────────────────────┘
//! ```

pub mod focus;
pub mod form;
pub mod input;
pub mod key_hints;
pub mod nav;
pub mod record;
pub mod table;
