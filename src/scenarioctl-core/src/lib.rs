//! # Scenarioctl Core
//!
//! Shared building blocks for the scenarioctl terminal UI:
//!
//! - **Style**: the colour palette and a few style helpers used by every
//!   widget, so nothing else hardcodes colours.
//! - **Events**: the [`Action`](events::Action) vocabulary and the
//!   context-aware [`KeyMapper`](events::KeyMapper) that turns raw crossterm
//!   key events into actions.
//!
//! ```text
//! crossterm KeyEvent ──► KeyMapper (+ KeyContext) ──► Action ──► App / RecordPage / FormState
//! ```

pub mod events;
pub mod style;

pub use events::{Action, DefaultKeyMapper, InputAction, KeyContext, KeyMapper};
