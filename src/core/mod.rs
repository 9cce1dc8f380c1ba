//! # Core Reader Logic
//!
//! This module contains the presentation engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!   raw text ──► tokenizer ──► WordSequence
//!                                   │ load()
//!                                   ▼
//!              ┌──────────────────────────────────────┐
//!   start()    │              Scheduler               │   TickId
//!   pause() ──►│  PlaybackState ── pivot::segments()  │◄───────── TickTimer
//!   set_rate() │                                      │──────────►
//!              └──────────────────┬───────────────────┘ schedule()
//!                                 │ PlaybackEvent
//!                                 ▼
//!                      presentation adapter (tui)
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`]: raw text → `WordSequence`
//! - [`pivot`]: ORP lookup and prefix/pivot/suffix split
//! - [`scheduler`]: the playback state machine
//! - [`timer`]: the `TickTimer` seam and its tokio implementation
//! - [`state`]: the `App` struct, everything a front-end draws from
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod pivot;
pub mod scheduler;
pub mod state;
pub mod timer;
pub mod tokenizer;

pub use pivot::{PivotLayout, pivot_index, segments};
pub use scheduler::{PlaybackError, PlaybackEvent, PlaybackListener, PlaybackStatus, Scheduler};
pub use timer::{TickId, TickTimer, TokioTimer};
pub use tokenizer::{WordSequence, tokenize};
