//! # TUI Components
//!
//! All UI components for the terminal interface. Every component is
//! stateless: it receives its data as props (struct fields) and renders
//! into the area it is given.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar: source name, rate, play indicator)
//! ├── reader_view.rs   (The word, pivot on a fixed anchor, tick markers)
//! └── status_bar.rs    (Status message, progress, key hints)
//! ```
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(app.source_name.clone(), app.wpm(), playing).render(frame, area);
//! ```

pub mod reader_view;
mod status_bar;
mod title_bar;

pub use reader_view::ReaderView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
