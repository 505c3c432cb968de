//! HTML output rendering.
//!
//! Converts slide records into a single self-contained Reveal.js document.
//!
//! # Example
//!
//! ```no_run
//! use slidecast::model::SlideRecord;
//! use slidecast::render::{to_html, RenderOptions, Theme};
//!
//! let slides = vec![SlideRecord::with_parts(["Hello"], Vec::<String>::new())];
//! let options = RenderOptions::new()
//!     .with_title("Demo")
//!     .with_theme(Theme::Dracula);
//! let html = to_html(&slides, &options);
//! std::fs::write("demo.html", html)?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod html;
mod options;
mod theme;

pub use html::{layout_for, to_html, SlideLayout};
pub use options::{RenderOptions, DEFAULT_RUNTIME_BASE};
pub use theme::Theme;
