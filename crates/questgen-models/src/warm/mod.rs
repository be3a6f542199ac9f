//! Startup loading of every model family.
//!
//! [`LanguageModels`] is the process-wide holder. Constructing it spawns one
//! loader thread per [`LoadTask`], blocks until every thread has joined and
//! records the timings in a [`LoadingSummary`].
//!
//! ```text
//!             ┌─ en_qg ───────┐
//!             ├─ zh_qg ───────┤
//!  new() ─────┼─ en_qgg ──────┼──── join all ──── LanguageModels
//!             ├─ en_dg (x4) ──┤
//!             └─ linguistic ──┘
//! ```

mod loader;
mod summary;
mod task;


pub use loader::LanguageModels;
pub use summary::LoadingSummary;
pub use task::LoadTask;
