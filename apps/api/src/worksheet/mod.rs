// Printable worksheet rendering: per-page HTML, the trailing answer key, and
// the request-scoped composition pipeline the HTTP handlers call into.

pub mod answer_key;
pub mod compose;
pub mod handlers;
pub mod renderer;

pub use compose::{compose_worksheet, WorksheetDocument, WorksheetOptions};
