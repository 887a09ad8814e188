// Shared rendering pipeline. Every surface that shows question content
// (worksheet pages, answer key, quiz preview) goes through `render_rich` —
// no per-call-site markdown handling.

pub mod markdown;

pub use markdown::{escape_html, render_rich};
