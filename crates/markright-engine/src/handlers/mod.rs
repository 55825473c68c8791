//! Ready-made handler maps built on the walker.
//!
//! - **`html`**: every element becomes an HTML tag of the same name
//! - **`object`**: a document becomes a JSON object tree

pub mod html;
pub mod object;

pub use html::{html_handlers, render_html};
pub use object::{extract_object, object_handlers};
