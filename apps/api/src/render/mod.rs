// Rendering engine: resume + design choices → presentational tree.
// Everything under here is pure. Catalog lookups are total, so rendering never fails.

pub mod header;
pub mod html;
pub mod layout;
pub mod node;
pub mod preview;
pub mod sections;
pub mod template;

pub use html::to_html_document;
pub use node::Node;
pub use preview::{render_preview, PreviewOptions};
