mod cell;
mod document;
mod mime_bundle;

pub use cell::{Cell, Output};
pub use document::Document;
pub use mime_bundle::{MimeBundle, join_text};
