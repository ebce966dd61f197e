pub mod error;
pub mod models;
pub mod reader;

pub use error::{NotebookError, Result};
pub use models::{Cell, Document, MimeBundle, Output, join_text};
pub use reader::NotebookReader;
