pub mod error;
pub mod export;
pub mod models;
pub mod serialize;
pub mod traits;

pub use error::{AccessError, Result};
pub use export::{collect_export, ExportOptions};
pub use models::*;
pub use serialize::{load_export, output_path, render, write_export, OutputFormat};
pub use traits::AccessSource;
