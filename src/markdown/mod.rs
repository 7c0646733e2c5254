pub mod renderer;
pub mod toc;
pub mod utils;
pub mod engine;
pub mod types;

pub use renderer::{ComrakConverter, MarkupConverter};
pub use types::TocEntry;
