mod collector;
mod model;
mod utils;

pub use collector::discover_documents;
pub use model::Page;
pub use utils::{derive_title, last_modified, slug_for};
