mod renderer;

pub use renderer::{PageVars, Placeholder, Template};
