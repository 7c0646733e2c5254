mod text;

pub use text::title_case;
