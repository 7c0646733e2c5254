mod builder;
mod index;
mod sitemap;

pub use builder::{build_site, SiteBuilder};
pub use index::render_index_content;
pub use sitemap::{render_robots, render_sitemap};
