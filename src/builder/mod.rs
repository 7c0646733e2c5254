pub mod site;
pub mod page;
pub mod types;

pub use site::{build_site, SiteBuilder};
pub use types::BuildReport;
