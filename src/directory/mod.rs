mod cleaning;

pub use cleaning::clean_site;
