pub mod blogs;
pub mod catalogs;
pub mod knowledge;
pub mod sitemap;
