//! Feed and sitemap generation from the built page set.

pub mod rss;
pub mod sitemap;
