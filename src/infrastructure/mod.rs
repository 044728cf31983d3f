pub mod backends;
pub mod scrapers;
pub mod search;
