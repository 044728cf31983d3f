pub mod coinmarketcap;
mod dom;
pub mod google;
pub mod mempool;
mod web;

pub use web::*;
