pub mod models;
pub mod params;
pub mod query;

pub use models::*;
pub use params::*;
pub use query::*;
