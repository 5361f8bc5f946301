pub mod client;
pub mod lookup;

pub use client::{create_client, DEFAULT_ENDPOINT};
pub use lookup::lookup_ingredients;
