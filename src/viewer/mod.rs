pub mod client;
pub mod driver;
pub mod errors;
pub mod state;
