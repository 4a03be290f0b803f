pub mod errors;
pub mod payload;
