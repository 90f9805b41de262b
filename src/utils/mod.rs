pub mod client;
pub mod env;
pub mod parsers;
