pub mod config;
pub mod core;
pub mod error;
pub mod parsers;

#[cfg(test)]
mod test_utils;
