pub mod array;
pub mod config;
pub mod error;
pub mod input;
#[cfg(test)]
mod tests;

pub use array::*;
pub use config::*;
pub use error::*;
pub use input::*;
