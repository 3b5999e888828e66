//! Core types for the site-generation client.

mod generation;
mod upload;

pub use generation::*;
pub use upload::*;
