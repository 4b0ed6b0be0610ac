//! Terminal presentation for the `notes` binary. Not part of the library.

pub mod print;
pub mod render;
