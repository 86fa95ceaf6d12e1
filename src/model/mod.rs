//! Parsed table model

mod elements;

pub use elements::*;
