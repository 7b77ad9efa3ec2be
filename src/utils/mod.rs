//! Helpers around the calendar core: output rendering, strings, numbers, colours

pub mod colour;
pub mod format;
pub mod number;
pub mod strings;
