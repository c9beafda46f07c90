//! Core math modules.

pub mod beta;
pub mod gamma;
pub mod grid;
