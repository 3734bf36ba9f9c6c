//! Algorithms operating on the loaded source tables

pub mod merge;
