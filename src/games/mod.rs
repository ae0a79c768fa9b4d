//! Game implementations.

pub mod cuttle;
