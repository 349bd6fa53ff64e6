//! Game implementations.

pub mod alligator;
