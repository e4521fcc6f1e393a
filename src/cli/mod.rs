//! Command implementations for the truckload binary

pub mod context;
pub mod pack;
pub mod shapes;
pub mod style;
