// Utils compartidos

pub mod constants;

pub use constants::*;
