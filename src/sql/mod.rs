//! Safe SQL builder: identifiers are fixed, values travel as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
