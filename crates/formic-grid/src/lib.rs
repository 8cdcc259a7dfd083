//! Grid geometry and clamped scalar-field storage for Formic simulations.
//!
//! [`GridSpec`] maps the continuous world onto a discrete cell grid;
//! [`ScalarField`] stores one bounded intensity per cell. Both fields the
//! simulation carries (pheromone and food smell) share this storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod scalar;

pub use error::GridError;
pub use grid::GridSpec;
pub use scalar::ScalarField;
