//! Sensor view extraction for Slither simulations.
//!
//! Turns board occupancy into the fixed-length, heading-relative
//! [`SensorView`](slither_core::SensorView) a policy observes. The
//! extraction layer knows nothing about agents or episodes; it reads
//! occupancy through the [`TileProbe`](slither_core::TileProbe) trait
//! and topology through a [`Board`](slither_space::Board).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod extract;

pub use extract::sense;
