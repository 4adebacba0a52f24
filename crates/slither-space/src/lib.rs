//! Board topology and boundary handling for Slither simulations.
//!
//! A [`Board`] is a fixed-size rectangular grid with one of two boundary
//! modes: toroidal (edges wrap, no wall deaths) or bordered (edges are
//! lethal on contact). The board is immutable for the lifetime of an
//! episode; all mutation lives in the engine crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod boundary;
pub mod error;

pub use board::Board;
pub use boundary::BoundaryMode;
pub use error::SpaceError;
