//! Reference neural policy for Slither agents.
//!
//! A small feed-forward network over the 16-element sensor view,
//! parameterized by one flat vector so an outer optimizer can treat a
//! whole policy as a genome. The engine depends only on the
//! [`Policy`](slither_core::Policy) trait; this crate is one
//! implementation of it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neuro;

pub use neuro::NeuroPolicy;
