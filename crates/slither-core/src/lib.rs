//! Core types and traits for the Slither snake simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the workspace: grid cells,
//! movement and sensing directions, agent/tick identifiers, the sensor
//! view record, and the policy and tile-probe traits that decouple the
//! engine from observation extraction and decision making.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod id;
pub mod policy;
pub mod sensor;

pub use cell::Cell;
pub use direction::{Compass, Direction, Steering};
pub use error::PolicyError;
pub use id::{AgentId, TickId};
pub use policy::{Policy, TileProbe};
pub use sensor::{SensorView, SENSOR_LEN, SENSOR_RAYS};
