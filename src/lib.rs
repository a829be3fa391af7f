//! Estimation of CO2 emissions of scheduled passenger flights, together
//! with lower-emission alternatives and offsets.
//!
//! The entry points are [`estimate`] for one trip, [`recommend`] for its
//! alternatives and [`compare`] to rank aircraft categories on a route.
//! All operations are pure computations over the embedded reference
//! datasets ([`AirportDirectory`], [`EmissionFactorTable`]); the tables
//! are read-only after construction and safe to share across threads.
#![forbid(unsafe_code)]
mod airports;
mod compare;
mod error;
mod estimator;
mod factors;
mod geo;
mod policy;
mod recommend;

pub use airports::*;
pub use compare::*;
pub use error::*;
pub use estimator::*;
pub use factors::*;
pub use geo::distance;
pub use policy::*;
pub use recommend::*;
