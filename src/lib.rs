//! Compute when a shared resource runs out, given how often each of its
//! consumers takes a unit of it.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod breakdown;
pub mod eta;
pub mod input;

pub use crate::breakdown::Breakdown;
pub use crate::eta::{compute_eta, InvalidInput, Request, Time};
