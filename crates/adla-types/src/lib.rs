//! Core types for the ADLA job driver: job states, errors, transport seam.

mod error;
mod state;
mod transport;

pub use error::*;
pub use state::*;
pub use transport::*;
