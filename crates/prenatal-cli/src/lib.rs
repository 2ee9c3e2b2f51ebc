//! Library side of the `prenatal-vitals` binary.

pub mod input;
pub mod logging;
