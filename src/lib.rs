//! # twobody
//!
//! Closed-form two-body orbital mechanics under the circular-orbit
//! approximation. Given the mass of a central body, [`KeplerSolver`]
//! precomputes the standard gravitational parameter μ = G·M once and then
//! answers two queries:
//!
//! - orbital period from the semi-major axis: T = 2π·√(a³/μ)
//! - circular-orbit speed from the orbital radius: v = √(μ/r)
//!
//! Units are SI throughout (kilograms, meters, seconds) and all arithmetic
//! is `f64`. The gravitational constant is exported as [`constants::G`] so
//! that host code performing related physics shares a single value with the
//! solver.
//!
//! The optional `python` cargo feature exposes the solver to a Python host
//! as a native extension module.
//!
//! [`KeplerSolver`]: crate::kepler::KeplerSolver

pub mod constants;
pub mod kepler;
pub mod twobody_errors;

#[cfg(feature = "python")]
mod pybridge;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn twobody(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pybridge::register(m)?;
    Ok(())
}
