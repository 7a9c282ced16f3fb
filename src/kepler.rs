//! # Two-body circular-orbit solver
//!
//! This module defines [`KeplerSolver`], an immutable value object built
//! around the mass of a central body. Construction validates the mass and
//! precomputes the standard gravitational parameter μ = G·M once; both
//! queries are then closed-form evaluations on top of that cached scalar:
//!
//! 1. **Orbital period** from the semi-major axis — T = 2π·√(a³/μ)
//! 2. **Circular-orbit speed** from the orbital radius — v = √(μ/r)
//!
//! All quantities are SI (kg, m, s, m/s) and all arithmetic is `f64`. The
//! solver holds two plain scalars and no interior mutability, so a single
//! instance may be shared across threads and reused for any number of
//! queries.
//!
//! ## Typical usage
//!
//! ```rust
//! use twobody::constants::EARTH_MASS;
//! use twobody::kepler::KeplerSolver;
//!
//! let solver = KeplerSolver::new(EARTH_MASS).unwrap();
//!
//! // Low Earth orbit at 7000 km from the geocenter: ~97 minutes, ~7.5 km/s
//! let period = solver.period_from_distance(7.0e6).unwrap();
//! let speed = solver.circular_speed_from_distance(7.0e6).unwrap();
//! assert!((period - 5829.0).abs() < 2.0);
//! assert!((speed - 7546.0).abs() < 2.0);
//! ```

use crate::constants::{Kilogram, Meter, MeterPerSecond, Second, DPI, G};
use crate::twobody_errors::TwoBodyError;

/// Immutable two-body solver for a given central mass.
///
/// The circular orbit is the only supported orbital shape: the semi-major
/// axis handed to [`period_from_distance`](KeplerSolver::period_from_distance)
/// is the orbital radius. Both fields are fixed at construction; there are
/// no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerSolver {
    central_mass_kg: Kilogram,
    mu: f64,
}

impl KeplerSolver {
    /// Construct a solver for a central body of the given mass.
    ///
    /// The standard gravitational parameter μ = G·M is computed here, once,
    /// with [`G`](crate::constants::G).
    ///
    /// Arguments
    /// -----------------
    /// * `central_mass_kg`: Mass of the central body in kilograms, `> 0`.
    ///
    /// Return
    /// ----------
    /// * A new [`KeplerSolver`], or [`TwoBodyError::InvalidArgument`] if
    ///   `central_mass_kg <= 0`.
    pub fn new(central_mass_kg: Kilogram) -> Result<Self, TwoBodyError> {
        let central_mass_kg = check_positive(central_mass_kg, "central_mass_kg")?;
        Ok(KeplerSolver {
            central_mass_kg,
            mu: G * central_mass_kg,
        })
    }

    /// Mass of the central body in kilograms.
    pub fn central_mass_kg(&self) -> Kilogram {
        self.central_mass_kg
    }

    /// Standard gravitational parameter μ = G·M in m³ s⁻².
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Orbital period for a given semi-major axis.
    ///
    /// Evaluates Kepler's third law, T = 2π·√(a³/μ), with the semi-major
    /// axis as the effective radius of a circular orbit.
    ///
    /// Arguments
    /// -----------------
    /// * `semi_major_axis_m`: Semi-major axis in meters, `> 0`.
    ///
    /// Return
    /// ----------
    /// * The orbital period in seconds, or
    ///   [`TwoBodyError::InvalidArgument`] if `semi_major_axis_m <= 0`.
    ///
    /// See also
    /// ------------
    /// * [`circular_speed_from_distance`](KeplerSolver::circular_speed_from_distance) – Speed along the same orbit.
    pub fn period_from_distance(&self, semi_major_axis_m: Meter) -> Result<Second, TwoBodyError> {
        let a = check_positive(semi_major_axis_m, "semi_major_axis_m")?;
        Ok(DPI * (a.powi(3) / self.mu).sqrt())
    }

    /// Circular-orbit speed at a given orbital radius.
    ///
    /// Evaluates the circular-orbit velocity law, v = √(μ/r).
    ///
    /// Arguments
    /// -----------------
    /// * `distance_m`: Orbital radius in meters, `> 0`.
    ///
    /// Return
    /// ----------
    /// * The orbital speed in meters per second, or
    ///   [`TwoBodyError::InvalidArgument`] if `distance_m <= 0`.
    ///
    /// See also
    /// ------------
    /// * [`period_from_distance`](KeplerSolver::period_from_distance) – Period of the same orbit.
    pub fn circular_speed_from_distance(
        &self,
        distance_m: Meter,
    ) -> Result<MeterPerSecond, TwoBodyError> {
        let r = check_positive(distance_m, "distance_m")?;
        Ok((self.mu / r).sqrt())
    }
}

/// Reject non-positive scalars, naming the parameter in the error message.
fn check_positive(value: f64, name: &str) -> Result<f64, TwoBodyError> {
    if value <= 0.0 {
        return Err(TwoBodyError::InvalidArgument(format!(
            "{name} must be > 0 (got {value})"
        )));
    }
    Ok(value)
}
