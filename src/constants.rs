//! # Constants and type definitions for twobody
//!
//! This module centralizes the **physical constants** and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - The Newtonian gravitational constant every μ derives from
//! - Convenience distance and time scales (AU, day, year)
//! - Reference central-body masses for documentation and tests
//! - Unit-bearing type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻² (CODATA 2018)
///
/// Every standard gravitational parameter computed by this crate derives
/// from this value. Callers performing related physics should reference this
/// constant rather than carrying a private copy.
pub const G: f64 = 6.67430e-11;

/// Astronomical Unit in meters (IAU 2012)
pub const AU: f64 = 1.495_978_707e11;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of seconds in a Julian year (365.25 days)
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Solar mass in kilograms
pub const SUN_MASS: f64 = 1.9885e30;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.972e24;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Mass in kilograms
pub type Kilogram = f64;
/// Distance in meters
pub type Meter = f64;
/// Duration in seconds
pub type Second = f64;
/// Speed in meters per second
pub type MeterPerSecond = f64;
