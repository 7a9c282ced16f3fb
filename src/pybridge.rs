//! Python bindings via PyO3 for twobody.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::kepler::KeplerSolver;

// KeplerSolver
#[pyclass(name = "KeplerSolver")]
#[derive(Clone)]
pub struct PyKeplerSolver {
    inner: KeplerSolver,
}

#[pymethods]
impl PyKeplerSolver {
    #[new]
    fn new(central_mass_kg: f64) -> PyResult<Self> {
        KeplerSolver::new(central_mass_kg)
            .map(|solver| PyKeplerSolver { inner: solver })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Orbital period (seconds) for a given semi-major axis (meters).
    fn period_from_distance(&self, semi_major_axis_m: f64) -> PyResult<f64> {
        self.inner
            .period_from_distance(semi_major_axis_m)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Circular-orbit speed (m/s) at a given orbital radius (meters).
    fn circular_speed_from_distance(&self, distance_m: f64) -> PyResult<f64> {
        self.inner
            .circular_speed_from_distance(distance_m)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn central_mass_kg(&self) -> f64 {
        self.inner.central_mass_kg()
    }

    #[getter]
    fn mu(&self) -> f64 {
        self.inner.mu()
    }

    fn __repr__(&self) -> String {
        format!(
            "KeplerSolver(central_mass_kg={:e})",
            self.inner.central_mass_kg()
        )
    }
}

// Module registration
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKeplerSolver>()?;
    Ok(())
}
