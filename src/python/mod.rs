use crate::parameters::BoundaryLayerParameters;
use crate::transfer::drag_coefficients;
use crate::{AirSeaState, Emerson19, Gas, GasFluxError, Liang13, Liang13Inputs, SurfaceConditions};
use numpy::{IntoPyArray, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(err: GasFluxError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_gas(gas: &str) -> PyResult<Gas> {
    gas.parse().map_err(value_error)
}

/// Liang et al. (2013) air-sea fluxes, positive out of the ocean.
///
/// Returns (Fd, Fc, Fp, Deq, Ks). All array arguments must be numpy
/// arrays that broadcast together; use ``np.asarray`` for scalars.
#[pyfunction]
#[pyo3(signature = (gas, cw, ca, u10, sp, pt))]
fn fluxes_liang13<'py>(
    py: Python<'py>,
    gas: &str,
    cw: PyReadonlyArrayDyn<'py, f64>,
    ca: PyReadonlyArrayDyn<'py, f64>,
    u10: PyReadonlyArrayDyn<'py, f64>,
    sp: PyReadonlyArrayDyn<'py, f64>,
    pt: PyReadonlyArrayDyn<'py, f64>,
) -> PyResult<(
    Bound<'py, PyArrayDyn<f64>>,
    Bound<'py, PyArrayDyn<f64>>,
    Bound<'py, PyArrayDyn<f64>>,
    Bound<'py, PyArrayDyn<f64>>,
    Bound<'py, PyArrayDyn<f64>>,
)> {
    let gas = parse_gas(gas)?;
    let inputs = Liang13Inputs {
        dissolved: cw.as_array(),
        partial_pressure: ca.as_array(),
        wind_speed: u10.as_array(),
        salinity: sp.as_array(),
        temperature: pt.as_array(),
    };
    let fluxes = Liang13::new().compute(gas, &inputs).map_err(value_error)?;

    Ok((
        fluxes.diffusive_flux.into_pyarray_bound(py),
        fluxes.complete_bubble_flux.into_pyarray_bound(py),
        fluxes.partial_bubble_flux.into_pyarray_bound(py),
        fluxes.equilibrium_supersaturation.into_pyarray_bound(py),
        fluxes.diffusive_velocity.into_pyarray_bound(py),
    ))
}

/// Emerson et al. (2019) air-sea fluxes, positive into the ocean.
///
/// ``outputs`` selects how much is computed:
///
/// - 3: (Ks, Kp, Kc)
/// - 6: (Ks, Kp, Kc, Fd, Fp, Fc)
/// - 7: (Ks, Kp, Kc, Fd, Fp, Fc, Deq)
///
/// ``c`` defaults to the dry-air mole fraction of the gas, ``pslp`` and
/// ``rh`` default to 1.
#[pyfunction]
#[pyo3(signature = (gas, u10, sp, pt, c=None, pslp=None, rh=None, outputs=7))]
#[allow(clippy::too_many_arguments)]
fn fluxes_emerson19<'py>(
    py: Python<'py>,
    gas: &str,
    u10: PyReadonlyArrayDyn<'py, f64>,
    sp: PyReadonlyArrayDyn<'py, f64>,
    pt: PyReadonlyArrayDyn<'py, f64>,
    c: Option<PyReadonlyArrayDyn<'py, f64>>,
    pslp: Option<PyReadonlyArrayDyn<'py, f64>>,
    rh: Option<PyReadonlyArrayDyn<'py, f64>>,
    outputs: usize,
) -> PyResult<PyObject> {
    if !matches!(outputs, 3 | 6 | 7) {
        return Err(PyValueError::new_err(format!(
            "outputs must be 3, 6 or 7, got {}",
            outputs
        )));
    }
    let gas = parse_gas(gas)?;
    let model = Emerson19::new();
    let surface = SurfaceConditions {
        wind_speed: u10.as_array(),
        salinity: sp.as_array(),
        temperature: pt.as_array(),
    };
    let velocities = model
        .transfer_velocities(gas, &surface)
        .map_err(value_error)?;

    if outputs == 3 {
        return Ok((
            velocities.diffusive_velocity.into_pyarray_bound(py),
            velocities.partial_bubble_velocity.into_pyarray_bound(py),
            velocities.complete_bubble_velocity.into_pyarray_bound(py),
        )
            .into_py(py));
    }

    let state = AirSeaState {
        concentration: c.as_ref().map(|a| a.as_array()),
        sea_level_pressure: pslp.as_ref().map(|a| a.as_array()),
        relative_humidity: rh.as_ref().map(|a| a.as_array()),
    };
    let fluxes = velocities.fluxes(&state).map_err(value_error)?;
    let deq = (outputs == 7).then(|| fluxes.supersaturation());

    let ks = fluxes.velocities.diffusive_velocity.into_pyarray_bound(py);
    let kp = fluxes.velocities.partial_bubble_velocity.into_pyarray_bound(py);
    let kc = fluxes.velocities.complete_bubble_velocity.into_pyarray_bound(py);
    let fd = fluxes.diffusive_flux.into_pyarray_bound(py);
    let fp = fluxes.partial_bubble_flux.into_pyarray_bound(py);
    let fc = fluxes.complete_bubble_flux.into_pyarray_bound(py);

    Ok(match deq {
        Some(deq) => (ks, kp, kc, fd, fp, fc, deq.into_pyarray_bound(py)).into_py(py),
        None => (ks, kp, kc, fd, fp, fc).into_py(py),
    })
}

/// Large & Pond (1981) neutral drag coefficient.
#[pyfunction]
fn drag_coefficient<'py>(
    py: Python<'py>,
    u10: PyReadonlyArrayDyn<'py, f64>,
) -> Bound<'py, PyArrayDyn<f64>> {
    drag_coefficients(&BoundaryLayerParameters::default(), u10.as_array()).into_pyarray_bound(py)
}

#[pymodule]
#[pyo3(name = "_lib")]
fn gasflux(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(fluxes_liang13, m)?)?;
    m.add_function(wrap_pyfunction!(fluxes_emerson19, m)?)?;
    m.add_function(wrap_pyfunction!(drag_coefficient, m)?)?;
    Ok(())
}
