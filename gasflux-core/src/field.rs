//! Broadcastable arrays of independent observations
//!
//! Every input of the flux models is a [`Field`]: an n-dimensional array in
//! which each element is an independent observation (a time, a location, a
//! profile bin, ...). Inputs may be mixed freely between scalars and arrays
//! provided they are mutually broadcastable under the usual NumPy rules:
//! shapes are aligned on their trailing axes and each axis must either match
//! or have length one.

use crate::errors::{GasFluxError, GasFluxResult};
use crate::FloatValue;
use ndarray::{arr0, ArrayD, ArrayViewD, IxDyn};

/// n-dimensional array of observations.
pub type Field = ArrayD<FloatValue>;

/// A zero-dimensional field holding a single value.
pub fn scalar(value: FloatValue) -> Field {
    arr0(value).into_dyn()
}

/// Shape that all of `shapes` broadcast to.
///
/// # Errors
///
/// [`GasFluxError::ShapeMismatch`] if any axis has two different lengths
/// that are both greater than one.
pub fn broadcast_shape(shapes: &[&[usize]]) -> GasFluxResult<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut target = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let current = &mut target[offset + axis];
            if *current == 1 {
                *current = len;
            } else if len != 1 && len != *current {
                return Err(GasFluxError::ShapeMismatch {
                    shapes: shapes.iter().map(|s| s.to_vec()).collect(),
                });
            }
        }
    }

    Ok(target)
}

/// Broadcast a set of views to their common shape.
///
/// Returns the common shape and one view per input, in input order.
pub fn broadcast_all<'b>(
    views: &'b [ArrayViewD<'_, FloatValue>],
) -> GasFluxResult<(Vec<usize>, Vec<ArrayViewD<'b, FloatValue>>)> {
    let shapes: Vec<&[usize]> = views.iter().map(|v| v.shape()).collect();
    let shape = broadcast_shape(&shapes)?;

    let broadcast = views
        .iter()
        .map(|view| view.broadcast(IxDyn(&shape)))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| GasFluxError::ShapeMismatch {
            shapes: shapes.iter().map(|s| s.to_vec()).collect(),
        })?;

    Ok((shape, broadcast))
}

/// Broadcast a single view to `shape` without copying.
pub fn broadcast_to<'b>(
    view: &'b ArrayViewD<'_, FloatValue>,
    shape: &[usize],
) -> GasFluxResult<ArrayViewD<'b, FloatValue>> {
    view.broadcast(IxDyn(shape))
        .ok_or_else(|| GasFluxError::ShapeMismatch {
            shapes: vec![view.shape().to_vec(), shape.to_vec()],
        })
}

/// Broadcast a single owned field to `shape`, copying its values.
pub fn broadcast_owned(field: &Field, shape: &[usize]) -> GasFluxResult<Field> {
    broadcast_to(&field.view(), shape).map(|view| view.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_scalar_is_zero_dimensional() {
        let s = scalar(3.0);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_broadcast_shape_scalar_and_vector() {
        let shape = broadcast_shape(&[&[], &[4], &[1]]).unwrap();
        assert_eq!(shape, vec![4]);
    }

    #[test]
    fn test_broadcast_shape_trailing_axes() {
        let shape = broadcast_shape(&[&[3, 1], &[4], &[]]).unwrap();
        assert_eq!(shape, vec![3, 4]);
    }

    #[test]
    fn test_broadcast_shape_zero_length() {
        let shape = broadcast_shape(&[&[0], &[1]]).unwrap();
        assert_eq!(shape, vec![0]);
    }

    #[test]
    fn test_broadcast_shape_mismatch() {
        let err = broadcast_shape(&[&[3], &[4]]).unwrap_err();
        assert_eq!(
            err,
            GasFluxError::ShapeMismatch {
                shapes: vec![vec![3], vec![4]]
            }
        );
    }

    #[test]
    fn test_broadcast_all_views() {
        let a = arr1(&[1.0, 2.0, 3.0]).into_dyn();
        let b = scalar(10.0);
        let c = arr2(&[[1.0], [2.0]]).into_dyn();
        let views = [a.view(), b.view(), c.view()];

        let (shape, out) = broadcast_all(&views).unwrap();
        assert_eq!(shape, vec![2, 3]);
        assert_eq!(out[0][[1, 2]], 3.0);
        assert_eq!(out[1][[1, 0]], 10.0);
        assert_eq!(out[2][[1, 2]], 2.0);
    }

    #[test]
    fn test_broadcast_owned_mismatch() {
        let a = arr1(&[1.0, 2.0]).into_dyn();
        assert!(broadcast_owned(&a, &[3]).is_err());
        assert_eq!(broadcast_owned(&a, &[2, 2]).unwrap().shape(), &[2, 2]);
    }

    #[test]
    fn test_broadcast_to_shares_data() {
        let a = arr1(&[1.0, 2.0]).into_dyn();
        let view = a.view();
        let expanded = broadcast_to(&view, &[3, 2]).unwrap();
        assert_eq!(expanded.shape(), &[3, 2]);
        assert_eq!(expanded[[2, 1]], 2.0);
        assert!(broadcast_to(&view, &[3]).is_err());
    }
}
