use crate::error::EnergyError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Caller-supplied density value before it is forced into a uniform array.
///
/// Mirrors what a dynamically typed caller can hand over: bare numbers or
/// arbitrarily nested lists of them. JSON literals deserialize directly, so
/// `[1.5, 3]` keeps its mixed integer/float leaves.
///
/// Integer leaves are `i64`. A JSON integer above `i64::MAX` does not fit and
/// is read as a float, so it fails the integral check instead of forming an
/// unsigned array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DensityInput {
    Int(i64),
    Float(f64),
    List(Vec<DensityInput>),
}

impl DensityInput {
    pub fn from_json(raw: &str) -> Result<Self, EnergyError> {
        serde_json::from_str(raw).map_err(|e| {
            EnergyError::shape_or_type(format!("density is not a numeric array: {e}"))
        })
    }
}

macro_rules! lossless_int {
    ($($t:ty),*) => {$(
        impl From<$t> for DensityInput {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        }
    )*};
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for DensityInput {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for DensityInput {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<T: Into<DensityInput>> From<Vec<T>> for DensityInput {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<DensityInput>> From<&[T]> for DensityInput {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<DensityInput>, const N: usize> From<[T; N]> for DensityInput {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Array1<i64>> for DensityInput {
    fn from(values: Array1<i64>) -> Self {
        Self::List(values.into_iter().map(Self::Int).collect())
    }
}

impl From<Array1<f64>> for DensityInput {
    fn from(values: Array1<f64>) -> Self {
        Self::List(values.into_iter().map(Self::Float).collect())
    }
}
