use crate::error::EnergyError;
use crate::input::DensityInput;
use ndarray::{Array1, ArrayD, IxDyn};

/// Uniform numeric array built from a [`DensityInput`].
///
/// Element typing follows numeric-array promotion: integers stay integral
/// unless any leaf is a float, and an empty list carries no integers at all
/// so it converts to a real array of shape `[0]`.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityArray {
    Integral(ArrayD<i64>),
    Real(ArrayD<f64>),
}

impl DensityArray {
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Integral(_))
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Integral(a) => a.shape(),
            Self::Real(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Length of the first axis. A zero-dimensional array has no length.
    pub fn len(&self) -> Result<usize, EnergyError> {
        self.shape()
            .first()
            .copied()
            .ok_or_else(|| EnergyError::shape_or_type("len() of unsized object"))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.len(), Ok(0))
    }

    pub fn element_count(&self) -> usize {
        match self {
            Self::Integral(a) => a.len(),
            Self::Real(a) => a.len(),
        }
    }

    pub fn has_negative(&self) -> bool {
        match self {
            Self::Integral(a) => a.iter().any(|&v| v < 0),
            Self::Real(a) => a.iter().any(|&v| v < 0.0),
        }
    }
}

impl TryFrom<&DensityInput> for DensityArray {
    type Error = EnergyError;

    fn try_from(input: &DensityInput) -> Result<Self, Self::Error> {
        let shape = shape_of(input)?;
        let mut leaves = Vec::new();
        flatten(input, &mut leaves);

        let any_real = leaves.is_empty() || leaves.iter().any(|l| matches!(l, Leaf::Real(_)));
        let dim = IxDyn(&shape);
        let built = if any_real {
            let data = leaves.iter().map(Leaf::as_f64).collect();
            ArrayD::from_shape_vec(dim, data).map(Self::Real)
        } else {
            let data = leaves
                .iter()
                .filter_map(|l| match l {
                    Leaf::Int(v) => Some(*v),
                    Leaf::Real(_) => None,
                })
                .collect();
            ArrayD::from_shape_vec(dim, data).map(Self::Integral)
        };
        built.map_err(|e| EnergyError::shape_or_type(format!("density array shape mismatch: {e}")))
    }
}

impl TryFrom<DensityInput> for DensityArray {
    type Error = EnergyError;

    fn try_from(input: DensityInput) -> Result<Self, Self::Error> {
        Self::try_from(&input)
    }
}

impl From<Array1<i64>> for DensityArray {
    /// An empty vector has no integers to type it, so it becomes real like
    /// an empty list does.
    fn from(values: Array1<i64>) -> Self {
        if values.is_empty() {
            return Self::Real(ArrayD::zeros(IxDyn(&[0])));
        }
        Self::Integral(values.into_dyn())
    }
}

impl From<Array1<f64>> for DensityArray {
    fn from(values: Array1<f64>) -> Self {
        Self::Real(values.into_dyn())
    }
}

#[derive(Clone, Copy)]
enum Leaf {
    Int(i64),
    Real(f64),
}

impl Leaf {
    fn as_f64(&self) -> f64 {
        match *self {
            Leaf::Int(v) => v as f64,
            Leaf::Real(v) => v,
        }
    }
}

fn shape_of(input: &DensityInput) -> Result<Vec<usize>, EnergyError> {
    let items = match input {
        DensityInput::Int(_) | DensityInput::Float(_) => return Ok(Vec::new()),
        DensityInput::List(items) => items,
    };
    let Some((first, rest)) = items.split_first() else {
        return Ok(vec![0]);
    };
    let inner = shape_of(first)?;
    for item in rest {
        if shape_of(item)? != inner {
            return Err(EnergyError::shape_or_type(
                "inhomogeneous density array: nested sequences differ in shape",
            ));
        }
    }
    let mut shape = Vec::with_capacity(inner.len() + 1);
    shape.push(items.len());
    shape.extend(inner);
    Ok(shape)
}

fn flatten(input: &DensityInput, out: &mut Vec<Leaf>) {
    match input {
        DensityInput::Int(v) => out.push(Leaf::Int(*v)),
        DensityInput::Float(v) => out.push(Leaf::Real(*v)),
        DensityInput::List(items) => items.iter().for_each(|i| flatten(i, out)),
    }
}
