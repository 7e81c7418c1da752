use density_core::{
    CoefficientMode, DensityArray, DensityInput, EnergyConfig, EnergyError, NEGATIVE_ELEMENT,
    NON_INTEGRAL_OR_EMPTY, NOT_ONE_DIMENSIONAL,
};
use tracing::debug;

pub const DEFAULT_DIFFUSION_COEFFICIENT: f64 = 1.0;

/// Pairwise-interaction energy of a one dimensional occupancy array.
///
/// A cell holding `n` particles contributes `n * (n - 1)`, the number of
/// ordered same-cell particle pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyCalculator {
    config: EnergyConfig,
}

impl EnergyCalculator {
    pub fn new(config: EnergyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EnergyConfig {
        self.config
    }

    /// Checks run in a fixed order and the first failure wins: element
    /// type and emptiness, then sign, then dimensionality.
    pub fn validate(&self, density: &DensityArray) -> Result<(), EnergyError> {
        let len = density.len()?;
        if self
            .config
            .emptiness_rule
            .rejects(density.is_integral(), len)
        {
            return Err(EnergyError::shape_or_type(NON_INTEGRAL_OR_EMPTY));
        }
        if density.has_negative() {
            return Err(EnergyError::value_range(NEGATIVE_ELEMENT));
        }
        if density.ndim() != 1 {
            return Err(EnergyError::shape_or_type(NOT_ONE_DIMENSIONAL));
        }
        Ok(())
    }

    pub fn compute(&self, density: &DensityInput, coeff: f64) -> Result<f64, EnergyError> {
        let array = DensityArray::try_from(density).map_err(|err| {
            debug!(error = %err, "density conversion failed");
            err
        })?;
        self.compute_array(&array, coeff)
    }

    pub fn compute_array(&self, density: &DensityArray, coeff: f64) -> Result<f64, EnergyError> {
        if let Err(err) = self.validate(density) {
            debug!(
                error = %err,
                shape = ?density.shape(),
                rule = ?self.config.emptiness_rule,
                "density rejected"
            );
            return Err(err);
        }

        let energy = self.scale(pair_energy(density), coeff);
        debug!(
            cells = density.element_count(),
            coeff,
            energy,
            "computed diffusion energy"
        );
        Ok(energy)
    }

    fn scale(&self, energy: f64, coeff: f64) -> f64 {
        match self.config.coefficient {
            CoefficientMode::Inert => energy,
            CoefficientMode::Applied => energy * coeff,
        }
    }
}

fn pair_energy(density: &DensityArray) -> f64 {
    match density {
        DensityArray::Integral(a) => a
            .iter()
            .map(|&n| i128::from(n) * (i128::from(n) - 1))
            .fold(0_i128, i128::saturating_add) as f64,
        DensityArray::Real(a) => a.iter().map(|&n| n * (n - 1.0)).sum(),
    }
}

/// Energy of `density` under the default configuration.
pub fn compute(density: &DensityInput, coeff: f64) -> Result<f64, EnergyError> {
    EnergyCalculator::default().compute(density, coeff)
}

pub fn compute_default(density: &DensityInput) -> Result<f64, EnergyError> {
    compute(density, DEFAULT_DIFFUSION_COEFFICIENT)
}
