use crate::calculator::EnergyCalculator;
use density_core::{CoefficientMode, DensityArray, DensityInput, EmptinessRule, EnergyError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub cells: usize,
    pub occupied_cells: usize,
    pub particles: f64,
    pub energy: f64,
    pub coefficient: f64,
    pub coefficient_applied: bool,
    pub emptiness_rule: EmptinessRule,
}

impl EnergyReport {
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl EnergyCalculator {
    /// Validates like [`EnergyCalculator::compute`] and summarises the
    /// occupancy alongside the energy.
    pub fn report(&self, density: &DensityInput, coeff: f64) -> Result<EnergyReport, EnergyError> {
        let array = DensityArray::try_from(density)?;
        let energy = self.compute_array(&array, coeff)?;

        let (occupied_cells, particles) = match &array {
            DensityArray::Integral(a) => (
                a.iter().filter(|&&n| n > 0).count(),
                a.iter()
                    .map(|&n| i128::from(n))
                    .fold(0_i128, i128::saturating_add) as f64,
            ),
            DensityArray::Real(a) => (a.iter().filter(|&&n| n > 0.0).count(), a.sum()),
        };
        let config = self.config();

        Ok(EnergyReport {
            cells: array.element_count(),
            occupied_cells,
            particles,
            energy,
            coefficient: coeff,
            coefficient_applied: config.coefficient == CoefficientMode::Applied,
            emptiness_rule: config.emptiness_rule,
        })
    }
}
