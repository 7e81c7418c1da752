mod calculator;
mod report;

pub use calculator::{compute, compute_default, EnergyCalculator, DEFAULT_DIFFUSION_COEFFICIENT};
pub use density_core::{
    CoefficientMode, DensityArray, DensityInput, EmptinessRule, EnergyConfig, EnergyError,
    ErrorKind,
};
pub use report::EnergyReport;
