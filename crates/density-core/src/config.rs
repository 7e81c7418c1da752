use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How the first validation rule combines "non-integral" with "empty".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptinessRule {
    /// Reject only when the array is non-integral AND empty. A non-empty
    /// float array passes this rule.
    Conjunctive,
    /// Reject when the array is non-integral OR empty.
    #[default]
    Disjunctive,
}

impl EmptinessRule {
    pub fn rejects(self, integral: bool, len: usize) -> bool {
        match self {
            Self::Conjunctive => !integral && len == 0,
            Self::Disjunctive => !integral || len == 0,
        }
    }
}

/// Whether the diffusion coefficient scales the computed energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientMode {
    #[default]
    Inert,
    Applied,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    pub emptiness_rule: EmptinessRule,
    pub coefficient: CoefficientMode,
}

impl EnergyConfig {
    /// Literal reproduction of the legacy validator: AND in rule one,
    /// coefficient ignored.
    pub fn legacy() -> Self {
        Self {
            emptiness_rule: EmptinessRule::Conjunctive,
            coefficient: CoefficientMode::Inert,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
