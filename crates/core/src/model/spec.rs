use serde::{Deserialize, Serialize};

/// A weights or probabilities argument: either a symbolic reference to a
/// table column or a literal vector. Column references are resolved to
/// concrete values once, at the start of construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VectorSource {
    Column(String),
    Values(Vec<f64>),
}

impl VectorSource {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn values(values: impl Into<Vec<f64>>) -> Self {
        Self::Values(values.into())
    }
}

/// The weights argument of a design specification.
///
/// `Default` substitutes an all-ones vector of length `sampsize` at
/// resolution time. `Suppressed` means the caller explicitly passed no
/// weights and no default is substituted; if probabilities and population
/// size are also absent, resolution fails with `MissingParameters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WeightsSpec {
    #[default]
    Default,
    Suppressed,
    Source(VectorSource),
}

/// Population size: a scalar, or a per-row vector (which must be constant
/// for a simple random sample).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PopulationSize {
    Scalar(f64),
    PerRow(Vec<f64>),
}

/// Partial, possibly redundant specification of a simple random sample.
/// The resolver turns this plus a table into a validated design, or
/// rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleDesignSpec {
    #[serde(default)]
    pub popsize: Option<PopulationSize>,
    /// Sample size; defaults to the table's row count.
    #[serde(default)]
    pub sampsize: Option<usize>,
    #[serde(default)]
    pub weights: WeightsSpec,
    #[serde(default)]
    pub probs: Option<VectorSource>,
    /// When true (the default), the finite-population correction is 1.
    #[serde(default = "default_ignore_fpc")]
    pub ignore_fpc: bool,
}

fn default_ignore_fpc() -> bool {
    true
}

impl Default for SampleDesignSpec {
    fn default() -> Self {
        Self {
            popsize: None,
            sampsize: None,
            weights: WeightsSpec::Default,
            probs: None,
            ignore_fpc: true,
        }
    }
}

impl SampleDesignSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_popsize(mut self, popsize: f64) -> Self {
        self.popsize = Some(PopulationSize::Scalar(popsize));
        self
    }

    pub fn with_popsize_vector(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.popsize = Some(PopulationSize::PerRow(values.into()));
        self
    }

    pub fn with_sampsize(mut self, sampsize: usize) -> Self {
        self.sampsize = Some(sampsize);
        self
    }

    pub fn with_weights(mut self, source: VectorSource) -> Self {
        self.weights = WeightsSpec::Source(source);
        self
    }

    /// Explicitly pass no weights, disabling the all-ones default.
    pub fn without_weights(mut self) -> Self {
        self.weights = WeightsSpec::Suppressed;
        self
    }

    pub fn with_probs(mut self, source: VectorSource) -> Self {
        self.probs = Some(source);
        self
    }

    pub fn with_ignore_fpc(mut self, ignore_fpc: bool) -> Self {
        self.ignore_fpc = ignore_fpc;
        self
    }
}
