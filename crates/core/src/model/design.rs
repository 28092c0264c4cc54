use polars::prelude::DataFrame;

/// A resolved simple random sample design.
///
/// Immutable once built. The design owns the table it was resolved
/// against, including the materialized `weights` and `probs` columns;
/// callers that need the pre-resolution table should keep their own clone
/// before resolving (polars frames share column buffers, so the clone is
/// cheap).
#[derive(Debug, Clone)]
pub struct SimpleRandomSampleDesign {
    pub(crate) table: DataFrame,
    pub(crate) sample_size: usize,
    pub(crate) population_size: u64,
    pub(crate) sample_fraction: f64,
    pub(crate) fpc: f64,
    pub(crate) ignore_fpc: bool,
}

impl SimpleRandomSampleDesign {
    /// The backing table, with `weights` and `probs` columns materialized.
    pub fn table(&self) -> &DataFrame {
        &self.table
    }

    pub fn into_table(self) -> DataFrame {
        self.table
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn population_size(&self) -> u64 {
        self.population_size
    }

    /// sample_size / population_size.
    pub fn sample_fraction(&self) -> f64 {
        self.sample_fraction
    }

    /// Finite-population correction: 1 when ignored, else
    /// 1 − sample_fraction.
    pub fn fpc(&self) -> f64 {
        self.fpc
    }

    pub fn ignore_fpc(&self) -> bool {
        self.ignore_fpc
    }
}
