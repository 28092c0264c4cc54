pub mod describe;
pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;

pub use describe::describe;
pub use error::{DesignError, Result};
pub use model::design::SimpleRandomSampleDesign;
pub use model::spec::{PopulationSize, SampleDesignSpec, VectorSource, WeightsSpec};
pub use resolver::{resolve, PROBS_COLUMN, WEIGHTS_COLUMN};
