pub mod design;
pub mod spec;

pub use design::SimpleRandomSampleDesign;
pub use spec::{PopulationSize, SampleDesignSpec, VectorSource, WeightsSpec};
