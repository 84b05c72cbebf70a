pub mod holders;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod progress;
pub mod sections;
pub mod stats;
