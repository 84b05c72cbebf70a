pub mod backup;
pub mod form;
pub mod holder;
pub mod log;
pub mod sections;
pub mod validate;
pub mod wizard;
