pub mod labour;
pub mod land_use;
pub mod machinery;
pub mod permanent;
