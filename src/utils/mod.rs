pub mod colors;
pub mod format;

pub use format::progress_bar;
