mod article;
mod collections;
mod date;
mod excerpt;
mod file_info;
mod front_matter;
mod reading_metrics;
mod repository;
mod sorting;

pub use article::*;
pub use collections::*;
pub use date::*;
pub use excerpt::*;
pub use file_info::*;
pub use front_matter::*;
pub use reading_metrics::*;
pub use repository::*;
pub use sorting::*;
