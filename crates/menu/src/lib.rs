mod catalog;
mod dietary_filter;
mod generate;

pub use dietary_filter::*;
pub use generate::*;
