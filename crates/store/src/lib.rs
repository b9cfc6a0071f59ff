mod dashboard;
mod mutation;
mod query;
mod record;

pub use dashboard::*;
pub use record::*;
