mod overview;
mod score;
mod selection;
mod summary;

pub use overview::*;
pub use score::*;
pub use selection::*;
pub use summary::*;
