mod password;
mod preference;
mod profile;
mod seed;

pub use password::*;
pub use preference::*;
pub use profile::*;
pub use seed::*;
