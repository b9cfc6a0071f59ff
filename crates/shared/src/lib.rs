mod command;
mod meal;
mod user;
mod window;

pub use command::*;
pub use meal::*;
pub use user::*;
pub use window::*;
