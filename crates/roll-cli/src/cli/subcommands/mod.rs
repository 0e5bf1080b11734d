mod attendance;
mod class;
mod user;

pub use attendance::AttendanceCommands;
pub use class::{ClassCommands, ClassCreateArgs, ClassUpdateArgs};
pub use user::{RegisterArgs, UserCommands};
