pub mod attendance;
pub mod class;
pub mod daily;
pub mod dispatch;
pub mod mark;
pub mod monthly;
pub mod overall;
pub mod shared;
pub mod stats;
pub mod user;
