pub mod date;
pub mod decision;
pub mod limit;
pub mod user;
