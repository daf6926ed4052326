pub mod markers;
pub mod session;
