pub mod notification;
pub mod session;
