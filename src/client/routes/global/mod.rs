pub mod dashboard;
pub mod schools;
pub mod users;

pub use dashboard::GlobalDashboard;
pub use schools::Schools;
pub use users::Users;
