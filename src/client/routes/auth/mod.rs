pub mod activities;
pub mod dashboard;
pub mod enrollments;
pub mod marketplace;
pub mod notifications;
pub mod payments;
pub mod students;

pub use activities::Activities;
pub use dashboard::Dashboard;
pub use enrollments::Enrollments;
pub use marketplace::Marketplace;
pub use notifications::Notifications;
pub use payments::Payments;
pub use students::Students;
