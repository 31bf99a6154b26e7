pub mod activity;
pub mod api;
pub mod dashboard;
pub mod enrollment;
pub mod marketplace;
pub mod notification;
pub mod payment;
pub mod school;
pub mod student;
pub mod user;
