pub mod account;
pub mod booking;
pub mod client;
pub mod dashboard;

pub use account::AccountApi;
pub use booking::BookingApi;
pub use client::HttpBackend;
pub use dashboard::DashboardApi;
