mod dashboard;
mod home;

pub use dashboard::DashboardScreen;
pub use home::{HomeScreen, CARDS};
