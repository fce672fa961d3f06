pub mod charging_window;
pub mod commute;
pub mod day_of_week;
pub mod day_summary;
pub mod traffic;
