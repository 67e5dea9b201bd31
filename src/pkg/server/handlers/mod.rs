pub mod portfolio;
pub mod probes;
pub mod students;
pub mod uploads;
