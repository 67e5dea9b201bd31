pub mod adaptors;
pub mod firestore;
pub mod form;
pub mod store;
pub mod table;
pub mod uploads;
