pub mod notes;
pub mod views;
