pub mod dashboard;
pub mod progress_bar;
pub mod typing_area;
