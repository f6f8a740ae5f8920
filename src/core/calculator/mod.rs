pub mod duration;
pub mod overtime;

pub use duration::{compute_worked_hours, worked_minutes};
pub use overtime::compute_overtime;
