pub mod cycle;
pub mod scheduler;

pub use cycle::{CycleReport, CycleRunner};
pub use scheduler::PollScheduler;
