pub mod listings;
pub mod polling;
