pub mod adaptors;
pub mod dashboard;
pub mod patch;
pub mod seed;
