pub mod closest_pair;
pub mod format;
pub mod generator;
pub mod inversions;
pub mod point;
pub mod report;
