// Domain layer - hiking rules with no I/O
pub mod forecast;
pub mod sky;
pub mod thresholds;
pub mod units;
pub mod verdict;
