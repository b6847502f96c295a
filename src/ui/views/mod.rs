pub mod empty;
pub mod quiz;
pub mod results;
