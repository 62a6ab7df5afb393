pub mod catalog;
pub mod fundability;
