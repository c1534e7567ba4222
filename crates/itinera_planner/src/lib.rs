pub mod builder;
pub mod catalog;
pub mod edit;
pub mod error;
pub mod evals;
pub mod flow;
pub mod model;
pub mod schedule;
pub mod stabilize;
pub mod travel;

#[cfg(test)]
pub(crate) mod test_utils;
