// Evacuation planning stage.
//
// Architecture:
// - model.rs: Households, roster records, phases and statistics
// - planner.rs: Household priority, phase partition, statistics
// - routes.rs: Route and shelter reference data
// - summary.rs: Decision card aggregated from the other stages

pub mod model;
pub mod planner;
pub mod routes;
pub mod summary;
