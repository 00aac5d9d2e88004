// Alert escalation stage.
//
// Architecture:
// - model.rs: Alert levels, channels, languages and delivery records
// - templates.rs: Localized message templates
// - engine.rs: Score to level/cadence/channel mapping and message rendering

pub mod engine;
pub mod model;
pub mod templates;
