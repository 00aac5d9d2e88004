#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

pub mod app;
pub use app::run;

pub use crate::core::alerts::engine::{
    create_alert_escalation_matrix, determine_alert_level, format_sms_alert,
    generate_alert_message, get_alert_frequency, get_delivery_channels, simulate_alert_delivery,
};
pub use crate::core::evacuation::planner::{
    calculate_evacuation_statistics, calculate_household_priority, generate_evacuation_phases,
};
pub use crate::core::evacuation::routes::{generate_evacuation_routes, identify_shelter_capacity};
pub use crate::core::evacuation::summary::generate_action_summary;
pub use crate::core::risk::scorer::{
    calculate_risk_contributions, compute_risk_score, get_risk_category,
};
pub use crate::core::risk::triggers::{calculate_confidence_level, identify_active_triggers};
