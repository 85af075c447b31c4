pub mod beta_pert_sampler;
pub mod calendar_yaml;
pub mod exposure_simulation;
pub mod exposure_types;
pub mod histogram;
pub mod input_coercion;
pub mod percentiles;
pub mod register_summary;
pub mod register_yaml;
pub mod reminders;
pub mod risk_quantifier;
pub mod settings;
