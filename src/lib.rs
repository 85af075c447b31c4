//! Risk quantification and critical date tracking for construction projects.
//!
//! The core is [`services::risk_quantifier`], a set of pure PERT functions
//! turning three-point cost and duration estimates into expected values, EMV,
//! recommended budgets and delay durations. The rest of the crate loads risk
//! registers, writes the derived fields back, simulates aggregate exposure and
//! schedules critical date reminders.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
