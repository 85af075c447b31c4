use serde::{Deserialize, Serialize};

/// Optimistic, most likely and pessimistic values of one quantity (cost or
/// duration). The three points are not required to be ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
}

impl ThreePointEstimate {
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.optimistic <= self.most_likely && self.most_likely <= self.pessimistic
    }
}

/// Contractual policy that decides how much budget a cost risk reserves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationModel {
    /// The institution self-insures the risk.
    Internal,
    /// Exposure is limited by a contractual cap.
    FixedCap,
    /// Provisional sum shared between contractor and owner.
    Shared,
    #[default]
    None,
}

impl AllocationModel {
    /// Lenient parse used for form input. Unknown spellings fall back to
    /// [`AllocationModel::None`].
    pub fn parse_lenient(value: &str) -> Self {
        match normalize(value).as_str() {
            "internal" => AllocationModel::Internal,
            "fixedcap" => AllocationModel::FixedCap,
            "shared" => AllocationModel::Shared,
            _ => AllocationModel::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationModel::Internal => "internal",
            AllocationModel::FixedCap => "fixed_cap",
            AllocationModel::Shared => "shared",
            AllocationModel::None => "none",
        }
    }
}

/// Unit a duration is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    #[default]
    Calendar,
    Business,
}

impl DayType {
    /// Lenient parse used for form input. Unknown spellings fall back to
    /// [`DayType::Calendar`].
    pub fn parse_lenient(value: &str) -> Self {
        match normalize(value).as_str() {
            "business" | "businessdays" | "working" => DayType::Business,
            _ => DayType::Calendar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Calendar => "calendar",
            DayType::Business => "business",
        }
    }
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect::<String>()
        .to_ascii_lowercase()
}
