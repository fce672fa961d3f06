use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    pub fn code(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "LOW",
            TrafficLevel::Medium => "MEDIUM",
            TrafficLevel::High => "HIGH",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(TrafficLevel::Low),
            "MEDIUM" => Some(TrafficLevel::Medium),
            "HIGH" => Some(TrafficLevel::High),
            _ => None,
        }
    }

    /// Helper: accepts `low`, `Low`, `L`, ...
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "L" => Some(TrafficLevel::Low),
            "M" => Some(TrafficLevel::Medium),
            "H" => Some(TrafficLevel::High),
            other => Self::from_db_str(other),
        }
    }
}
