use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Hair,
    Beauty,
    Grooming,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Hair => "hair",
            ServiceCategory::Beauty => "beauty",
            ServiceCategory::Grooming => "grooming",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hair" => Some(ServiceCategory::Hair),
            "beauty" => Some(ServiceCategory::Beauty),
            "grooming" => Some(ServiceCategory::Grooming),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    Groom,
    Bride,
    Regular,
}

impl TargetAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAudience::Groom => "groom",
            TargetAudience::Bride => "bride",
            TargetAudience::Regular => "regular",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
    /// Whole rupees.
    pub price: u32,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub services: &'static [&'static str],
    pub target_audience: TargetAudience,
}
