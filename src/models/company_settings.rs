use serde::Serialize;

pub const DEFAULT_STANDARD_HOURS: f64 = 8.0;

/// Singleton company configuration (row id = 1 of `company_settings`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompanySettings {
    pub standard_hours_per_day: f64,
    pub company_name: Option<String>,
    pub company_nif: Option<String>,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            standard_hours_per_day: DEFAULT_STANDARD_HOURS,
            company_name: None,
            company_nif: None,
        }
    }
}
