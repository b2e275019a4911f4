use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormEnrolment {
    pub form: u8,
    pub students: u32,
}

/// Response of `GET /dashboard/getsummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_students: u32,
    pub total_staff: u32,
    pub boys: u32,
    pub girls: u32,
    pub per_form: Vec<FormEnrolment>,
}

impl DashboardSummary {
    /// Share of girls in percent, `None` when nobody is enrolled.
    pub fn girls_share(&self) -> Option<f64> {
        let total = self.boys + self.girls;
        if total == 0 {
            None
        } else {
            Some(self.girls as f64 * 100.0 / total as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn girls_share_handles_empty_school() {
        assert_eq!(DashboardSummary::default().girls_share(), None);
        let s = DashboardSummary {
            boys: 30,
            girls: 10,
            ..Default::default()
        };
        assert_eq!(s.girls_share(), Some(25.0));
    }
}
