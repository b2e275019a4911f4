use serde::{Deserialize, Serialize};

/// School particulars printed on report forms and shown in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolParticulars {
    pub school_name: String,
    pub motto: String,
    pub postal_address: String,
    pub phone: String,
    pub email: String,
    pub principal: String,
    pub current_term: u8,
    pub current_year: i32,
    pub logo: Option<String>,
}

impl Default for SchoolParticulars {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            motto: String::new(),
            postal_address: String::new(),
            phone: String::new(),
            email: String::new(),
            principal: String::new(),
            current_term: 1,
            current_year: 0,
            logo: None,
        }
    }
}

impl SchoolParticulars {
    pub fn validate(&self) -> Result<(), String> {
        if self.school_name.trim().is_empty() {
            return Err("Please enter school name".into());
        }
        if !(1..=3).contains(&self.current_term) {
            return Err("Term must be 1, 2 or 3".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Please enter a valid email address".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_fills_defaults() {
        let p: SchoolParticulars =
            serde_json::from_str(r#"{"school_name":"Kilimani Secondary"}"#).unwrap();
        assert_eq!(p.school_name, "Kilimani Secondary");
        assert_eq!(p.current_term, 1);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn bad_term_and_email_are_rejected() {
        let mut p = SchoolParticulars {
            school_name: "Kilimani".into(),
            current_term: 4,
            ..Default::default()
        };
        assert!(p.validate().is_err());
        p.current_term = 2;
        p.email = "office.kilimani".into();
        assert_eq!(p.validate(), Err("Please enter a valid email address".into()));
    }
}
