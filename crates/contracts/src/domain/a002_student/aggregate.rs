use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: i64,
    pub adm_no: String,
    pub first_name: String,
    #[serde(default)]
    pub other_names: String,
    pub gender: String,
    pub form: u8,
    pub stream: String,
    pub year: i32,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    #[serde(default)]
    pub kcpe_marks: Option<u32>,
}

impl Student {
    pub fn full_name(&self) -> String {
        if self.other_names.trim().is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.other_names)
        }
    }
}

/// Body of `POST /student/addstudent` and `PUT /student/updatestudent/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub adm_no: String,
    pub first_name: String,
    pub other_names: String,
    pub gender: String,
    pub form: u8,
    pub stream: String,
    pub year: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub kcpe_marks: Option<u32>,
}

impl StudentDto {
    /// Returns the first missing required field as a user-facing message.
    pub fn validate(&self) -> Result<(), String> {
        if self.adm_no.trim().is_empty() {
            return Err("Please enter admission number".into());
        }
        if self.first_name.trim().is_empty() {
            return Err("Please enter first name".into());
        }
        if self.gender.trim().is_empty() {
            return Err("Please select gender".into());
        }
        if !(1..=4).contains(&self.form) {
            return Err("Please select form".into());
        }
        if self.stream.trim().is_empty() {
            return Err("Please select stream".into());
        }
        if let Some(marks) = self.kcpe_marks {
            if marks > 500 {
                return Err("KCPE marks cannot exceed 500".into());
            }
        }
        Ok(())
    }
}

impl From<&Student> for StudentDto {
    fn from(s: &Student) -> Self {
        Self {
            adm_no: s.adm_no.clone(),
            first_name: s.first_name.clone(),
            other_names: s.other_names.clone(),
            gender: s.gender.clone(),
            form: s.form,
            stream: s.stream.clone(),
            year: s.year,
            date_of_birth: s.date_of_birth,
            guardian_name: s.guardian_name.clone(),
            guardian_phone: s.guardian_phone.clone(),
            kcpe_marks: s.kcpe_marks,
        }
    }
}

/// Body of `POST /student/getstudents`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentQuery {
    pub form: u8,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
}

/// Body of `POST /pdfr/pdfr`; the response is a PDF document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFormRequest {
    pub form: u8,
    pub year: i32,
    pub term: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
}

impl ReportFormRequest {
    pub fn file_name(&self) -> String {
        match &self.stream {
            Some(stream) => format!(
                "report_forms_f{}_{}_{}_t{}.pdf",
                self.form,
                stream.to_lowercase().replace(' ', "_"),
                self.year,
                self.term
            ),
            None => format!("report_forms_f{}_{}_t{}.pdf", self.form, self.year, self.term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> StudentDto {
        StudentDto {
            adm_no: "1021".into(),
            first_name: "Amina".into(),
            other_names: "Wanjiru".into(),
            gender: "Female".into(),
            form: 2,
            stream: "North".into(),
            year: 2024,
            ..Default::default()
        }
    }

    #[test]
    fn query_omits_empty_stream() {
        let q = StudentQuery {
            form: 3,
            year: 2024,
            stream: None,
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            serde_json::json!({ "form": 3, "year": 2024 })
        );
    }

    #[test]
    fn validate_reports_first_missing_field() {
        assert!(sample_dto().validate().is_ok());

        let mut dto = sample_dto();
        dto.adm_no.clear();
        dto.first_name.clear();
        assert_eq!(dto.validate(), Err("Please enter admission number".into()));

        let mut dto = sample_dto();
        dto.form = 0;
        assert_eq!(dto.validate(), Err("Please select form".into()));

        let mut dto = sample_dto();
        dto.kcpe_marks = Some(501);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn student_parses_with_optional_fields_missing() {
        let json = r#"{
            "id": 4, "adm_no": "77", "first_name": "Brian", "gender": "Male",
            "form": 1, "stream": "East", "year": 2025, "date_of_birth": "2011-02-03"
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.full_name(), "Brian");
        assert_eq!(s.date_of_birth, NaiveDate::from_ymd_opt(2011, 2, 3));
        assert_eq!(s.kcpe_marks, None);
    }

    #[test]
    fn report_file_name_includes_stream_when_set() {
        let req = ReportFormRequest {
            form: 4,
            year: 2024,
            term: 2,
            stream: Some("West Wing".into()),
        };
        assert_eq!(req.file_name(), "report_forms_f4_west_wing_2024_t2.pdf");
    }
}
