use serde::{Deserialize, Serialize};

/// Teaching staff member as returned by `POST /teacher/getteacher`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(alias = "_id")]
    pub id: i64,
    pub name: String,
    pub initials: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub is_class_teacher: bool,
    #[serde(default)]
    pub class_form: Option<u8>,
    #[serde(default)]
    pub class_stream: Option<String>,
}

impl Teacher {
    pub fn class_label(&self) -> Option<String> {
        if !self.is_class_teacher {
            return None;
        }
        match (self.class_form, self.class_stream.as_deref()) {
            (Some(form), Some(stream)) => Some(format!("Form {form} {stream}")),
            (Some(form), None) => Some(format!("Form {form}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherDto {
    pub name: String,
    pub initials: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub subjects: Vec<String>,
    pub is_class_teacher: bool,
    pub class_form: Option<u8>,
    pub class_stream: Option<String>,
}

impl TeacherDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Please enter staff name".into());
        }
        if self.initials.trim().is_empty() {
            return Err("Please enter initials".into());
        }
        if self.is_class_teacher && self.class_form.is_none() {
            return Err("Please select the class for the class teacher".into());
        }
        Ok(())
    }
}

impl From<&Teacher> for TeacherDto {
    fn from(t: &Teacher) -> Self {
        Self {
            name: t.name.clone(),
            initials: t.initials.clone(),
            phone: t.phone.clone(),
            email: t.email.clone(),
            subjects: t.subjects.clone(),
            is_class_teacher: t.is_class_teacher,
            class_form: t.class_form,
            class_stream: t.class_stream.clone(),
        }
    }
}

/// Body of `POST /teacher/getteacher`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_teacher_requires_form() {
        let dto = TeacherDto {
            name: "Jane Otieno".into(),
            initials: "JO".into(),
            is_class_teacher: true,
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = TeacherDto {
            class_form: Some(2),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn class_label_only_for_class_teachers() {
        let mut t = Teacher {
            id: 1,
            name: "Peter Mwangi".into(),
            initials: "PM".into(),
            phone: None,
            email: None,
            subjects: vec!["Maths".into()],
            is_class_teacher: false,
            class_form: Some(3),
            class_stream: Some("East".into()),
        };
        assert_eq!(t.class_label(), None);
        t.is_class_teacher = true;
        assert_eq!(t.class_label().as_deref(), Some("Form 3 East"));
    }

    #[test]
    fn empty_query_is_empty_object() {
        assert_eq!(
            serde_json::to_value(TeacherQuery::default()).unwrap(),
            serde_json::json!({})
        );
    }
}
