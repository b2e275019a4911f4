use serde::{Deserialize, Serialize};

/// Who a report-form remark is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkAuthor {
    #[default]
    ClassTeacher,
    Principal,
}

impl RemarkAuthor {
    pub const ALL: [RemarkAuthor; 2] = [RemarkAuthor::ClassTeacher, RemarkAuthor::Principal];

    pub fn as_str(&self) -> &'static str {
        match self {
            RemarkAuthor::ClassTeacher => "class_teacher",
            RemarkAuthor::Principal => "principal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RemarkAuthor::ClassTeacher => "Class teacher",
            RemarkAuthor::Principal => "Principal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

/// Remark printed on report forms for a given mean grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remark {
    #[serde(alias = "_id")]
    pub id: i64,
    pub grade: String,
    pub remark: String,
    #[serde(default)]
    pub remark_type: RemarkAuthor,
}

/// Body of `PUT /remark/updateremark/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemarkDto {
    pub grade: String,
    pub remark: String,
    pub remark_type: RemarkAuthor,
}

impl RemarkDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.remark.trim().is_empty() {
            return Err("Please enter remark".into());
        }
        Ok(())
    }
}

/// Body of `POST /remark/getremarks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkQuery {
    pub remark_type: RemarkAuthor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_round_trips_through_its_wire_name() {
        for author in RemarkAuthor::ALL {
            assert_eq!(RemarkAuthor::parse(author.as_str()), Some(author));
            assert_eq!(
                serde_json::to_value(author).unwrap(),
                serde_json::Value::String(author.as_str().to_string())
            );
        }
        assert_eq!(RemarkAuthor::parse("deputy"), None);
    }

    #[test]
    fn missing_remark_type_defaults_to_class_teacher() {
        let r: Remark = serde_json::from_str(r#"{"id":1,"grade":"A","remark":"Excellent"}"#).unwrap();
        assert_eq!(r.remark_type, RemarkAuthor::ClassTeacher);
    }
}
