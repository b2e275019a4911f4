use contracts::domain::a004_remark::aggregate::{Remark, RemarkAuthor, RemarkDto};
use leptos::prelude::*;

use crate::shared::components::ui::TextareaField;
use crate::shared::modal_form::{FormHandle, FormState};

pub const REMARK: &str = "remark";

pub fn initial_values(remark: Option<&Remark>) -> FormState {
    FormState::new().with(REMARK, remark.map(|r| r.remark.clone()).unwrap_or_default())
}

/// Grade and author are fixed by the row being edited; only the text changes.
pub fn to_dto(remark: &Remark, values: &FormState) -> RemarkDto {
    RemarkDto {
        grade: remark.grade.clone(),
        remark: values.text(REMARK).trim().to_string(),
        remark_type: remark.remark_type,
    }
}

pub fn edit_title(remark: Option<&Remark>) -> String {
    match remark {
        Some(r) => format!("{} remark for grade {}", author_title(r.remark_type), r.grade),
        None => String::new(),
    }
}

fn author_title(author: RemarkAuthor) -> &'static str {
    match author {
        RemarkAuthor::ClassTeacher => "Class teacher's",
        RemarkAuthor::Principal => "Principal's",
    }
}

#[component]
pub fn RemarkFields(form: FormHandle) -> impl IntoView {
    view! { <TextareaField form=form name=REMARK label="Remark" rows=5 required=true /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remark() -> Remark {
        Remark {
            id: 3,
            grade: "B+".into(),
            remark: "Good work, aim higher".into(),
            remark_type: RemarkAuthor::Principal,
        }
    }

    #[test]
    fn dto_keeps_grade_and_author() {
        let values = FormState::new().with(REMARK, "  Very good  ");
        let dto = to_dto(&remark(), &values);
        assert_eq!(dto.grade, "B+");
        assert_eq!(dto.remark_type, RemarkAuthor::Principal);
        assert_eq!(dto.remark, "Very good");
    }

    #[test]
    fn empty_remark_is_rejected() {
        let values = FormState::new().with(REMARK, "");
        assert_eq!(
            to_dto(&remark(), &values).validate(),
            Err("Please enter remark".into())
        );
    }

    #[test]
    fn title_names_author_and_grade() {
        assert_eq!(edit_title(Some(&remark())), "Principal's remark for grade B+");
    }
}
