use contracts::domain::a003_staff::aggregate::{Teacher, TeacherDto};
use leptos::prelude::*;

use crate::shared::components::ui::{CheckboxField, SelectField, TextField};
use crate::shared::modal_form::{FormHandle, FormState};
use crate::shared::options::{self, Choice};

pub const NAME: &str = "name";
pub const INITIALS: &str = "initials";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const SUBJECTS: &str = "subjects";
pub const IS_CLASS_TEACHER: &str = "is_class_teacher";
pub const CLASS_FORM: &str = "class_form";
pub const CLASS_STREAM: &str = "class_stream";

pub fn initial_values(teacher: Option<&Teacher>) -> FormState {
    let dto = teacher.map(TeacherDto::from).unwrap_or_default();
    FormState::new()
        .with(NAME, dto.name)
        .with(INITIALS, dto.initials)
        .with(PHONE, dto.phone.unwrap_or_default())
        .with(EMAIL, dto.email.unwrap_or_default())
        .with(SUBJECTS, dto.subjects.join(", "))
        .with(IS_CLASS_TEACHER, dto.is_class_teacher)
        .with(CLASS_FORM, dto.class_form.map(|f| f.to_string()).unwrap_or_default())
        .with(CLASS_STREAM, dto.class_stream.unwrap_or_default())
}

/// Subjects are typed as a comma separated list.
pub fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn to_dto(values: &FormState) -> TeacherDto {
    let is_class_teacher = values.flag(IS_CLASS_TEACHER);
    TeacherDto {
        name: values.text(NAME).trim().to_string(),
        initials: values.text(INITIALS).trim().to_uppercase(),
        phone: values.opt_text(PHONE),
        email: values.opt_text(EMAIL),
        subjects: parse_subjects(&values.text(SUBJECTS)),
        is_class_teacher,
        class_form: is_class_teacher
            .then(|| values.text(CLASS_FORM).parse().ok())
            .flatten(),
        class_stream: is_class_teacher
            .then(|| values.opt_text(CLASS_STREAM))
            .flatten(),
    }
}

#[component]
pub fn TeacherFields(form: FormHandle, #[prop(into)] streams: Signal<Vec<Choice>>) -> impl IntoView {
    view! {
        <div class="form__grid">
            <TextField form=form name=NAME label="Full name" required=true />
            <TextField form=form name=INITIALS label="Initials" required=true />
            <TextField form=form name=PHONE label="Phone" input_type="tel" />
            <TextField form=form name=EMAIL label="Email" input_type="email" />
        </div>
        <TextField form=form name=SUBJECTS label="Subjects" placeholder="Mathematics, Physics" />
        <CheckboxField form=form name=IS_CLASS_TEACHER label="Class teacher" />
        <Show when=move || form.checked(IS_CLASS_TEACHER)>
            <div class="form__grid">
                <SelectField form=form name=CLASS_FORM label="Form" options=options::form_options() required=true />
                <SelectField form=form name=CLASS_STREAM label="Stream" options=streams />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_split_on_commas() {
        assert_eq!(
            parse_subjects(" Mathematics, ,Physics ,"),
            vec!["Mathematics".to_string(), "Physics".to_string()]
        );
    }

    #[test]
    fn class_fields_dropped_when_not_class_teacher() {
        let values = initial_values(None)
            .with(NAME, "Jane Otieno")
            .with(INITIALS, "jo")
            .with(CLASS_FORM, "3");
        let dto = to_dto(&values);
        assert_eq!(dto.initials, "JO");
        assert!(!dto.is_class_teacher);
        assert_eq!(dto.class_form, None);
    }

    #[test]
    fn checkbox_enables_class_assignment() {
        let values = initial_values(None)
            .with(NAME, "Peter Mwangi")
            .with(INITIALS, "PM")
            .with(IS_CLASS_TEACHER, true)
            .with(CLASS_FORM, "2")
            .with(CLASS_STREAM, "East");
        let dto = to_dto(&values);
        assert_eq!(dto.class_form, Some(2));
        assert_eq!(dto.class_stream.as_deref(), Some("East"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn class_teacher_without_form_is_invalid() {
        let values = initial_values(None)
            .with(NAME, "Peter Mwangi")
            .with(INITIALS, "PM")
            .with(IS_CLASS_TEACHER, true);
        assert_eq!(
            to_dto(&values).validate(),
            Err("Please select the class for the class teacher".into())
        );
    }
}
