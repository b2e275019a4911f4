//! Student add/edit form and read-only profile.

use contracts::domain::a002_student::aggregate::{Student, StudentDto};
use leptos::prelude::*;

use crate::shared::components::ui::{SelectField, TextField};
use crate::shared::date_utils::{format_optional_date, parse_input_date, to_input_date};
use crate::shared::modal_form::{FormHandle, FormState};
use crate::shared::options::{self, Choice};

pub const ADM_NO: &str = "adm_no";
pub const FIRST_NAME: &str = "first_name";
pub const OTHER_NAMES: &str = "other_names";
pub const GENDER: &str = "gender";
pub const FORM: &str = "form";
pub const STREAM: &str = "stream";
pub const YEAR: &str = "year";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const GUARDIAN_NAME: &str = "guardian_name";
pub const GUARDIAN_PHONE: &str = "guardian_phone";
pub const KCPE_MARKS: &str = "kcpe_marks";

/// Class a new student is placed in unless the user changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub form: u8,
    pub year: i32,
    pub stream: Option<String>,
}

pub fn initial_values(student: Option<&Student>, placement: &Placement) -> FormState {
    match student {
        Some(s) => FormState::new()
            .with(ADM_NO, s.adm_no.clone())
            .with(FIRST_NAME, s.first_name.clone())
            .with(OTHER_NAMES, s.other_names.clone())
            .with(GENDER, s.gender.clone())
            .with(FORM, s.form.to_string())
            .with(STREAM, s.stream.clone())
            .with(YEAR, f64::from(s.year))
            .with(DATE_OF_BIRTH, to_input_date(s.date_of_birth.as_ref()))
            .with(GUARDIAN_NAME, s.guardian_name.clone().unwrap_or_default())
            .with(GUARDIAN_PHONE, s.guardian_phone.clone().unwrap_or_default())
            .with(
                KCPE_MARKS,
                s.kcpe_marks.map(|m| m.to_string()).unwrap_or_default(),
            ),
        None => FormState::new()
            .with(ADM_NO, "")
            .with(FIRST_NAME, "")
            .with(OTHER_NAMES, "")
            .with(GENDER, "")
            .with(FORM, placement.form.to_string())
            .with(STREAM, placement.stream.clone().unwrap_or_default())
            .with(YEAR, f64::from(placement.year))
            .with(DATE_OF_BIRTH, "")
            .with(GUARDIAN_NAME, "")
            .with(GUARDIAN_PHONE, "")
            .with(KCPE_MARKS, ""),
    }
}

/// Converts the form into a request body. Malformed numbers and dates are
/// reported here; required fields are checked by [`StudentDto::validate`].
pub fn to_dto(values: &FormState) -> Result<StudentDto, String> {
    let kcpe_marks = match values.opt_text(KCPE_MARKS) {
        None => None,
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| "KCPE marks must be a whole number".to_string())?,
        ),
    };
    let year = values
        .number(YEAR)
        .filter(|y| y.fract() == 0.0)
        .map(|y| y as i32)
        .ok_or_else(|| "Please enter a valid year".to_string())?;

    Ok(StudentDto {
        adm_no: values.text(ADM_NO).trim().to_string(),
        first_name: values.text(FIRST_NAME).trim().to_string(),
        other_names: values.text(OTHER_NAMES).trim().to_string(),
        gender: values.text(GENDER),
        form: values.text(FORM).parse().unwrap_or(0),
        stream: values.text(STREAM),
        year,
        date_of_birth: parse_input_date(&values.text(DATE_OF_BIRTH))?,
        guardian_name: values.opt_text(GUARDIAN_NAME),
        guardian_phone: values.opt_text(GUARDIAN_PHONE),
        kcpe_marks,
    })
}

/// Parses and validates in one step.
pub fn checked_dto(values: &FormState) -> Result<StudentDto, String> {
    let dto = to_dto(values)?;
    dto.validate()?;
    Ok(dto)
}

#[component]
pub fn StudentFields(form: FormHandle, #[prop(into)] streams: Signal<Vec<Choice>>) -> impl IntoView {
    view! {
        <div class="form__grid">
            <TextField form=form name=ADM_NO label="Admission number" required=true />
            <SelectField form=form name=GENDER label="Gender" options=options::gender_options() required=true />
            <TextField form=form name=FIRST_NAME label="First name" required=true />
            <TextField form=form name=OTHER_NAMES label="Other names" />
            <SelectField form=form name=FORM label="Form" options=options::form_options() required=true />
            <SelectField form=form name=STREAM label="Stream" options=streams required=true />
            <TextField form=form name=YEAR label="Year" input_type="number" step="1" />
            <TextField form=form name=DATE_OF_BIRTH label="Date of birth" input_type="date" />
            <TextField form=form name=GUARDIAN_NAME label="Guardian name" />
            <TextField form=form name=GUARDIAN_PHONE label="Guardian phone" input_type="tel" />
            <TextField form=form name=KCPE_MARKS label="KCPE marks" input_type="number" step="1" />
        </div>
    }
}

#[component]
pub fn StudentProfile(student: Student) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = vec![
        ("Admission number", student.adm_no.clone()),
        ("Name", student.full_name()),
        ("Gender", student.gender.clone()),
        ("Class", format!("Form {} {}", student.form, student.stream)),
        ("Year", student.year.to_string()),
        ("Date of birth", format_optional_date(student.date_of_birth.as_ref())),
        ("Guardian", student.guardian_name.clone().unwrap_or_default()),
        ("Guardian phone", student.guardian_phone.clone().unwrap_or_default()),
        (
            "KCPE marks",
            student.kcpe_marks.map(|m| m.to_string()).unwrap_or_default(),
        ),
    ];

    view! {
        <dl class="details-list">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    let value = if value.is_empty() { "\u{2014}".to_string() } else { value };
                    view! {
                        <dt class="details-list__label">{label}</dt>
                        <dd class="details-list__value">{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn placement() -> Placement {
        Placement {
            form: 2,
            year: 2025,
            stream: Some("North".into()),
        }
    }

    fn student() -> Student {
        Student {
            id: 11,
            adm_no: "4821".into(),
            first_name: "Achieng".into(),
            other_names: "Odhiambo".into(),
            gender: "Female".into(),
            form: 3,
            stream: "West".into(),
            year: 2024,
            date_of_birth: NaiveDate::from_ymd_opt(2009, 5, 2),
            guardian_name: Some("Mary Odhiambo".into()),
            guardian_phone: None,
            kcpe_marks: Some(388),
        }
    }

    #[test]
    fn new_student_is_placed_in_filtered_class() {
        let values = initial_values(None, &placement());
        assert_eq!(values.text(FORM), "2");
        assert_eq!(values.text(STREAM), "North");
        assert_eq!(values.text(YEAR), "2025");
        assert_eq!(values.text(ADM_NO), "");
    }

    #[test]
    fn edit_round_trips_through_the_form() {
        let s = student();
        let dto = to_dto(&initial_values(Some(&s), &placement())).unwrap();
        assert_eq!(dto, StudentDto::from(&s));
    }

    #[test]
    fn missing_first_name_is_reported() {
        let mut values = initial_values(None, &placement());
        values.set(ADM_NO, "100");
        values.set(GENDER, "Male");
        assert_eq!(checked_dto(&values), Err("Please enter first name".into()));
    }

    #[test]
    fn malformed_marks_are_rejected_before_validation() {
        let mut values = initial_values(Some(&student()), &placement());
        values.set(KCPE_MARKS, "three hundred");
        assert_eq!(
            to_dto(&values),
            Err("KCPE marks must be a whole number".into())
        );
    }

    #[test]
    fn numeric_year_from_input_is_accepted() {
        let mut values = initial_values(Some(&student()), &placement());
        values.set(YEAR, 2026.0);
        assert_eq!(to_dto(&values).unwrap().year, 2026);
    }
}
