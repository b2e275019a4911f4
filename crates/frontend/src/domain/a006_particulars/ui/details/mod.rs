use contracts::domain::a006_particulars::aggregate::SchoolParticulars;
use leptos::prelude::*;

use crate::shared::components::ui::{SelectField, TextField};
use crate::shared::modal_form::{FormHandle, FormState};
use crate::shared::options;

pub const SCHOOL_NAME: &str = "school_name";
pub const MOTTO: &str = "motto";
pub const POSTAL_ADDRESS: &str = "postal_address";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const PRINCIPAL: &str = "principal";
pub const CURRENT_TERM: &str = "current_term";
pub const CURRENT_YEAR: &str = "current_year";

pub fn initial_values(p: &SchoolParticulars) -> FormState {
    FormState::new()
        .with(SCHOOL_NAME, p.school_name.clone())
        .with(MOTTO, p.motto.clone())
        .with(POSTAL_ADDRESS, p.postal_address.clone())
        .with(PHONE, p.phone.clone())
        .with(EMAIL, p.email.clone())
        .with(PRINCIPAL, p.principal.clone())
        .with(CURRENT_TERM, p.current_term.to_string())
        .with(CURRENT_YEAR, f64::from(p.current_year))
}

/// Applies the form onto the stored record; fields without an input (logo)
/// are carried over unchanged.
pub fn apply(current: &SchoolParticulars, values: &FormState) -> Result<SchoolParticulars, String> {
    let current_year = values
        .number(CURRENT_YEAR)
        .filter(|y| y.fract() == 0.0 && *y > 0.0)
        .map(|y| y as i32)
        .ok_or_else(|| "Please enter a valid year".to_string())?;
    let updated = SchoolParticulars {
        school_name: values.text(SCHOOL_NAME).trim().to_string(),
        motto: values.text(MOTTO).trim().to_string(),
        postal_address: values.text(POSTAL_ADDRESS).trim().to_string(),
        phone: values.text(PHONE).trim().to_string(),
        email: values.text(EMAIL).trim().to_string(),
        principal: values.text(PRINCIPAL).trim().to_string(),
        current_term: values.text(CURRENT_TERM).parse().unwrap_or(0),
        current_year,
        logo: current.logo.clone(),
    };
    updated.validate()?;
    Ok(updated)
}

#[component]
pub fn ParticularsFields(form: FormHandle) -> impl IntoView {
    view! {
        <TextField form=form name=SCHOOL_NAME label="School name" required=true />
        <TextField form=form name=MOTTO label="Motto" />
        <div class="form__grid">
            <TextField form=form name=POSTAL_ADDRESS label="Postal address" />
            <TextField form=form name=PHONE label="Phone" input_type="tel" />
            <TextField form=form name=EMAIL label="Email" input_type="email" />
            <TextField form=form name=PRINCIPAL label="Principal" />
            <SelectField form=form name=CURRENT_TERM label="Current term" options=options::term_options() required=true />
            <TextField form=form name=CURRENT_YEAR label="Current year" input_type="number" step="1" required=true />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> SchoolParticulars {
        SchoolParticulars {
            school_name: "Kilimani Secondary".into(),
            current_year: 2025,
            logo: Some("uploads/school/logo.png".into()),
            ..Default::default()
        }
    }

    #[test]
    fn logo_survives_edit() {
        let values = initial_values(&stored()).with(MOTTO, "Strive to excel");
        let updated = apply(&stored(), &values).unwrap();
        assert_eq!(updated.motto, "Strive to excel");
        assert_eq!(updated.logo, stored().logo);
    }

    #[test]
    fn blank_school_name_is_rejected() {
        let values = initial_values(&stored()).with(SCHOOL_NAME, " ");
        assert_eq!(apply(&stored(), &values), Err("Please enter school name".into()));
    }

    #[test]
    fn bad_email_is_rejected() {
        let values = initial_values(&stored()).with(EMAIL, "office.example");
        assert_eq!(
            apply(&stored(), &values),
            Err("Please enter a valid email address".into())
        );
    }
}
