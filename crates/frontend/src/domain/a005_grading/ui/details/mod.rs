use contracts::domain::a005_grading::aggregate::{GradeBand, GradeBandDto};
use leptos::prelude::*;

use crate::shared::components::ui::TextField;
use crate::shared::modal_form::{FormHandle, FormState};

pub const GRADE: &str = "grade";
pub const MIN_MARK: &str = "min_mark";
pub const MAX_MARK: &str = "max_mark";
pub const POINTS: &str = "points";

pub fn initial_values(band: Option<&GradeBand>) -> FormState {
    match band {
        Some(b) => FormState::new()
            .with(GRADE, b.grade.clone())
            .with(MIN_MARK, b.min_mark)
            .with(MAX_MARK, b.max_mark)
            .with(POINTS, f64::from(b.points)),
        None => FormState::new(),
    }
}

pub fn to_dto(values: &FormState) -> Result<GradeBandDto, String> {
    let mark = |name: &str, label: &str| {
        values
            .number(name)
            .ok_or_else(|| format!("Please enter {label}"))
    };
    let points = mark(POINTS, "points")?;
    if points < 0.0 || points.fract() != 0.0 {
        return Err("Points must be a whole number".into());
    }
    let dto = GradeBandDto {
        grade: values.text(GRADE).trim().to_string(),
        min_mark: mark(MIN_MARK, "minimum mark")?,
        max_mark: mark(MAX_MARK, "maximum mark")?,
        points: points.min(f64::from(u8::MAX)) as u8,
    };
    dto.validate()?;
    Ok(dto)
}

#[component]
pub fn GradeBandFields(form: FormHandle) -> impl IntoView {
    view! {
        <TextField form=form name=GRADE label="Grade" required=true />
        <div class="form__grid">
            <TextField form=form name=MIN_MARK label="Minimum mark" input_type="number" step="0.5" required=true />
            <TextField form=form name=MAX_MARK label="Maximum mark" input_type="number" step="0.5" required=true />
        </div>
        <TextField form=form name=POINTS label="Points" input_type="number" step="1" required=true />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> GradeBand {
        GradeBand {
            id: 2,
            grade: "A-".into(),
            min_mark: 75.0,
            max_mark: 79.0,
            points: 11,
        }
    }

    #[test]
    fn edit_values_round_trip() {
        let dto = to_dto(&initial_values(Some(&band()))).unwrap();
        assert_eq!(dto.grade, "A-");
        assert_eq!(dto.min_mark, 75.0);
        assert_eq!(dto.points, 11);
    }

    #[test]
    fn text_from_number_inputs_is_parsed() {
        let values = initial_values(Some(&band()))
            .with(MIN_MARK, "70")
            .with(MAX_MARK, "74.5");
        let dto = to_dto(&values).unwrap();
        assert_eq!((dto.min_mark, dto.max_mark), (70.0, 74.5));
    }

    #[test]
    fn inverted_band_is_rejected() {
        let values = initial_values(Some(&band())).with(MIN_MARK, 80.0);
        assert_eq!(
            to_dto(&values),
            Err("Minimum mark cannot exceed maximum mark".into())
        );
    }

    #[test]
    fn blank_mark_is_reported() {
        let values = initial_values(Some(&band())).with(MAX_MARK, "");
        assert_eq!(to_dto(&values), Err("Please enter maximum mark".into()));
    }

    #[test]
    fn fractional_points_are_rejected() {
        let values = initial_values(Some(&band())).with(POINTS, 10.5);
        assert_eq!(to_dto(&values), Err("Points must be a whole number".into()));
    }
}
