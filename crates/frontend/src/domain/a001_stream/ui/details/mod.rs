use contracts::domain::a001_stream::aggregate::{Stream, StreamDto};
use leptos::prelude::*;

use crate::shared::components::ui::TextField;
use crate::shared::modal_form::{FormHandle, FormState};

pub const STREAM_NAME: &str = "stream_name";

pub fn initial_values(stream: Option<&Stream>) -> FormState {
    FormState::new().with(
        STREAM_NAME,
        stream.map(|s| s.stream_name.clone()).unwrap_or_default(),
    )
}

pub fn to_dto(values: &FormState) -> StreamDto {
    StreamDto::new(values.text(STREAM_NAME))
}

#[component]
pub fn StreamFields(form: FormHandle) -> impl IntoView {
    view! {
        <TextField form=form name=STREAM_NAME label="Stream name" placeholder="e.g. North" required=true />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_starts_blank() {
        assert_eq!(initial_values(None).text(STREAM_NAME), "");
    }

    #[test]
    fn edit_form_is_seeded_from_record() {
        let stream = Stream {
            id: 4,
            stream_name: "East".into(),
        };
        let values = initial_values(Some(&stream));
        assert_eq!(to_dto(&values), StreamDto::new("East"));
    }

    #[test]
    fn blank_name_fails_validation() {
        let values = FormState::new().with(STREAM_NAME, "   ");
        assert_eq!(
            to_dto(&values).validate(),
            Err("Please enter stream name".to_string())
        );
    }
}
