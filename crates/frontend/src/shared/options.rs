//! Static dropdown data shared by forms and filters.
//!
//! Every list is `(value, label)` pairs, the shape taken by `Select`,
//! `SelectField` and `RadioGroup`.

use chrono::Datelike;
use contracts::domain::a004_remark::aggregate::RemarkAuthor;
use contracts::domain::a007_photo::aggregate::PhotoFolder;

pub type Choice = (String, String);

/// Forms (grades) taught at the school.
pub const FORMS: [u8; 4] = [1, 2, 3, 4];

pub const TERMS: [u8; 3] = [1, 2, 3];

/// Number of academic years offered in year pickers, newest first.
pub const YEAR_SPAN: i32 = 6;

pub const SCHOOL_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub const PERIODS_PER_DAY: u8 = 8;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn form_options() -> Vec<Choice> {
    FORMS
        .iter()
        .map(|f| (f.to_string(), format!("Form {f}")))
        .collect()
}

pub fn term_options() -> Vec<Choice> {
    TERMS
        .iter()
        .map(|t| (t.to_string(), format!("Term {t}")))
        .collect()
}

pub fn year_options_from(newest: i32) -> Vec<Choice> {
    (0..YEAR_SPAN)
        .map(|offset| newest - offset)
        .map(|y| (y.to_string(), y.to_string()))
        .collect()
}

pub fn year_options() -> Vec<Choice> {
    year_options_from(current_year())
}

pub fn gender_options() -> Vec<Choice> {
    ["Male", "Female"]
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect()
}

pub fn remark_author_options() -> Vec<Choice> {
    RemarkAuthor::ALL
        .iter()
        .map(|a| (a.as_str().to_string(), a.label().to_string()))
        .collect()
}

pub fn photo_folder_options() -> Vec<Choice> {
    PhotoFolder::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect()
}

/// Stream names as choices where the value is the name itself.
pub fn name_options<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Choice> {
    names
        .into_iter()
        .map(|n| (n.to_string(), n.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_forms() {
        let forms = form_options();
        assert_eq!(forms.len(), 4);
        assert_eq!(forms[0], ("1".to_string(), "Form 1".to_string()));
    }

    #[test]
    fn years_newest_first() {
        let years = year_options_from(2026);
        assert_eq!(years.len(), YEAR_SPAN as usize);
        assert_eq!(years[0].0, "2026");
        assert_eq!(years[5].0, "2021");
    }

    #[test]
    fn remark_authors_use_wire_values() {
        let values: Vec<_> = remark_author_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, ["class_teacher", "principal"]);
    }

    #[test]
    fn folders_cover_all_variants() {
        assert_eq!(photo_folder_options().len(), PhotoFolder::ALL.len());
    }
}
