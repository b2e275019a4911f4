pub mod fields;
pub mod radio;
pub mod select;

pub use fields::{CheckboxField, FieldError, SelectField, TextField, TextareaField};
pub use radio::RadioGroup;
pub use select::Select;
