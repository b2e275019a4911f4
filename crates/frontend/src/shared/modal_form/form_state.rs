use std::collections::BTreeMap;

/// Current value of one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Number(f64),
}

impl FieldValue {
    /// Coerces a raw DOM value the way the field's input type implies:
    /// checkboxes become booleans, number/range inputs become numbers when
    /// they parse, everything else stays the raw string.
    pub fn from_input(input_type: &str, raw: String, checked: bool) -> Self {
        match input_type {
            "checkbox" => FieldValue::Bool(checked),
            "number" | "range" => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => FieldValue::Number(n),
                _ => FieldValue::Text(raw),
            },
            _ => FieldValue::Text(raw),
        }
    }

    /// String form used to fill `value` attributes.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            FieldValue::Number(n) => n.to_string(),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => matches!(s.as_str(), "true" | "on" | "1"),
            FieldValue::Number(n) => *n != 0.0,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Bool(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Field name → value map owned by an open modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for `initial_values`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text of a field; missing fields read as empty.
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    /// Trimmed text, `None` when blank.
    pub fn opt_text(&self, name: &str) -> Option<String> {
        let text = self.text(name);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name).map(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_number)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lifecycle of a modal's form state.
///
/// The state is seeded from the caller's initial values only on a
/// closed→open transition; initial values that change while the modal is
/// already open are ignored until it is closed and reopened.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    open: bool,
    values: FormState,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current visibility. Returns `true` when this call opened
    /// the session and reseeded it.
    pub fn sync_open(&mut self, is_open: bool, initial: &FormState) -> bool {
        let opened = is_open && !self.open;
        if opened {
            self.values = initial.clone();
        }
        if !is_open && self.open {
            self.values = FormState::default();
        }
        self.open = is_open;
        opened
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Updates exactly one field.
    pub fn change(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.set(name, value);
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> FormState {
        FormState::new().with("a", "1").with("b", "2")
    }

    #[test]
    fn change_then_submit_reflects_edit() {
        let mut session = FormSession::new();
        assert!(session.sync_open(true, &initial()));
        session.change("a", FieldValue::from("9"));
        assert_eq!(session.values(), &FormState::new().with("a", "9").with("b", "2"));
    }

    #[test]
    fn reopening_resets_to_initial_values() {
        let mut session = FormSession::new();
        session.sync_open(true, &initial());
        session.change("a", FieldValue::from("9"));
        session.sync_open(false, &initial());
        assert!(session.values().is_empty());
        assert!(session.sync_open(true, &initial()));
        assert_eq!(session.values().text("a"), "1");
    }

    #[test]
    fn initial_values_changing_while_open_are_ignored() {
        let mut session = FormSession::new();
        session.sync_open(true, &initial());
        session.change("b", FieldValue::from("7"));
        let replaced = FormState::new().with("a", "100");
        assert!(!session.sync_open(true, &replaced));
        assert_eq!(session.values().text("a"), "1");
        assert_eq!(session.values().text("b"), "7");
    }

    #[test]
    fn change_touches_only_one_key() {
        let mut session = FormSession::new();
        session.sync_open(true, &initial());
        session.change("b", FieldValue::Bool(true));
        assert_eq!(session.values().get("a"), Some(&FieldValue::from("1")));
        assert_eq!(session.values().len(), 2);
    }

    #[test]
    fn input_coercion_follows_input_type() {
        assert_eq!(
            FieldValue::from_input("checkbox", "on".into(), false),
            FieldValue::Bool(false)
        );
        assert_eq!(
            FieldValue::from_input("number", "42".into(), false),
            FieldValue::Number(42.0)
        );
        assert_eq!(
            FieldValue::from_input("number", "".into(), false),
            FieldValue::Text(String::new())
        );
        assert_eq!(
            FieldValue::from_input("text", "42".into(), true),
            FieldValue::Text("42".into())
        );
    }

    #[test]
    fn typed_accessors() {
        let state = FormState::new()
            .with("points", 12.0)
            .with("min", "65.5")
            .with("active", true)
            .with("name", "  ");
        assert_eq!(state.text("points"), "12");
        assert_eq!(state.number("min"), Some(65.5));
        assert!(state.flag("active"));
        assert!(!state.flag("missing"));
        assert_eq!(state.opt_text("name"), None);
        assert_eq!(state.text("missing"), "");
    }
}
