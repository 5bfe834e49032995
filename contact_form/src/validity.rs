use std::sync::LazyLock;

use regex::Regex;

use crate::traits::InputElement;

// valid e-mail address production from the HTML standard
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Expect e-mail regex to compile")
});

/// Native constraint flags of a single control
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
    pub pattern_mismatch: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.too_short
            || self.too_long
            || self.pattern_mismatch)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    TextArea,
}

impl InputType {
    fn sanitize(&self, value: &str) -> String {
        match self {
            InputType::Text => value.replace(['\r', '\n'], ""),
            InputType::Email => value
                .replace(['\r', '\n'], "")
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .to_string(),
            InputType::TextArea => value.replace("\r\n", "\n").replace('\r', "\n"),
        }
    }
}

/// An input carrying declarative constraints (`required`, `type`,
/// `minlength`, `maxlength`, `pattern`) and the current value
#[derive(Debug, Clone)]
pub struct ConstrainedInput {
    id: String,
    input_type: InputType,
    value: String,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl ConstrainedInput {
    pub fn new(id: impl Into<String>, input_type: InputType) -> Self {
        Self {
            id: id.into(),
            input_type,
            value: String::new(),
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// `pattern` has to match the whole value, like the HTML attribute
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(&format!("^(?:{pattern})$"))?);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = self.input_type.sanitize(value);
    }
}

impl InputElement for ConstrainedInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn validity(&self) -> ValidityState {
        if self.value.is_empty() {
            return ValidityState {
                value_missing: self.required,
                ..Default::default()
            };
        }

        // measured in UTF-16 code units, like the DOM
        let length = self.value.encode_utf16().count();

        ValidityState {
            value_missing: false,
            type_mismatch: matches!(self.input_type, InputType::Email)
                && !EMAIL_REGEX.is_match(&self.value),
            too_short: self.min_length.is_some_and(|min| length < min),
            too_long: self.max_length.is_some_and(|max| length > max),
            pattern_mismatch: !matches!(self.input_type, InputType::TextArea)
                && self
                    .pattern
                    .as_ref()
                    .is_some_and(|pattern| !pattern.is_match(&self.value)),
        }
    }
}
