use common::constants::{EMAIL_INPUT_ID, MESSAGE_INPUT_ID, NAME_INPUT_ID};

use crate::{
    traits::{FormDocument, InputElement},
    validity::{ConstrainedInput, InputType},
};

/// The contact form as declared in the page markup
#[derive(Debug, Clone)]
pub struct ContactPage {
    inputs: Vec<ConstrainedInput>,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            inputs: vec![
                ConstrainedInput::new(NAME_INPUT_ID, InputType::Text).required(),
                ConstrainedInput::new(EMAIL_INPUT_ID, InputType::Email).required(),
                ConstrainedInput::new(MESSAGE_INPUT_ID, InputType::TextArea).required(),
            ],
        }
    }

    pub fn with_values(name: &str, email: &str, message: &str) -> Self {
        let mut page = Self::new();

        page.fill(NAME_INPUT_ID, name);
        page.fill(EMAIL_INPUT_ID, email);
        page.fill(MESSAGE_INPUT_ID, message);

        page
    }

    /// Returns false when the page has no input with `id`
    pub fn fill(&mut self, id: &str, value: &str) -> bool {
        let Some(input) = self.inputs.iter_mut().find(|input| input.id() == id) else {
            return false;
        };

        input.set_value(value);

        true
    }
}

impl FormDocument for ContactPage {
    fn get_element_by_id(&self, id: &str) -> Option<&dyn InputElement> {
        self.inputs
            .iter()
            .find(|input| input.id() == id)
            .map(|input| input as &dyn InputElement)
    }
}

#[cfg(test)]
mod tests {
    use common::constants::{EMAIL_INPUT_ID, MESSAGE_INPUT_ID, NAME_INPUT_ID};

    use super::ContactPage;
    use crate::{traits::FormDocument, validation::validate};

    #[test]
    fn declares_the_three_inputs() {
        let page = ContactPage::new();

        for id in [NAME_INPUT_ID, EMAIL_INPUT_ID, MESSAGE_INPUT_ID] {
            let input = page.get_element_by_id(id).unwrap();

            assert_eq!(input.value(), "");
            assert!(input.validity().value_missing, "{id} should be required");
        }
    }

    #[test]
    fn fill_sets_value() {
        let page = ContactPage::with_values("Jo", "jo@example.com", "Hi there");

        assert_eq!(page.get_element_by_id(NAME_INPUT_ID).unwrap().value(), "Jo");
        assert_eq!(
            page.get_element_by_id(EMAIL_INPUT_ID).unwrap().value(),
            "jo@example.com"
        );
        assert_eq!(
            page.get_element_by_id(MESSAGE_INPUT_ID).unwrap().value(),
            "Hi there"
        );
    }

    #[test]
    fn fill_unknown_id() {
        let mut page = ContactPage::new();

        assert!(!page.fill("phone_input", "555"));
        assert!(page.get_element_by_id("phone_input").is_none());
    }

    #[test]
    fn email_input_checks_type() {
        let page = ContactPage::with_values("Jo", "not an email", "Hi there");

        let email = page.get_element_by_id(EMAIL_INPUT_ID).unwrap();

        assert!(email.validity().type_mismatch);
    }

    #[test]
    fn message_line_breaks_count_once() {
        let page = ContactPage::with_values("Jo", "jo@example.com", "ab\r\nc");

        let message = page.get_element_by_id(MESSAGE_INPUT_ID).unwrap();
        assert_eq!(message.value(), "ab\nc");

        assert!(!validate(
            page.get_element_by_id(NAME_INPUT_ID).unwrap(),
            page.get_element_by_id(EMAIL_INPUT_ID).unwrap(),
            message,
        ));
    }
}
