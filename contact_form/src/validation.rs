use common::constants::MESSAGE_MIN_LENGTH;

use crate::traits::InputElement;

/// True only when every field passes its native constraints and the
/// message is at least `MESSAGE_MIN_LENGTH` UTF-16 code units long
pub fn validate(
    name: &dyn InputElement,
    email: &dyn InputElement,
    message: &dyn InputElement,
) -> bool {
    if !name.validity().valid() {
        return false;
    }

    if !email.validity().valid() {
        return false;
    }

    if !message.validity().valid() {
        return false;
    }

    message.value().encode_utf16().count() >= MESSAGE_MIN_LENGTH
}
