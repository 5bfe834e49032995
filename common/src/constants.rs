pub const COLLECTION_MESSAGES_NAME: &str = "messages";

pub const NAME_INPUT_ID: &str = "name_input";
pub const EMAIL_INPUT_ID: &str = "email_input";
pub const MESSAGE_INPUT_ID: &str = "msg_input";
pub const SUBMIT_CONTROL_ID: &str = "submit_msg";

pub const MESSAGE_MIN_LENGTH: usize = 5;

pub const INVALID_FORM_NOTICE: &str = "Please make sure all fields are valid and filled in.";
pub const THANKS_NOTICE: &str =
    "Thanks for sending a message. I'll try and get back to you as soon as possible.";
