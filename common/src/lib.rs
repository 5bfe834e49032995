pub mod constants;
pub mod deserialize_empty_string;
pub mod errors;
pub mod messages;
pub mod traits;
pub mod utils;
