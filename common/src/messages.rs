use serde::{Deserialize, Serialize};

use crate::utils::get_current_time_millis;

/// A validated contact form entry, stamped when it is handed to the store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
    timestamp: i64,
}

impl Submission {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self::with_timestamp(name, email, message, get_current_time_millis())
    }

    pub fn with_timestamp(name: String, email: String, message: String, timestamp: i64) -> Self {
        Self {
            name,
            email,
            message,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
