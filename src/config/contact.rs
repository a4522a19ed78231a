use serde::{Deserialize, Serialize};

/// Contact shown on a tournament page when the record carries none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultContact {
    pub person: String,
    pub phone: String,
    pub email: String,
}

impl Default for DefaultContact {
    fn default() -> Self {
        Self {
            person: "Tournament Director".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "tournaments@knightsacademy.in".to_string(),
        }
    }
}

/// Images used when a record has neither `images` nor `heroImage`
pub fn default_images() -> Vec<String> {
    vec![
        "/images/tournaments/default-1.jpg".to_string(),
        "/images/tournaments/default-2.jpg".to_string(),
        "/images/tournaments/default-3.jpg".to_string(),
    ]
}

pub const NOTES_PLACEHOLDER: &str = "fee/notes to be announced";
