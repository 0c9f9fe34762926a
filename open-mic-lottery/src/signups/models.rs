use crate::utils::serde::deserialize_marked_flag;
use serde::Deserialize;

pub const COMEDIAN_SIGNUP: &str = "comedian";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "signup_type",
    "done",
    "here",
    "first 5",
    "early",
    "full_name",
];

/// One line of the signup sheet. Any other column of the sheet is ignored.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SignupRow {
    pub full_name: String,
    pub signup_type: String,
    /// Already went up on stage tonight.
    #[serde(deserialize_with = "deserialize_marked_flag")]
    pub done: bool,
    /// Checked in at the venue.
    #[serde(deserialize_with = "deserialize_marked_flag")]
    pub here: bool,
    #[serde(rename = "first 5", deserialize_with = "deserialize_marked_flag")]
    pub first_5: bool,
    #[serde(deserialize_with = "deserialize_marked_flag")]
    pub early: bool,
}

#[cfg(test)]
impl SignupRow {
    pub fn dummy(full_name: &str, first_5: bool, early: bool) -> Self {
        Self {
            full_name: full_name.to_string(),
            signup_type: COMEDIAN_SIGNUP.to_string(),
            done: false,
            here: true,
            first_5,
            early,
        }
    }
}
