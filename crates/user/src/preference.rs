use std::str::FromStr;

use canteen_shared::{DietaryPreference, FieldErrors};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const MAX_ALLERGY_NOTE_CHARS: usize = 40;

const JSON_NAMES: &[(&str, &str)] = &[
    ("dietary_preference", "dietaryPreference"),
    ("allergy_notes", "allergyNotes"),
    ("additional_notes", "additionalNotes"),
    ("auto_opt_in", "autoOptIn"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub user_id: String,
    pub dietary_preference: DietaryPreference,
    pub allergy_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub auto_opt_in: bool,
}

impl UserPreference {
    /// The record stored for a user on first access: standard diet, no
    /// allergies or notes, opted in to meals automatically.
    pub fn default_for(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            dietary_preference: DietaryPreference::Standard,
            allergy_notes: Vec::new(),
            additional_notes: None,
            auto_opt_in: true,
        }
    }
}

/// Preference payload as received from a client.
///
/// `dietary_preference` stays a string so that unknown values are reported as
/// a field error instead of failing deserialization.
#[derive(Deserialize, Serialize, Validate, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceInput {
    pub dietary_preference: String,

    #[serde(default)]
    #[validate(
        length(max = 8, message = "At most 8 allergy notes are allowed"),
        custom(function = "validate_allergy_notes")
    )]
    pub allergy_notes: Vec<String>,

    #[validate(length(max = 160, message = "Must be at most 160 characters"))]
    pub additional_notes: Option<String>,

    pub auto_opt_in: bool,
}

#[allow(clippy::ptr_arg)]
fn validate_allergy_notes(notes: &Vec<String>) -> Result<(), ValidationError> {
    let valid = notes.iter().all(|note| {
        let len = note.chars().count();
        (1..=MAX_ALLERGY_NOTE_CHARS).contains(&len)
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("allergy_note_length")
            .with_message("Each allergy note must be 1 to 40 characters".into()))
    }
}

impl PreferenceInput {
    /// Validates every field and builds the full record to store.
    ///
    /// All failures are reported together. `additional_notes` is trimmed and
    /// dropped when blank.
    pub fn into_preference(
        self,
        user_id: impl Into<String>,
    ) -> canteen_shared::Result<UserPreference> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from_validation(&e, JSON_NAMES),
        };

        let dietary_preference = DietaryPreference::from_str(self.dietary_preference.trim())
            .map_err(|_| {
                errors.insert(
                    "dietaryPreference",
                    "Must be one of standard, vegetarian, vegan, jain",
                );
            })
            .ok();

        let Some(dietary_preference) = dietary_preference.filter(|_| errors.is_empty()) else {
            return Err(errors.into());
        };

        Ok(UserPreference {
            user_id: user_id.into(),
            dietary_preference,
            allergy_notes: self.allergy_notes,
            additional_notes: self
                .additional_notes
                .map(|n| n.trim().to_owned())
                .filter(|n| !n.is_empty()),
            auto_opt_in: self.auto_opt_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(diet: &str) -> PreferenceInput {
        PreferenceInput {
            dietary_preference: diet.to_owned(),
            allergy_notes: vec!["peanuts".to_owned()],
            additional_notes: Some("  less spicy please  ".to_owned()),
            auto_opt_in: false,
        }
    }

    #[test]
    fn valid_input_builds_record() {
        let pref = input("vegan").into_preference("u1").unwrap();

        assert_eq!(pref.user_id, "u1");
        assert_eq!(pref.dietary_preference, DietaryPreference::Vegan);
        assert_eq!(pref.additional_notes.as_deref(), Some("less spicy please"));
        assert!(!pref.auto_opt_in);
    }

    #[test]
    fn unknown_diet_is_a_field_error() {
        let err = input("keto").into_preference("u1").unwrap_err();
        let fields = err.field_errors().unwrap();

        assert!(fields.contains("dietaryPreference"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn too_many_allergy_notes() {
        let mut payload = input("standard");
        payload.allergy_notes = (0..9).map(|i| format!("item {i}")).collect();

        let err = payload.into_preference("u1").unwrap_err();
        assert!(err.field_errors().unwrap().contains("allergyNotes"));
    }

    #[test]
    fn allergy_note_length_limits() {
        let mut payload = input("standard");
        payload.allergy_notes = vec!["x".repeat(40)];
        assert!(payload.clone().into_preference("u1").is_ok());

        payload.allergy_notes = vec!["x".repeat(41)];
        assert!(payload.clone().into_preference("u1").is_err());

        payload.allergy_notes = vec![String::new()];
        assert!(payload.into_preference("u1").is_err());
    }

    #[test]
    fn notes_over_limit_and_bad_diet_are_reported_together() {
        let mut payload = input("paleo");
        payload.additional_notes = Some("n".repeat(161));

        let err = payload.into_preference("u1").unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("additionalNotes"));
        assert!(fields.contains("dietaryPreference"));
    }

    #[test]
    fn blank_notes_become_absent() {
        let mut payload = input("jain");
        payload.additional_notes = Some("   ".to_owned());

        let pref = payload.into_preference("u1").unwrap();
        assert_eq!(pref.additional_notes, None);
    }

    #[test]
    fn payload_allergy_notes_default_to_empty() {
        let payload: PreferenceInput =
            serde_json::from_str(r#"{"dietaryPreference":"standard","autoOptIn":true}"#).unwrap();
        assert!(payload.allergy_notes.is_empty());
        assert!(payload.into_preference("u1").is_ok());
    }

    #[test]
    fn default_record() {
        let pref = UserPreference::default_for("u9");
        assert_eq!(pref.dietary_preference, DietaryPreference::Standard);
        assert!(pref.allergy_notes.is_empty());
        assert!(pref.additional_notes.is_none());
        assert!(pref.auto_opt_in);
    }
}
