// src/models/student.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A student record as stored in the `students` array of the profile
/// document. Field names on the wire and on disk are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Millisecond timestamp assigned at first signup; stable across
    /// re-signups with the same email.
    pub id: i64,

    /// Unique key for the record. Re-signup with an existing email
    /// overwrites the whole profile.
    pub email: String,

    pub full_name: String,

    /// Argon2 password hash. Persisted with the record but stripped from
    /// every API response via [`StudentProfile::sanitized`].
    pub password_hash: String,

    /// Current class level, e.g. "10th" or "12th".
    #[serde(rename = "class")]
    pub class_level: String,

    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub tenth_percentage: Option<String>,
    #[serde(default)]
    pub twelfth_percentage: Option<String>,
    #[serde(default)]
    pub cgpa_sem: Option<String>,

    /// Interest-area self ratings on a 1-5 scale, null when skipped.
    #[serde(default)]
    pub ratings: BTreeMap<String, Option<u8>>,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_domains: Vec<String>,

    #[serde(default)]
    pub higher_studies: Option<String>,
    #[serde(default)]
    pub entrance_exams: Vec<String>,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub work_styles: Vec<String>,
    #[serde(default)]
    pub financial_constraints: Option<String>,
    #[serde(default)]
    pub location_restrictions: Option<String>,
    #[serde(default)]
    pub dream_career: Option<String>,
    #[serde(default)]
    pub career_confusion: Option<String>,
}

impl StudentProfile {
    /// Serializes the profile with the password hash removed.
    /// Every user-facing response goes through this.
    pub fn sanitized(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Some(map) = value.as_object_mut() {
            map.remove("passwordHash");
        }
        value
    }
}

/// DTO for signup (profile creation or full overwrite).
///
/// Fields default to empty so a missing required field fails validation
/// with a 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "A valid email is required."))]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required."))]
    #[serde(default)]
    pub password: String,

    #[validate(length(min = 1, message = "Full name is required."))]
    #[serde(default)]
    pub full_name: String,

    #[validate(length(min = 1, message = "Class is required."))]
    #[serde(default, rename = "class")]
    pub class_level: String,

    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub tenth_percentage: Option<String>,
    #[serde(default)]
    pub twelfth_percentage: Option<String>,
    #[serde(default)]
    pub cgpa_sem: Option<String>,
    #[serde(default)]
    pub ratings: BTreeMap<String, Option<u8>>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_domains: Vec<String>,
    #[serde(default)]
    pub higher_studies: Option<String>,
    #[serde(default)]
    pub entrance_exams: Vec<String>,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub work_styles: Vec<String>,
    #[serde(default)]
    pub financial_constraints: Option<String>,
    #[serde(default)]
    pub location_restrictions: Option<String>,
    #[serde(default)]
    pub dream_career: Option<String>,
    #[serde(default)]
    pub career_confusion: Option<String>,
}

impl SignupRequest {
    /// Builds the profile record to persist. The id is assigned by the
    /// store (kept on overwrite, fresh on first signup).
    pub fn into_profile(self, password_hash: String) -> StudentProfile {
        StudentProfile {
            id: 0,
            email: self.email,
            full_name: self.full_name,
            password_hash,
            class_level: self.class_level,
            stream: self.stream,
            tenth_percentage: self.tenth_percentage,
            twelfth_percentage: self.twelfth_percentage,
            cgpa_sem: self.cgpa_sem,
            ratings: self.ratings,
            skills: self.skills,
            career_domains: self.career_domains,
            higher_studies: self.higher_studies,
            entrance_exams: self.entrance_exams,
            work_environment: self.work_environment,
            work_styles: self.work_styles,
            financial_constraints: self.financial_constraints,
            location_restrictions: self.location_restrictions,
            dream_career: self.dream_career,
            career_confusion: self.career_confusion,
        }
    }
}

/// DTO for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StudentProfile {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "a@x.com",
            "password": "p",
            "fullName": "A",
            "class": "10th",
        }))
        .unwrap();
        request.into_profile("$argon2$fake".to_string())
    }

    #[test]
    fn sanitized_strips_password_hash() {
        let value = profile().sanitized();
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("passwordHash"));
        assert_eq!(map["email"], "a@x.com");
        assert_eq!(map["class"], "10th");
    }

    #[test]
    fn signup_validation_rejects_missing_fields() {
        let request: SignupRequest =
            serde_json::from_value(serde_json::json!({ "email": "a@x.com" })).unwrap();
        assert!(request.validate().is_err());
    }
}
