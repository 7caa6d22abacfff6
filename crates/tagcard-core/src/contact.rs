//! The contact record and its editable fields.
//!
//! A contact is a phone number, a free-text note and an optional display
//! name. Everything presented to NFC tooling is derived from these three
//! fields at read time; nothing derived is ever stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{Error, FieldViolation, Result};

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Maximum length of `phone_number`, in characters.
pub const PHONE_NUMBER_MAX_CHARS: usize = 20;
/// Maximum length of `text`, in characters.
pub const TEXT_MAX_CHARS: usize = 100;
/// Maximum length of `name`, in characters.
pub const NAME_MAX_CHARS: usize = 50;

// ─── ContactFields ───────────────────────────────────────────────────────────

/// The editable part of a contact. Create and update both replace all three
/// fields together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
  pub phone_number: String,
  pub text:         String,
  /// Display name; `""` means absent. A missing or `null` name in JSON
  /// deserialises to `""`.
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name:         String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactFields {
  pub fn new(
    phone_number: impl Into<String>,
    text: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      phone_number: phone_number.into(),
      text:         text.into(),
      name:         name.into(),
    }
  }

  /// Check the per-field length limits.
  ///
  /// Lengths are counted in characters, not bytes; the byte budget of the
  /// rendered tag payload is a separate check. All violations are reported,
  /// not just the first.
  pub fn validate(&self) -> Result<()> {
    let mut violations = Vec::new();

    if self.phone_number.is_empty() {
      violations.push(FieldViolation {
        field:   "phone_number",
        message: "must not be empty".into(),
      });
    }
    check_max(
      &mut violations,
      "phone_number",
      &self.phone_number,
      PHONE_NUMBER_MAX_CHARS,
    );
    check_max(&mut violations, "text", &self.text, TEXT_MAX_CHARS);
    check_max(&mut violations, "name", &self.name, NAME_MAX_CHARS);

    if violations.is_empty() {
      Ok(())
    } else {
      Err(Error::Validation(violations))
    }
  }

  /// The name to show for this contact: `name`, or `phone_number` when the
  /// name is empty.
  pub fn display_name(&self) -> &str {
    display_name(&self.name, &self.phone_number)
  }
}

fn check_max(
  violations: &mut Vec<FieldViolation>,
  field: &'static str,
  value: &str,
  max: usize,
) {
  let len = value.chars().count();
  if len > max {
    violations.push(FieldViolation {
      field,
      message: format!("must be at most {max} characters (got {len})"),
    });
  }
}

/// Empty names fall back to the phone number.
pub fn display_name<'a>(name: &'a str, phone_number: &'a str) -> &'a str {
  if name.is_empty() { phone_number } else { name }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:           Uuid,
  pub phone_number: String,
  pub text:         String,
  pub name:         String,
  /// Set once by the store at creation.
  pub created_at:   DateTime<Utc>,
  /// Refreshed by the store on every update.
  pub updated_at:   DateTime<Utc>,
}

impl Contact {
  /// Build a brand-new contact with a fresh id; both timestamps are `now`.
  pub fn create(fields: ContactFields, now: DateTime<Utc>) -> Self {
    Self {
      id:           Uuid::new_v4(),
      phone_number: fields.phone_number,
      text:         fields.text,
      name:         fields.name,
      created_at:   now,
      updated_at:   now,
    }
  }

  /// Replace the editable fields and bump `updated_at`. `id` and
  /// `created_at` are left untouched.
  pub fn apply(&mut self, fields: ContactFields, now: DateTime<Utc>) {
    self.phone_number = fields.phone_number;
    self.text = fields.text;
    self.name = fields.name;
    self.updated_at = now;
  }

  pub fn fields(&self) -> ContactFields {
    ContactFields::new(&self.phone_number, &self.text, &self.name)
  }

  pub fn display_name(&self) -> &str {
    display_name(&self.name, &self.phone_number)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone};

  use super::*;

  fn violations(fields: &ContactFields) -> Vec<&'static str> {
    match fields.validate() {
      Ok(()) => vec![],
      Err(Error::Validation(v)) => v.into_iter().map(|v| v.field).collect(),
    }
  }

  #[test]
  fn limits_are_inclusive() {
    let fields = ContactFields::new(
      "1".repeat(PHONE_NUMBER_MAX_CHARS),
      "t".repeat(TEXT_MAX_CHARS),
      "n".repeat(NAME_MAX_CHARS),
    );
    assert!(fields.validate().is_ok());
  }

  #[test]
  fn one_over_each_limit_is_rejected() {
    let fields = ContactFields::new(
      "1".repeat(PHONE_NUMBER_MAX_CHARS + 1),
      "t".repeat(TEXT_MAX_CHARS + 1),
      "n".repeat(NAME_MAX_CHARS + 1),
    );
    assert_eq!(violations(&fields), vec!["phone_number", "text", "name"]);
  }

  #[test]
  fn empty_phone_number_is_rejected() {
    let fields = ContactFields::new("", "note", "");
    assert_eq!(violations(&fields), vec!["phone_number"]);
  }

  #[test]
  fn empty_text_and_name_are_fine() {
    assert!(ContactFields::new("+49 1", "", "").validate().is_ok());
  }

  #[test]
  fn limits_count_characters_not_bytes() {
    // 100 umlauts are 200 bytes but only 100 characters.
    let fields = ContactFields::new("+49 1", "ü".repeat(TEXT_MAX_CHARS), "");
    assert!(fields.validate().is_ok());
  }

  #[test]
  fn display_name_falls_back_to_phone_number() {
    assert_eq!(ContactFields::new("+49 1", "x", "").display_name(), "+49 1");
    assert_eq!(ContactFields::new("+49 1", "x", "Anna").display_name(), "Anna");
  }

  #[test]
  fn missing_or_null_name_deserialises_to_empty() {
    let a: ContactFields =
      serde_json::from_str(r#"{"phone_number":"1","text":"t"}"#).unwrap();
    let b: ContactFields =
      serde_json::from_str(r#"{"phone_number":"1","text":"t","name":null}"#)
        .unwrap();
    assert_eq!(a.name, "");
    assert_eq!(b.name, "");
  }

  #[test]
  fn missing_required_field_fails_to_deserialise() {
    let res: serde_json::Result<ContactFields> =
      serde_json::from_str(r#"{"name":"Incomplete"}"#);
    assert!(res.is_err());
  }

  #[test]
  fn apply_keeps_identity_and_creation_time() {
    let t0 = Utc.timestamp_opt(1_000, 0).unwrap();
    let t1 = t0 + Duration::seconds(60);
    let mut contact = Contact::create(ContactFields::new("1", "a", ""), t0);
    let id = contact.id;

    contact.apply(ContactFields::new("2", "b", "Bo"), t1);

    assert_eq!(contact.id, id);
    assert_eq!(contact.created_at, t0);
    assert_eq!(contact.updated_at, t1);
    assert_eq!(contact.fields(), ContactFields::new("2", "b", "Bo"));
  }
}
