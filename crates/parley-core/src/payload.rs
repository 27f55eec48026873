//! Property-bag field extraction shared by all validators.
//!
//! Handlers assemble a JSON bag from the request body, path parameters, and
//! the authenticated identity; validators pull typed fields out of it.

use serde_json::Value;

use crate::{Error, Result};

/// Extract a required string field from a property bag.
///
/// Absent, `null`, and empty-string values all count as missing; a present
/// non-string value is a type error.
pub fn require_str(bag: &Value, field: &'static str) -> Result<String> {
  match bag.get(field) {
    None | Some(Value::Null) => Err(Error::MissingField(field)),
    Some(Value::String(s)) if s.is_empty() => Err(Error::MissingField(field)),
    Some(Value::String(s)) => Ok(s.clone()),
    Some(_) => Err(Error::InvalidType(field)),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn present_string_is_returned() {
    let bag = json!({ "title": "sebuah thread" });
    assert_eq!(require_str(&bag, "title").unwrap(), "sebuah thread");
  }

  #[test]
  fn absent_field_is_missing() {
    let bag = json!({});
    assert!(matches!(
      require_str(&bag, "title"),
      Err(Error::MissingField("title"))
    ));
  }

  #[test]
  fn null_field_is_missing() {
    let bag = json!({ "title": null });
    assert!(matches!(
      require_str(&bag, "title"),
      Err(Error::MissingField("title"))
    ));
  }

  #[test]
  fn empty_string_is_missing() {
    let bag = json!({ "title": "" });
    assert!(matches!(
      require_str(&bag, "title"),
      Err(Error::MissingField("title"))
    ));
  }

  #[test]
  fn non_string_is_a_type_error() {
    let bag = json!({ "title": 123 });
    assert!(matches!(
      require_str(&bag, "title"),
      Err(Error::InvalidType("title"))
    ));
  }
}
