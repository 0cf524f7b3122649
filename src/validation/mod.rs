//! # Validation Layer
//!
//! Per-field invariant checks, executed before any database write.
//!
//! Every create or patch body is parsed and validated here first; a
//! failure rejects the whole request, so no partial state is ever
//! committed. Errors carry the entity and field name for the server log;
//! clients receive a generic validation body (see `rest_api::errors`).
//!
//! Patch bodies are checked against an explicit allow-list of mutable
//! columns. Unknown keys are rejected rather than assigned.

use serde_json::Value;
use thiserror::Error;

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected field, with enough context to log what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent, empty, or of the wrong type
    #[error("{entity} must have a {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Field not in the entity's allow-list of mutable columns
    #[error("{entity} has no assignable field {field:?}")]
    UnknownField { entity: &'static str, field: String },

    /// Foreign key points at a row that does not exist
    #[error("no {entity} with id {id}")]
    MissingReference { entity: &'static str, id: i32 },

    /// Request body was not a JSON object
    #[error("request body must be a JSON object")]
    NotAnObject,
}

/// Validated input for creating a scientist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScientist {
    pub name: String,
    pub field_of_study: String,
}

/// Validated partial update for a scientist.
///
/// Only allow-listed columns can appear here; `None` means the field was
/// not present in the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScientistPatch {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

/// Validated input for creating a mission.
///
/// The ids are well-formed but not yet known to exist; the referential
/// check happens against the database in the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
}

/// Columns a PATCH /scientists/{id} request may assign.
const SCIENTIST_MUTABLE_FIELDS: &[&str] = &["name", "field_of_study"];

/// Validate a POST /scientists body.
pub fn new_scientist(body: &Value) -> ValidationResult<NewScientist> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(NewScientist {
        name: non_empty_string(obj.get("name"), "Scientist", "name")?,
        field_of_study: non_empty_string(obj.get("field_of_study"), "Scientist", "field_of_study")?,
    })
}

/// Validate a PATCH /scientists/{id} body against the allow-list.
pub fn scientist_patch(body: &Value) -> ValidationResult<ScientistPatch> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    for key in obj.keys() {
        if !SCIENTIST_MUTABLE_FIELDS.contains(&key.as_str()) {
            return Err(ValidationError::UnknownField {
                entity: "Scientist",
                field: key.clone(),
            });
        }
    }

    let mut patch = ScientistPatch::default();
    if obj.contains_key("name") {
        patch.name = Some(non_empty_string(obj.get("name"), "Scientist", "name")?);
    }
    if obj.contains_key("field_of_study") {
        patch.field_of_study = Some(non_empty_string(
            obj.get("field_of_study"),
            "Scientist",
            "field_of_study",
        )?);
    }

    Ok(patch)
}

/// Validate a POST /missions body.
pub fn new_mission(body: &Value) -> ValidationResult<NewMission> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(NewMission {
        name: non_empty_string(obj.get("name"), "Mission", "name")?,
        scientist_id: positive_id(obj.get("scientist_id"), "Mission", "scientist_id")?,
        planet_id: positive_id(obj.get("planet_id"), "Mission", "planet_id")?,
    })
}

/// A required string field: present, a string, and length >= 1.
fn non_empty_string(
    value: Option<&Value>,
    entity: &'static str,
    field: &'static str,
) -> ValidationResult<String> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::MissingField { entity, field }),
    }
}

/// A required id field: present, an integer, and strictly positive.
fn positive_id(
    value: Option<&Value>,
    entity: &'static str,
    field: &'static str,
) -> ValidationResult<i32> {
    match value.and_then(Value::as_i64) {
        Some(id) if id > 0 && id <= i32::MAX as i64 => Ok(id as i32),
        _ => Err(ValidationError::MissingField { entity, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_scientist_accepts_valid_body() {
        let input = json!({"name": "Ada", "field_of_study": "CS"});
        let scientist = new_scientist(&input).unwrap();
        assert_eq!(scientist.name, "Ada");
        assert_eq!(scientist.field_of_study, "CS");
    }

    #[test]
    fn test_new_scientist_rejects_empty_name() {
        let input = json!({"name": "", "field_of_study": "CS"});
        assert_eq!(
            new_scientist(&input),
            Err(ValidationError::MissingField {
                entity: "Scientist",
                field: "name",
            })
        );
    }

    #[test]
    fn test_new_scientist_rejects_missing_field_of_study() {
        let input = json!({"name": "Ada"});
        assert_eq!(
            new_scientist(&input),
            Err(ValidationError::MissingField {
                entity: "Scientist",
                field: "field_of_study",
            })
        );
    }

    #[test]
    fn test_new_scientist_rejects_non_string_name() {
        let input = json!({"name": 42, "field_of_study": "CS"});
        assert!(new_scientist(&input).is_err());
    }

    #[test]
    fn test_new_scientist_rejects_non_object_body() {
        assert_eq!(
            new_scientist(&json!([1, 2, 3])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_patch_accepts_partial_update() {
        let input = json!({"name": "Grace"});
        let patch = scientist_patch(&input).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Grace"));
        assert_eq!(patch.field_of_study, None);
    }

    #[test]
    fn test_patch_rejects_unknown_field() {
        let input = json!({"id": 99});
        assert_eq!(
            scientist_patch(&input),
            Err(ValidationError::UnknownField {
                entity: "Scientist",
                field: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_patch_rejects_empty_value() {
        let input = json!({"field_of_study": ""});
        assert!(scientist_patch(&input).is_err());
    }

    #[test]
    fn test_patch_allows_empty_body() {
        let patch = scientist_patch(&json!({})).unwrap();
        assert_eq!(patch, ScientistPatch::default());
    }

    #[test]
    fn test_new_mission_accepts_valid_body() {
        let input = json!({"name": "M1", "scientist_id": 1, "planet_id": 2});
        let mission = new_mission(&input).unwrap();
        assert_eq!(mission.name, "M1");
        assert_eq!(mission.scientist_id, 1);
        assert_eq!(mission.planet_id, 2);
    }

    #[test]
    fn test_new_mission_rejects_zero_id() {
        // 0 is not a valid row id
        let input = json!({"name": "M1", "scientist_id": 0, "planet_id": 2});
        assert_eq!(
            new_mission(&input),
            Err(ValidationError::MissingField {
                entity: "Mission",
                field: "scientist_id",
            })
        );
    }

    #[test]
    fn test_new_mission_rejects_missing_planet_id() {
        let input = json!({"name": "M1", "scientist_id": 1});
        assert_eq!(
            new_mission(&input),
            Err(ValidationError::MissingField {
                entity: "Mission",
                field: "planet_id",
            })
        );
    }

    #[test]
    fn test_new_mission_rejects_string_id() {
        let input = json!({"name": "M1", "scientist_id": "1", "planet_id": 2});
        assert!(new_mission(&input).is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ValidationError::MissingField {
            entity: "Scientist",
            field: "name",
        };
        assert_eq!(err.to_string(), "Scientist must have a name");
    }
}
