//! Homework review domain types

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ShapeError, json_type_name};

/// Review status of a homework submission
///
/// Doubles as the verdict catalog: every recognised status code maps to
/// exactly one fixed sentence, and unknown codes are rejected rather than
/// described with a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as sent by the review API
    pub fn code(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Verdict sentence shown to the user
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ShapeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| ShapeError::UnknownStatus(code.to_string()))
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Review state of one homework submission
///
/// Read from a single element of the `homeworks` array. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl ReviewRecord {
    /// Message announcing this record's current status
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}

impl TryFrom<&Value> for ReviewRecord {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or(ShapeError::NotAnObject(json_type_name(value)))?;

        let homework_name = string_field(object, "homework_name")?;
        let status = string_field(object, "status")?.parse()?;

        Ok(Self {
            homework_name: homework_name.to_string(),
            status,
        })
    }
}

fn string_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ShapeError> {
    let value = object.get(field).ok_or(ShapeError::MissingField(field))?;
    value.as_str().ok_or(ShapeError::WrongType {
        field,
        expected: "a string",
        actual: json_type_name(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verdicts_for_known_statuses() {
        assert_eq!(
            "approved".parse::<HomeworkStatus>().unwrap().verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            "reviewing".parse::<HomeworkStatus>().unwrap().verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            "rejected".parse::<HomeworkStatus>().unwrap().verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = "graded".parse::<HomeworkStatus>();
        assert_eq!(result, Err(ShapeError::UnknownStatus("graded".to_string())));

        // Codes are case-sensitive
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.code().parse::<HomeworkStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.code());
        }
    }

    #[test]
    fn test_status_message() {
        let record = ReviewRecord::try_from(&json!({
            "homework_name": "Project X",
            "status": "approved",
        }))
        .unwrap();

        assert_eq!(
            record.status_message(),
            "Изменился статус проверки работы \"Project X\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_record_ignores_extra_fields() {
        let record = ReviewRecord::try_from(&json!({
            "id": 124,
            "homework_name": "user__hw_python_oop.zip",
            "status": "rejected",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект"
        }))
        .unwrap();

        assert_eq!(record.homework_name, "user__hw_python_oop.zip");
        assert_eq!(record.status, HomeworkStatus::Rejected);
    }

    #[test]
    fn test_record_missing_fields() {
        let missing_name = ReviewRecord::try_from(&json!({ "status": "approved" }));
        assert_eq!(missing_name, Err(ShapeError::MissingField("homework_name")));

        let missing_status = ReviewRecord::try_from(&json!({ "homework_name": "hw" }));
        assert_eq!(missing_status, Err(ShapeError::MissingField("status")));
    }

    #[test]
    fn test_record_wrong_types() {
        let result = ReviewRecord::try_from(&json!({
            "homework_name": "hw",
            "status": 3,
        }));
        assert!(matches!(
            result,
            Err(ShapeError::WrongType { field: "status", .. })
        ));

        let result = ReviewRecord::try_from(&json!(["hw", "approved"]));
        assert_eq!(result, Err(ShapeError::NotAnObject("an array")));
    }

    #[test]
    fn test_record_unknown_status() {
        let result = ReviewRecord::try_from(&json!({
            "homework_name": "hw",
            "status": "lost",
        }));
        assert_eq!(result, Err(ShapeError::UnknownStatus("lost".to_string())));
    }
}
