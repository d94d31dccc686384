//! Practicum homework status DTOs

use serde_json::Value;

use crate::error::{ShapeError, json_type_name};

/// Query parameter carrying the lower-bound timestamp
pub const FROM_DATE_PARAM: &str = "from_date";

/// Key holding the list of review records
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server time of the response
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Shape-checked homework status response
///
/// Records are kept as raw JSON: only the first one is ever read, and its
/// own fields are validated when it is turned into a
/// [`ReviewRecord`](crate::domain::ReviewRecord).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Review records, most recent first
    pub homeworks: Vec<Value>,
    /// Server timestamp, when the API provides one
    pub current_date: Option<i64>,
}

impl ApiResponse {
    /// The most recent review record, if any
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

impl TryFrom<Value> for ApiResponse {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(ShapeError::NotAnObject(json_type_name(&other))),
        };

        let homeworks = match object.remove(HOMEWORKS_KEY) {
            None => return Err(ShapeError::MissingField(HOMEWORKS_KEY)),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ShapeError::WrongType {
                    field: HOMEWORKS_KEY,
                    expected: "an array",
                    actual: json_type_name(&other),
                });
            }
        };

        let current_date = object.get(CURRENT_DATE_KEY).and_then(Value::as_i64);

        Ok(Self {
            homeworks,
            current_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response() {
        let response = ApiResponse::try_from(json!({
            "homeworks": [
                {"homework_name": "second", "status": "reviewing"},
                {"homework_name": "first", "status": "approved"}
            ],
            "current_date": 1581604970
        }))
        .unwrap();

        assert_eq!(response.homeworks.len(), 2);
        assert_eq!(response.current_date, Some(1581604970));
        assert_eq!(response.latest().unwrap()["homework_name"], "second");
    }

    #[test]
    fn test_empty_homeworks() {
        let response = ApiResponse::try_from(json!({ "homeworks": [] })).unwrap();
        assert!(response.latest().is_none());
        assert_eq!(response.current_date, None);
    }

    #[test]
    fn test_not_an_object() {
        let result = ApiResponse::try_from(json!([{"homeworks": []}]));
        assert_eq!(result, Err(ShapeError::NotAnObject("an array")));
    }

    #[test]
    fn test_missing_homeworks() {
        let result = ApiResponse::try_from(json!({ "current_date": 0 }));
        assert_eq!(result, Err(ShapeError::MissingField("homeworks")));
    }

    #[test]
    fn test_homeworks_not_an_array() {
        let result = ApiResponse::try_from(json!({ "homeworks": {"name": "hw"} }));
        assert_eq!(
            result,
            Err(ShapeError::WrongType {
                field: "homeworks",
                expected: "an array",
                actual: "an object",
            })
        );
    }
}
