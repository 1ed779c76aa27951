//! Shape checks for untrusted structured input.
//!
//! Lifts an [`InputValue`] into a [`RawRecord`] or rejects it before any
//! field validation runs:
//!
//! - anything other than a map is `INVALID_INPUT`
//! - the first absent required key (in layout order) is `MISSING_FIELD`
//! - scalar values are rendered as text, null as the empty string
//! - a map or list where a field value is expected is `INVALID_INPUT`
//!
//! Extra keys are ignored.

use somalid_core::{InputRecord, InputValue, RawRecord, Result, ValidationError, keys};

/// Converts structured input into a record of six text fields.
pub fn lift_record(input: &InputValue) -> Result<RawRecord> {
    let map = match input {
        InputValue::Map(map) => map,
        other => {
            return Err(ValidationError::invalid_input(format!(
                "Input must be a record object, found {}",
                other.type_name()
            )));
        }
    };

    if let Some(missing) = keys::REQUIRED.into_iter().find(|key| !map.contains_key(*key)) {
        return Err(ValidationError::missing_field(missing));
    }

    Ok(RawRecord {
        id_number: field_text(map, keys::ID_NUMBER)?,
        name: field_text(map, keys::NAME)?,
        sex: field_text(map, keys::SEX)?,
        date_of_birth: field_text(map, keys::DATE_OF_BIRTH)?,
        date_of_issue: field_text(map, keys::DATE_OF_ISSUE)?,
        date_of_expiry: field_text(map, keys::DATE_OF_EXPIRY)?,
    })
}

fn field_text(map: &InputRecord, key: &str) -> Result<String> {
    let value = map
        .get(key)
        .ok_or_else(|| ValidationError::missing_field(key))?;

    value.to_text().ok_or_else(|| {
        ValidationError::invalid_input(format!(
            "Field '{key}' must be a text value, found {}",
            value.type_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use somalid_core::ErrorCode;

    fn sample() -> serde_json::Value {
        json!({
            "idNumber": "934265782412",
            "name": "Ahmed Hassan Mohamed",
            "sex": "Male",
            "dobDMY": "15-03-1990",
            "issueDMY": "01-01-2020",
            "expiryDMY": "01-01-2030"
        })
    }

    #[test]
    fn test_lift_complete_record() {
        let record = lift_record(&InputValue::from(sample())).unwrap();
        assert_eq!(
            record,
            RawRecord::new(
                "934265782412",
                "Ahmed Hassan Mohamed",
                "Male",
                "15-03-1990",
                "01-01-2020",
                "01-01-2030",
            )
        );
    }

    #[test]
    fn test_non_map_inputs_are_invalid() {
        for input in [
            InputValue::Null,
            InputValue::from(""),
            InputValue::from(42_i64),
            InputValue::List(vec![]),
        ] {
            let err = lift_record(&input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidInput, "{input:?}");
        }
    }

    #[test]
    fn test_empty_map_reports_first_missing_key() {
        let err = lift_record(&InputValue::Map(InputRecord::new())).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingField);
        assert_eq!(err.message(), "Missing required field: idNumber");
    }

    #[test]
    fn test_missing_later_key() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("issueDMY");
        let err = lift_record(&InputValue::from(value)).unwrap_err();
        assert_eq!(err.message(), "Missing required field: issueDMY");
    }

    #[test]
    fn test_scalars_are_coerced() {
        let mut value = sample();
        value["idNumber"] = json!(934265782412_i64);
        value["name"] = json!(null);
        let record = lift_record(&InputValue::from(value)).unwrap();

        assert_eq!(record.id_number, "934265782412");
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_nested_field_is_invalid_input() {
        let mut value = sample();
        value["name"] = json!({"first": "Ahmed"});
        let err = lift_record(&InputValue::from(value)).unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.message(), "Field 'name' must be a text value, found map");
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut value = sample();
        value["placeOfBirth"] = json!("Hargeisa");
        assert!(lift_record(&InputValue::from(value)).is_ok());
    }
}
