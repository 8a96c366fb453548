use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw element of the source array, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: Value,
}

impl From<Value> for Record {
    fn from(data: Value) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContact {
    pub id: Value,
    pub first_name: Value,
    pub last_name: Value,
    pub gender: Value,
    pub email: Value,
    pub phone_number: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactProperties {
    pub hs_created_by_user_id: Value,
    pub firstname: Value,
    pub lastname: Value,
    pub gender: Value,
    pub email: Value,
    pub phonenumber: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetContact {
    pub properties: ContactProperties,
}

impl From<SourceContact> for TargetContact {
    fn from(source: SourceContact) -> Self {
        Self {
            properties: ContactProperties {
                hs_created_by_user_id: source.id,
                firstname: source.first_name,
                lastname: source.last_name,
                gender: source.gender,
                email: source.email,
                phonenumber: source.phone_number,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchPayload {
    pub inputs: Vec<TargetContact>,
}

impl BatchPayload {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 201 with a JSON body, kept as-is.
    Created { response: Value },
    /// 201 whose body did not parse as JSON.
    CreatedUnparsed { body: String },
}

impl SubmitOutcome {
    pub fn response(&self) -> Option<&Value> {
        match self {
            SubmitOutcome::Created { response } => Some(response),
            SubmitOutcome::CreatedUnparsed { .. } => None,
        }
    }

    /// Size of the response value itself: array length, object key count or
    /// string length in characters. This is not an authoritative count of
    /// created contacts.
    pub fn response_len(&self) -> Option<usize> {
        match self.response()? {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            Value::String(s) => Some(s.chars().count()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub fetched: usize,
    pub submitted: usize,
    pub outcome: SubmitOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_contact_serializes_to_hubspot_shape() {
        let target = TargetContact::from(SourceContact {
            id: json!(7),
            first_name: json!("Ada"),
            last_name: json!("Lovelace"),
            gender: json!(null),
            email: json!("ada@example.com"),
            phone_number: json!("+44 20"),
        });

        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({
                "properties": {
                    "hs_created_by_user_id": 7,
                    "firstname": "Ada",
                    "lastname": "Lovelace",
                    "gender": null,
                    "email": "ada@example.com",
                    "phonenumber": "+44 20"
                }
            })
        );
    }

    #[test]
    fn test_empty_batch_payload_serializes_inputs_array() {
        let json = serde_json::to_string(&BatchPayload::default()).unwrap();
        assert_eq!(json, r#"{"inputs":[]}"#);
    }

    #[test]
    fn test_response_len_follows_response_shape() {
        let array = SubmitOutcome::Created {
            response: json!([{}, {}, {}]),
        };
        assert_eq!(array.response_len(), Some(3));

        // a batch response object reports its key count, not the created count
        let object = SubmitOutcome::Created {
            response: json!({"status": "COMPLETE", "results": [{}, {}, {}, {}]}),
        };
        assert_eq!(object.response_len(), Some(2));

        let scalar = SubmitOutcome::Created { response: json!(42) };
        assert_eq!(scalar.response_len(), None);

        let unparsed = SubmitOutcome::CreatedUnparsed {
            body: "ok".to_string(),
        };
        assert_eq!(unparsed.response(), None);
        assert_eq!(unparsed.response_len(), None);
    }
}
