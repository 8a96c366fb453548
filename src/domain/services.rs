use crate::domain::model::{BatchPayload, Record, SourceContact, TargetContact};
use crate::utils::error::{Result, SyncError};
use serde_json::{Map, Value};

fn field(obj: &Map<String, Value>, index: usize, name: &'static str) -> Result<Value> {
    obj.get(name)
        .cloned()
        .ok_or(SyncError::MissingFieldError { index, field: name })
}

pub fn to_source_contact(index: usize, record: &Record) -> Result<SourceContact> {
    let obj = record
        .data
        .as_object()
        .ok_or(SyncError::MalformedRecordError { index })?;

    Ok(SourceContact {
        id: field(obj, index, "id")?,
        first_name: field(obj, index, "first_name")?,
        last_name: field(obj, index, "last_name")?,
        gender: field(obj, index, "gender")?,
        email: field(obj, index, "email")?,
        phone_number: field(obj, index, "phone_number")?,
    })
}

/// Renames every record into the HubSpot schema, keeping source order.
/// Stops at the first record that cannot be mapped.
pub fn build_batch(records: &[Record]) -> Result<BatchPayload> {
    let inputs = records
        .iter()
        .enumerate()
        .map(|(index, record)| to_source_contact(index, record).map(TargetContact::from))
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchPayload { inputs })
}
