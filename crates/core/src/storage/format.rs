use crate::errors::CoreError;
use crate::models::vendor_data::VendorData;

/// Serialize `VendorData` into the persisted JSON shape.
///
/// ```text
/// { "sales": { "today": .., "productsSold": .., "salesHistory": [..] },
///   "inventory": [ { "id", "name", "quantity", "incoming" } ],
///   "orders": [ { "id", "vendor", "date", "category", "status", "expectedTime", "items" } ] }
/// ```
///
/// Refuses state that [`decode`] would reject. serde_json writes
/// non-finite numbers as `null`, which would not read back.
pub fn encode(data: &VendorData) -> Result<Vec<u8>, CoreError> {
    data.check_invariants()
        .map_err(|e| CoreError::Serialization(format!("Refusing to persist invalid vendor data: {e}")))?;
    serde_json::to_vec(data)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize vendor data: {e}")))
}

/// Parse persisted bytes back into `VendorData`.
///
/// Anything that is not a complete, invariant-respecting `VendorData`
/// (bad JSON, missing fields, negative counts, duplicate ids) is reported
/// as [`CoreError::CorruptState`].
pub fn decode(bytes: &[u8]) -> Result<VendorData, CoreError> {
    let data: VendorData = serde_json::from_slice(bytes)
        .map_err(|e| CoreError::CorruptState(format!("Failed to parse vendor data: {e}")))?;
    data.check_invariants().map_err(CoreError::CorruptState)?;
    Ok(data)
}
