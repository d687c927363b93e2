use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DATE_FIELD: &str = "date";
pub const LOCATION_FIELD: &str = "location";
pub const RED_SOLD_FIELD: &str = "red_sold";
pub const BLUE_SOLD_FIELD: &str = "blue_sold";
pub const GREEN_SOLD_FIELD: &str = "green_sold";

/// Required event keys, in the order they appear in the notes sentence.
pub const REQUIRED_FIELDS: [&str; 5] = [
    DATE_FIELD,
    LOCATION_FIELD,
    RED_SOLD_FIELD,
    BLUE_SOLD_FIELD,
    GREEN_SOLD_FIELD,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesResponse {
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Submitted values after rendering, ready for interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesFields {
    pub date: String,
    pub location: String,
    pub red_sold: String,
    pub blue_sold: String,
    pub green_sold: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFieldError {
    field: &'static str,
}

impl MissingFieldError {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl std::fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing required field `{}`", self.field)
    }
}

impl std::error::Error for MissingFieldError {}

/// Default textual form of a submitted value. Strings are inserted without
/// quotes; everything else uses its compact JSON text, so booleans and null
/// keep their JSON spelling (`true`, `null`). Numbers keep the digits they
/// were submitted with.
pub fn render_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn lookup_field(event: &Value, field: &'static str) -> Result<String, MissingFieldError> {
    event
        .get(field)
        .map(render_field)
        .ok_or_else(|| MissingFieldError::new(field))
}

pub fn extract_sales_fields(event: &Value) -> Result<SalesFields, MissingFieldError> {
    Ok(SalesFields {
        date: lookup_field(event, DATE_FIELD)?,
        location: lookup_field(event, LOCATION_FIELD)?,
        red_sold: lookup_field(event, RED_SOLD_FIELD)?,
        blue_sold: lookup_field(event, BLUE_SOLD_FIELD)?,
        green_sold: lookup_field(event, GREEN_SOLD_FIELD)?,
    })
}

pub fn notes_message(fields: &SalesFields) -> String {
    format!(
        "Thank you for submitting data. You submitted the following. \
         Date {} at location {}, number of red widgets sold was {}, \
         number of blue widgets sold was {}, number of green widgets sold was {}.",
        fields.date, fields.location, fields.red_sold, fields.blue_sold, fields.green_sold
    )
}

pub fn compose_notes(event: &Value) -> Result<NotesResponse, MissingFieldError> {
    let fields = extract_sales_fields(event)?;
    Ok(NotesResponse {
        notes: notes_message(&fields),
    })
}
