//! CSV rendering.
//!
//! The header row is taken from the first record's field names; every
//! value is coerced to a string, wrapped in double quotes, and embedded
//! quotes are doubled. Field order is the alphabetical JSON key order,
//! identical for every row of a uniform collection.

use serde::Serialize;
use serde_json::Value;

use crate::ExportError;

/// Render a collection as CSV text.
///
/// Returns `Ok(None)` for an empty collection: no header, no blob, no
/// file. Nulls render as empty fields; all other values use their JSON
/// text form.
///
/// # Errors
///
/// Returns [`ExportError`] when a record fails to serialize or does not
/// flatten to a field/value map.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<Option<String>, ExportError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };

    let first = flatten(first)?;
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut lines = Vec::with_capacity(records.len().saturating_add(1));
    lines.push(headers.join(","));

    for record in records {
        let fields = flatten(record)?;
        let row: Vec<String> = headers
            .iter()
            .map(|header| quote(fields.get(header).unwrap_or(&Value::Null)))
            .collect();
        lines.push(row.join(","));
    }

    Ok(Some(lines.join("\n")))
}

/// Serialize a record into its JSON field map.
fn flatten<T: Serialize>(record: &T) -> Result<serde_json::Map<String, Value>, ExportError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        _ => Err(ExportError::NotARecord),
    }
}

/// Coerce a JSON value to a quoted CSV field.
fn quote(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("\"{}\"", text.replace('"', "\"\""))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gudang_types::{ItemCode, ItemStatus, StockItem};
    use serde::Serialize;

    use super::*;

    fn item(code: &str, name: &str, quantity: u32) -> StockItem {
        StockItem {
            code: ItemCode::from(code),
            name: name.to_owned(),
            unit: String::from("pcs"),
            status: ItemStatus::Active,
            quantity,
        }
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let records: Vec<StockItem> = Vec::new();
        assert!(to_csv(&records).unwrap().is_none());
    }

    #[test]
    fn header_comes_from_the_first_record() {
        let csv = to_csv(&[item("BRG001", "Oil Filter", 120)]).unwrap().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("code,name,quantity,status,unit"));
        assert_eq!(
            lines.next(),
            Some("\"BRG001\",\"Oil Filter\",\"120\",\"active\",\"pcs\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = to_csv(&[item("BRG002", "Hose 1/2\" bore", 3)]).unwrap().unwrap();
        assert!(csv.contains("\"Hose 1/2\"\" bore\""));
    }

    #[test]
    fn one_line_per_record() {
        let csv = to_csv(&[item("A", "A", 1), item("B", "B", 2), item("C", "C", 3)])
            .unwrap()
            .unwrap();
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn null_fields_render_empty() {
        #[derive(Serialize)]
        struct Row {
            name: String,
            note: Option<String>,
        }
        let csv = to_csv(&[Row {
            name: String::from("x"),
            note: None,
        }])
        .unwrap()
        .unwrap();
        assert!(csv.ends_with("\"x\",\"\""));
    }

    #[test]
    fn non_object_records_are_rejected() {
        let records = vec![1_u32, 2, 3];
        assert!(matches!(to_csv(&records), Err(ExportError::NotARecord)));
    }
}
