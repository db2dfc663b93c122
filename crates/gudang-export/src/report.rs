//! Print-formatted HTML report rendering.
//!
//! Produces a minimal self-contained HTML document holding the
//! collection as pretty-printed JSON. Intended to be opened and printed
//! to PDF by the client; the service itself does no PDF generation.

use serde::Serialize;

use crate::ExportError;

/// Render a collection as a printable HTML document.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] when the records fail to
/// serialize.
pub fn to_report_html<T: Serialize>(title: &str, records: &[T]) -> Result<String, ExportError> {
    let body = serde_json::to_string_pretty(records)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>body {{ font-family: monospace; margin: 2em; }} h1 {{ font-size: 1.2em; }}</style>\n\
         </head>\n<body>\n<h1>{}</h1>\n<pre>{}</pre>\n</body>\n</html>\n",
        escape(title),
        escape(title),
        escape(&body)
    ))
}

/// Escape the characters HTML treats specially.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
