//! CSV export and browser downloads (CSV lists, PDF report forms).
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV file.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds CSV text (UTF-8 BOM, comma separated, CRLF-free).
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(","));
    csv.push('\n');
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = blob_from_parts(&wasm_bindgen::JsValue::from_str(&build_csv(data)), "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Saves binary content (e.g. a PDF returned by the backend) as a file.
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let data = js_sys::Uint8Array::from(bytes);
    let blob = blob_from_parts(&data, mime)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn blob_from_parts(part: &wasm_bindgen::JsValue, mime: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(part);
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, &'static str);

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let csv = build_csv(&[Line("Otieno", "ok")]);
        assert_eq!(csv, "\u{FEFF}Name,Note\nOtieno,ok\n");
    }

    #[test]
    fn quotes_cells_with_separators() {
        let csv = build_csv(&[Line("Mwangi, J", "said \"hi\"")]);
        assert!(csv.ends_with("\"Mwangi, J\",\"said \"\"hi\"\"\"\n"));
    }
}
