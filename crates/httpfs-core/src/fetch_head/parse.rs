//! Parse HTTP response header lines into a case-insensitive mapping.

use std::collections::HashMap;

/// Normalized view of one response's headers.
///
/// Names are lowercased. When redirects are followed curl reports every hop's
/// header block; only the block of the final response is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    status_line: Option<String>,
    fields: HashMap<String, Vec<String>>,
}

impl ResponseHeaders {
    /// Builds the mapping from raw header lines (status lines included, line endings optional).
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut headers = ResponseHeaders::default();
        let mut last_name: Option<String> = None;

        for raw in lines {
            let raw = raw.as_ref().trim_end_matches(['\r', '\n']);
            if raw.trim().is_empty() {
                continue;
            }
            if raw.starts_with("HTTP/") {
                headers = ResponseHeaders {
                    status_line: Some(raw.trim().to_string()),
                    fields: HashMap::new(),
                };
                last_name = None;
                continue;
            }
            // obs-fold: continuation of the previous header's value.
            if raw.starts_with([' ', '\t']) {
                if let Some(value) = last_name
                    .as_ref()
                    .and_then(|name| headers.fields.get_mut(name))
                    .and_then(|values| values.last_mut())
                {
                    value.push(' ');
                    value.push_str(raw.trim());
                }
                continue;
            }
            if let Some((name, value)) = raw.split_once(':') {
                let name = name.trim().to_ascii_lowercase();
                if name.is_empty() {
                    continue;
                }
                headers
                    .fields
                    .entry(name.clone())
                    .or_default()
                    .push(value.trim().to_string());
                last_name = Some(name);
            }
        }

        headers
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    /// Status code from the status line (`HTTP/1.1 200 OK` → 200).
    pub fn status(&self) -> Option<u32> {
        self.status_line.as_deref().and_then(parse_status_code)
    }

    /// First value of header `name` (any case).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// All values of header `name` in the order received.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Extracts the status code from a status line; `None` if the line is not one.
pub fn parse_status_code(line: &str) -> Option<u32> {
    let mut parts = line.split_whitespace();
    if !parts.next()?.starts_with("HTTP/") {
        return None;
    }
    let code = parts.next()?;
    if code.len() != 3 {
        return None;
    }
    code.parse().ok()
}
