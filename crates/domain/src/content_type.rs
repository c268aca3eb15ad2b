//! Keeping the Content-Type header in step with the body

use crate::request::{
    BodyVariant, KeyValueParameter, enforce_terminal_draft, find_by_key_ignore_case,
};
use crate::state::RequestConfiguration;

/// The header name managed by the synchronizer.
pub const CONTENT_TYPE: &str = "Content-Type";

const MULTIPART_FORM_DATA: &str = "multipart/form-data";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const OCTET_STREAM: &str = "application/octet-stream";
const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

/// Returns the canonical Content-Type value for a body.
///
/// A file body defers to the file's own declared media type.
#[must_use]
pub fn derive_content_type(body: &BodyVariant) -> &str {
    match body {
        BodyVariant::Json { .. } => APPLICATION_JSON,
        BodyVariant::Text { .. } => TEXT_PLAIN,
        BodyVariant::FormData {
            is_multipart: true, ..
        } => MULTIPART_FORM_DATA,
        BodyVariant::FormData {
            is_multipart: false,
            ..
        } => FORM_URLENCODED,
        BodyVariant::File { value } => value
            .as_ref()
            .and_then(|blob| blob.declared_media_type())
            .unwrap_or(OCTET_STREAM),
    }
}

/// A single edit to the header list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderUpdate {
    /// Leave the headers alone.
    None,
    /// Append a new header row.
    Add(KeyValueParameter),
    /// Replace the row with the same id.
    Update(KeyValueParameter),
    /// Drop the row with the same id.
    Remove(KeyValueParameter),
}

/// Returns the current Content-Type row, matched case-insensitively.
#[must_use]
pub fn current_content_type(headers: &[KeyValueParameter]) -> Option<&KeyValueParameter> {
    find_by_key_ignore_case(headers, CONTENT_TYPE)
}

/// Plans the minimal header edit that makes Content-Type agree with the
/// body and method of `state`.
#[must_use]
pub fn plan_header_update(state: &RequestConfiguration) -> HeaderUpdate {
    let existing = current_content_type(&state.request_headers);

    if !state.method.can_have_body() {
        return existing.map_or(HeaderUpdate::None, |header| {
            HeaderUpdate::Remove(header.clone())
        });
    }

    let body = &state.body;
    let next_value = derive_content_type(body);

    let Some(existing) = existing else {
        // Multipart needs a transport-generated boundary; file bodies keep
        // whatever the user chose.
        if body.is_multipart() || matches!(body, BodyVariant::File { .. }) {
            return HeaderUpdate::None;
        }
        return HeaderUpdate::Add(KeyValueParameter::new(CONTENT_TYPE, next_value));
    };

    if existing.value.starts_with(next_value) {
        return HeaderUpdate::None;
    }

    if body.is_multipart() && !existing.value.starts_with(MULTIPART_FORM_DATA) {
        return HeaderUpdate::Remove(existing.clone());
    }

    if matches!(body, BodyVariant::File { .. })
        && (existing.value.starts_with("text/") || existing.value.starts_with(APPLICATION_JSON))
    {
        return HeaderUpdate::Remove(existing.clone());
    }

    HeaderUpdate::Update(KeyValueParameter {
        value: next_value.to_string(),
        ..existing.clone()
    })
}

/// Applies a planned edit, restoring the terminal draft afterwards.
#[must_use]
pub fn apply_header_update(
    headers: Vec<KeyValueParameter>,
    update: HeaderUpdate,
) -> Vec<KeyValueParameter> {
    let next = match update {
        HeaderUpdate::None => headers,
        HeaderUpdate::Add(header) => {
            let mut rows: Vec<_> = headers.into_iter().filter(|row| !row.is_draft()).collect();
            rows.push(header);
            rows
        }
        HeaderUpdate::Update(header) => headers
            .into_iter()
            .map(|row| if row.id == header.id { header.clone() } else { row })
            .collect(),
        HeaderUpdate::Remove(header) => headers
            .into_iter()
            .filter(|row| row.id != header.id)
            .collect(),
    };
    enforce_terminal_draft(next)
}

/// Plans and applies the Content-Type edit for `state`.
#[must_use]
pub fn sync_content_type(mut state: RequestConfiguration) -> RequestConfiguration {
    let update = plan_header_update(&state);
    if update != HeaderUpdate::None {
        tracing::debug!(?update, "synchronizing content type header");
    }
    let headers = std::mem::take(&mut state.request_headers);
    state.request_headers = apply_header_update(headers, update);
    state
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::request::{FileBlob, FormDataParameter, HttpMethod};
    use pretty_assertions::assert_eq;

    fn header(value: &str) -> KeyValueParameter {
        KeyValueParameter {
            id: "ct".to_string(),
            key: "content-type".to_string(),
            value: value.to_string(),
            enabled: true,
        }
    }

    fn state(method: HttpMethod, body: BodyVariant, headers: Vec<KeyValueParameter>) -> RequestConfiguration {
        RequestConfiguration {
            method,
            body,
            request_headers: enforce_terminal_draft(headers),
            ..RequestConfiguration::default()
        }
    }

    fn file(media_type: Option<&str>) -> BodyVariant {
        BodyVariant::File {
            value: Some(FileBlob::new("f", media_type.map(str::to_string), vec![0])),
        }
    }

    #[test]
    fn test_derive_content_type() {
        assert_eq!(derive_content_type(&BodyVariant::json("")), "application/json");
        assert_eq!(derive_content_type(&BodyVariant::text("")), "text/plain");
        assert_eq!(
            derive_content_type(&BodyVariant::form_data(true, Vec::new())),
            "multipart/form-data"
        );
        assert_eq!(
            derive_content_type(&BodyVariant::form_data(false, Vec::new())),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(derive_content_type(&file(Some("image/png"))), "image/png");
        assert_eq!(derive_content_type(&file(None)), "application/octet-stream");
        assert_eq!(
            derive_content_type(&BodyVariant::File { value: None }),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_get_removes_existing_header() {
        let s = state(HttpMethod::Get, BodyVariant::json(""), vec![header("application/json")]);
        assert_eq!(plan_header_update(&s), HeaderUpdate::Remove(header("application/json")));

        let s = state(HttpMethod::Head, BodyVariant::json(""), Vec::new());
        assert_eq!(plan_header_update(&s), HeaderUpdate::None);
    }

    #[test]
    fn test_matching_prefix_is_left_alone() {
        let s = state(
            HttpMethod::Post,
            BodyVariant::json(""),
            vec![header("application/json; charset=utf-8")],
        );
        assert_eq!(plan_header_update(&s), HeaderUpdate::None);
    }

    #[test]
    fn test_multipart_suppresses_add() {
        let s = state(HttpMethod::Post, BodyVariant::form_data(true, Vec::new()), Vec::new());
        assert_eq!(plan_header_update(&s), HeaderUpdate::None);
    }

    #[test]
    fn test_file_suppresses_add() {
        let s = state(HttpMethod::Put, file(Some("image/png")), Vec::new());
        assert_eq!(plan_header_update(&s), HeaderUpdate::None);
    }

    #[test]
    fn test_add_for_json() {
        let s = state(HttpMethod::Post, BodyVariant::json("{}"), Vec::new());
        let HeaderUpdate::Add(added) = plan_header_update(&s) else {
            panic!("expected add");
        };
        assert_eq!(added.key, "Content-Type");
        assert_eq!(added.value, "application/json");
        assert!(added.enabled);
    }

    #[test]
    fn test_multipart_removes_other_header() {
        let fields = vec![FormDataParameter::text("a", "b")];
        let s = state(HttpMethod::Post, BodyVariant::form_data(true, fields), vec![header("application/json")]);
        assert_eq!(plan_header_update(&s), HeaderUpdate::Remove(header("application/json")));
    }

    #[test]
    fn test_file_removes_stale_text_header() {
        let s = state(HttpMethod::Post, file(None), vec![header("text/plain")]);
        assert_eq!(plan_header_update(&s), HeaderUpdate::Remove(header("text/plain")));
    }

    #[test]
    fn test_update_to_new_value() {
        let s = state(HttpMethod::Post, BodyVariant::text(""), vec![header("application/json")]);
        assert_eq!(plan_header_update(&s), HeaderUpdate::Update(header("text/plain")));

        let s = state(HttpMethod::Post, file(Some("image/png")), vec![header("image/jpeg")]);
        assert_eq!(plan_header_update(&s), HeaderUpdate::Update(header("image/png")));
    }

    #[test]
    fn test_apply_keeps_terminal_draft() {
        let headers = enforce_terminal_draft(vec![KeyValueParameter::new("Accept", "*/*")]);
        let added = KeyValueParameter::new(CONTENT_TYPE, "text/plain");
        let next = apply_header_update(headers, HeaderUpdate::Add(added.clone()));
        assert_eq!(next.len(), 3);
        assert_eq!(next[1], added);
        assert!(next[2].is_draft());

        let next = apply_header_update(next, HeaderUpdate::Remove(added));
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].key, "Accept");
        assert!(next[1].is_draft());
    }

    #[test]
    fn test_current_content_type_ignores_case() {
        let headers = enforce_terminal_draft(vec![
            KeyValueParameter::new("Accept", "*/*"),
            header("text/csv"),
        ]);
        let found = current_content_type(&headers).unwrap();
        assert_eq!(found.value, "text/csv");
        assert!(current_content_type(&headers[..1]).is_none());
    }
}
