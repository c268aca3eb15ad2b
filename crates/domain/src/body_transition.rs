//! Switching a body between its representations

use crate::request::{BodyType, BodyVariant};

/// Computes the body after the user switches it to `next`.
///
/// Text and JSON bodies share their string when switching between each
/// other. Switching into form-data starts an empty field list and switching
/// into file starts with no file. Anything structured that lands in a
/// text or JSON body becomes an empty string. For a form-data body staying
/// form-data only the multipart flag may change.
#[must_use]
pub fn transition_body(
    current: BodyVariant,
    next: BodyType,
    is_multipart: Option<bool>,
) -> BodyVariant {
    match (current, next) {
        (
            BodyVariant::FormData {
                is_multipart: current_multipart,
                value,
            },
            BodyType::FormData,
        ) => BodyVariant::FormData {
            is_multipart: is_multipart.unwrap_or(current_multipart),
            value,
        },
        (_, BodyType::FormData) => {
            BodyVariant::form_data(is_multipart.unwrap_or(false), Vec::new())
        }
        (current @ BodyVariant::File { .. }, BodyType::File) => current,
        (_, BodyType::File) => BodyVariant::File { value: None },
        (BodyVariant::Text { value } | BodyVariant::Json { value }, BodyType::Text) => {
            BodyVariant::Text { value }
        }
        (BodyVariant::Text { value } | BodyVariant::Json { value }, BodyType::Json) => {
            BodyVariant::Json { value }
        }
        (BodyVariant::FormData { .. } | BodyVariant::File { .. }, BodyType::Text) => {
            BodyVariant::text("")
        }
        (BodyVariant::FormData { .. } | BodyVariant::File { .. }, BodyType::Json) => {
            BodyVariant::json("")
        }
    }
}
