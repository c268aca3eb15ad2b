//! The editable parts of a request: method, parameter rows and body.

mod body;
mod method;
mod parameter;

pub use body::{
    BodyType, BodyVariant, FileBlob, FormDataParameter, FormDataValue,
    enforce_form_data_terminal_draft,
};
pub use method::{HttpMethod, MethodInput, RequestKind};
pub use parameter::{
    DraftRow, KeyValueParameter, count_parameters, enabled_pairs, enforce_terminal_draft,
    find_by_key_ignore_case,
};
