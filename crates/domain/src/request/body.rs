//! Request body variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::parameter::{DraftRow, enforce_terminal_draft};
use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;

/// An in-memory file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBlob {
    /// File name as shown to the user.
    pub name: String,
    /// Declared media type, if the picker reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Raw contents.
    #[serde(with = "serde_bytes_base64")]
    pub data: Vec<u8>,
}

impl FileBlob {
    /// Creates a blob from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type,
            data,
        }
    }

    /// Returns the declared media type unless it is blank.
    #[must_use]
    pub fn declared_media_type(&self) -> Option<&str> {
        self.media_type.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// The value of a form-data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormDataValue {
    /// A plain text field.
    Text {
        /// The field text
        #[serde(default)]
        value: String,
    },
    /// An attached file.
    File {
        /// The file name sent in the part header
        name: String,
        /// The file contents
        value: FileBlob,
    },
}

impl Default for FormDataValue {
    fn default() -> Self {
        Self::Text {
            value: String::new(),
        }
    }
}

impl FormDataValue {
    /// Returns true for a text field with no content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text { value } => value.is_empty(),
            Self::File { .. } => false,
        }
    }
}

/// A row in a form-data field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDataParameter {
    /// Stable row identity
    #[serde(default = "generate_id")]
    pub id: String,
    /// The field name
    #[serde(default)]
    pub key: String,
    /// The field value
    #[serde(default)]
    pub value: FormDataValue,
    /// Whether this field is sent
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl FormDataParameter {
    /// Creates an enabled text field.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: FormDataValue::Text {
                value: value.into(),
            },
            enabled: true,
        }
    }

    /// Creates an enabled file field.
    #[must_use]
    pub fn file(key: impl Into<String>, blob: FileBlob) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: FormDataValue::File {
                name: blob.name.clone(),
                value: blob,
            },
            enabled: true,
        }
    }

    /// Returns true if this field carries a file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.value, FormDataValue::File { .. })
    }
}

impl DraftRow for FormDataParameter {
    fn draft() -> Self {
        Self {
            id: generate_id(),
            key: String::new(),
            value: FormDataValue::default(),
            enabled: false,
        }
    }

    fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_blank()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn disable(&mut self) {
        self.enabled = false;
    }
}

/// Enforces the terminal draft invariant on a form-data field list.
#[must_use]
pub fn enforce_form_data_terminal_draft(fields: Vec<FormDataParameter>) -> Vec<FormDataParameter> {
    enforce_terminal_draft(fields)
}

/// The representation of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BodyVariant {
    /// Plain text
    Text {
        /// The raw text
        #[serde(default)]
        value: String,
    },
    /// JSON source text, never reformatted or validated
    Json {
        /// The raw JSON text
        #[serde(default)]
        value: String,
    },
    /// URL-encoded or multipart form fields
    FormData {
        /// Whether the fields are sent as `multipart/form-data`
        #[serde(default)]
        is_multipart: bool,
        /// The field rows
        #[serde(default)]
        value: Vec<FormDataParameter>,
    },
    /// A single binary file
    File {
        /// The picked file, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<FileBlob>,
    },
}

impl Default for BodyVariant {
    fn default() -> Self {
        Self::Json {
            value: String::new(),
        }
    }
}

impl BodyVariant {
    /// Creates a JSON body.
    #[must_use]
    pub fn json(value: impl Into<String>) -> Self {
        Self::Json {
            value: value.into(),
        }
    }

    /// Creates a plain text body.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Creates a form-data body with an enforced field list.
    #[must_use]
    pub fn form_data(is_multipart: bool, fields: Vec<FormDataParameter>) -> Self {
        Self::FormData {
            is_multipart,
            value: enforce_form_data_terminal_draft(fields),
        }
    }

    /// Returns the discriminant of this body.
    #[must_use]
    pub const fn body_type(&self) -> BodyType {
        match self {
            Self::Text { .. } => BodyType::Text,
            Self::Json { .. } => BodyType::Json,
            Self::FormData { .. } => BodyType::FormData,
            Self::File { .. } => BodyType::File,
        }
    }

    /// Returns true for multipart form-data.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(
            self,
            Self::FormData {
                is_multipart: true,
                ..
            }
        )
    }

    /// Normalises a body supplied from outside.
    ///
    /// Form-data fields get a terminal draft, and a field list holding a
    /// file always goes out as multipart.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::FormData {
                is_multipart,
                value,
            } => {
                let has_file = value.iter().any(FormDataParameter::is_file);
                Self::FormData {
                    is_multipart: is_multipart || has_file,
                    value: enforce_form_data_terminal_draft(value),
                }
            }
            other => other,
        }
    }

    /// Empties the body while keeping its variant.
    #[must_use]
    pub fn cleared(&self) -> Self {
        match self {
            Self::Text { .. } => Self::text(""),
            Self::Json { .. } => Self::json(""),
            Self::FormData { is_multipart, .. } => Self::form_data(*is_multipart, Vec::new()),
            Self::File { .. } => Self::File { value: None },
        }
    }
}

/// The discriminant of a [`BodyVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    /// Plain text
    Text,
    /// JSON
    Json,
    /// Form fields
    FormData,
    /// Binary file
    File,
}

impl BodyType {
    /// Returns the type as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::FormData => "form-data",
            Self::File => "file",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "form-data" => Ok(Self::FormData),
            "file" => Ok(Self::File),
            other => Err(DomainError::UnknownBodyType(other.to_string())),
        }
    }
}

mod serde_bytes_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
