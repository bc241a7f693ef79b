//! Serializer port - turns a structured document tree into markup text

use crate::domain::value_objects::DocumentElement;

/// The tree could not be written as well-formed markup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializationError {
    #[error("Invalid element name '{0}'")]
    InvalidElementName(String),
    #[error("Invalid attribute name '{name}' on <{element}>")]
    InvalidAttributeName { element: String, name: String },
    #[error("Duplicate attribute '{name}' on <{element}>")]
    DuplicateAttribute { element: String, name: String },
    #[error("Character U+{code:04X} is not allowed in <{element}>")]
    InvalidCharacter { element: String, code: u32 },
}

/// Deterministic document serializer: the same tree always yields the same
/// text, with attributes in insertion order.
pub trait DocumentSerializerPort: Send + Sync {
    fn to_markup(&self, root: &DocumentElement) -> Result<String, SerializationError>;
}
