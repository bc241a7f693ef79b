//! XML serializer for card and note documents
//!
//! Output is compact: no whitespace is added between elements, so parsing the
//! text back yields exactly the tree that was written.

use crate::application::ports::outbound::{DocumentSerializerPort, SerializationError};
use crate::domain::value_objects::DocumentElement;

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlSerializer;

impl XmlSerializer {
    pub fn new() -> Self {
        Self
    }

    fn write_element(
        &self,
        out: &mut String,
        element: &DocumentElement,
    ) -> Result<(), SerializationError> {
        if !is_xml_name(&element.tag) {
            return Err(SerializationError::InvalidElementName(element.tag.clone()));
        }

        out.push('<');
        out.push_str(&element.tag);

        for (index, (name, value)) in element.attributes.iter().enumerate() {
            if !is_xml_name(name) {
                return Err(SerializationError::InvalidAttributeName {
                    element: element.tag.clone(),
                    name: name.clone(),
                });
            }
            if element.attributes[..index].iter().any(|(seen, _)| seen == name) {
                return Err(SerializationError::DuplicateAttribute {
                    element: element.tag.clone(),
                    name: name.clone(),
                });
            }
            check_chars(&element.tag, value)?;

            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(out, value);
            out.push('"');
        }

        let text = element.text.as_deref().unwrap_or("");
        if text.is_empty() && element.children.is_empty() {
            out.push_str("/>");
            return Ok(());
        }

        out.push('>');
        check_chars(&element.tag, text)?;
        escape_text(out, text);
        for child in &element.children {
            self.write_element(out, child)?;
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
        Ok(())
    }
}

impl DocumentSerializerPort for XmlSerializer {
    fn to_markup(&self, root: &DocumentElement) -> Result<String, SerializationError> {
        let mut out = String::from(XML_DECLARATION);
        self.write_element(&mut out, root)?;
        Ok(out)
    }
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
}

/// Char production of XML 1.0
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn check_chars(element: &str, data: &str) -> Result<(), SerializationError> {
    match data.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(SerializationError::InvalidCharacter {
            element: element.to_string(),
            code: c as u32,
        }),
        None => Ok(()),
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    }
}
