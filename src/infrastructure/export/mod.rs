//! Scenario export adapters
//!
//! - [`XmlSerializer`]: writes card and note trees as XML text
//! - [`ZipArchiver`]: bundles the serialized files into one zip download

mod xml_serializer;
mod zip_archiver;

pub use xml_serializer::XmlSerializer;
pub use zip_archiver::ZipArchiver;
