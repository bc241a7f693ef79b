//! Outbound ports - Interfaces that the application requires from external systems

mod archive_port;
mod document_store_port;
mod serializer_port;

pub use archive_port::{ArchiveError, ArchivePort, NamedTextFile, SavedArchive};
pub use document_store_port::{
    list_documents, query_documents, read_document, write_document, DocumentChange,
    DocumentPath, DocumentStorePort, DocumentSubscription, StoreError,
};
pub use serializer_port::{DocumentSerializerPort, SerializationError};
