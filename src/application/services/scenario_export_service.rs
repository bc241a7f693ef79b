//! Scenario Export Service - packages a scenario for the tabletop tool
//!
//! One card file per requested character plus the public note, serialized and
//! handed to the archive in a single call. Any serialization failure aborts
//! the export before the archive is touched.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    ArchiveError, ArchivePort, DocumentSerializerPort, NamedTextFile, SavedArchive,
    SerializationError,
};
use crate::domain::services::{card_builder, character_catalog, note_builder};
use crate::domain::value_objects::{CharacterId, ScenarioMetadata};

/// Base name of every exported archive
pub const EXPORT_BASE_NAME: &str = "scenario";

/// What to export: the cast, in order, and the public metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioExport {
    pub characters: Vec<CharacterId>,
    pub metadata: ScenarioMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize {file}: {source}")]
    Serialization {
        file: String,
        #[source]
        source: SerializationError,
    },
    #[error("Failed to build archive: {0}")]
    Archive(#[from] ArchiveError),
}

pub struct ScenarioExportService {
    serializer: Arc<dyn DocumentSerializerPort>,
    archiver: Arc<dyn ArchivePort>,
}

impl ScenarioExportService {
    pub fn new(serializer: Arc<dyn DocumentSerializerPort>, archiver: Arc<dyn ArchivePort>) -> Self {
        Self {
            serializer,
            archiver,
        }
    }

    /// Serialize every document of the export, cards first, note last
    pub fn build_files(&self, export: &ScenarioExport) -> Result<Vec<NamedTextFile>, ExportError> {
        let mut files = Vec::with_capacity(export.characters.len() + 1);

        for id in &export.characters {
            let definition = character_catalog::lookup(*id);
            let card = card_builder::build_card(&definition);
            let file = definition.file_name();
            let markup = self
                .serializer
                .to_markup(&card.to_document())
                .map_err(|source| ExportError::Serialization {
                    file: file.clone(),
                    source,
                })?;
            debug!(character = ?id, file = %file, "Serialized character card");
            files.push(NamedTextFile::text(file, markup));
        }

        let note = note_builder::build_note(&export.metadata);
        let file = note.file_name();
        let markup = self
            .serializer
            .to_markup(&note.to_document())
            .map_err(|source| ExportError::Serialization {
                file: file.clone(),
                source,
            })?;
        files.push(NamedTextFile::text(file, markup));

        Ok(files)
    }

    /// Export a scenario as a single archive
    #[instrument(skip_all, fields(characters = export.characters.len()))]
    pub fn export_scenario(&self, export: &ScenarioExport) -> Result<SavedArchive, ExportError> {
        let files = self.build_files(export)?;
        let file_count = files.len();

        let archive = self.archiver.save(files, EXPORT_BASE_NAME)?;

        info!(
            files = file_count,
            archive = %archive.file_name,
            bytes = archive.bytes.len(),
            "Exported scenario"
        );
        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DocumentElement, IncidentEntry};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Writes the root tag and text of the name field
    struct TagSerializer;

    impl DocumentSerializerPort for TagSerializer {
        fn to_markup(&self, root: &DocumentElement) -> Result<String, SerializationError> {
            let name = root
                .find_data("name")
                .or_else(|| root.find_data("title"))
                .and_then(|e| e.text.clone())
                .unwrap_or_default();
            Ok(format!("{}:{}", root.tag, name))
        }
    }

    /// Fails on the n-th call
    struct FailingSerializer {
        calls: AtomicUsize,
        fail_at: usize,
    }

    impl DocumentSerializerPort for FailingSerializer {
        fn to_markup(&self, root: &DocumentElement) -> Result<String, SerializationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == self.fail_at {
                return Err(SerializationError::InvalidElementName(root.tag.clone()));
            }
            Ok(root.tag.clone())
        }
    }

    #[derive(Default)]
    struct RecordingArchiver {
        calls: Mutex<Vec<(Vec<NamedTextFile>, String)>>,
    }

    impl ArchivePort for RecordingArchiver {
        fn save(&self, files: Vec<NamedTextFile>, base_name: &str) -> Result<SavedArchive, ArchiveError> {
            self.calls
                .lock()
                .expect("lock")
                .push((files, base_name.to_string()));
            Ok(SavedArchive {
                file_name: format!("{base_name}.zip"),
                content_type: "application/zip".to_string(),
                bytes: vec![],
            })
        }
    }

    fn school_metadata() -> ScenarioMetadata {
        ScenarioMetadata::new("学校", 2, 3, "", vec![]).expect("valid metadata")
    }

    fn service(serializer: Arc<dyn DocumentSerializerPort>) -> (ScenarioExportService, Arc<RecordingArchiver>) {
        let archiver = Arc::new(RecordingArchiver::default());
        (ScenarioExportService::new(serializer, archiver.clone()), archiver)
    }

    #[test]
    fn test_two_students_produce_three_files() {
        let (service, archiver) = service(Arc::new(TagSerializer));
        let export = ScenarioExport {
            characters: vec![CharacterId::BoyStudent, CharacterId::GirlStudent],
            metadata: school_metadata(),
        };

        let archive = service.export_scenario(&export).expect("export should succeed");
        assert_eq!(archive.file_name, "scenario.zip");

        let calls = archiver.calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        let (files, base_name) = &calls[0];
        assert_eq!(base_name, "scenario");
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["男子学生.xml", "女子学生.xml", "公開シート.xml"]);
        assert_eq!(files[0].content, "rooper-card:男子学生");
        assert_eq!(files[2].content, "text-note:公開シート");
        assert!(files.iter().all(|f| f.mime_type == "text/plain"));
    }

    #[test]
    fn test_empty_cast_still_exports_note() {
        let (service, archiver) = service(Arc::new(TagSerializer));
        let export = ScenarioExport {
            characters: vec![],
            metadata: school_metadata(),
        };

        service.export_scenario(&export).expect("export should succeed");

        let calls = archiver.calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.len(), 1);
        assert_eq!(calls[0].0[0].filename, "公開シート.xml");
    }

    #[test]
    fn test_archive_called_once_for_large_cast() {
        let (service, archiver) = service(Arc::new(TagSerializer));
        let export = ScenarioExport {
            characters: CharacterId::ALL.to_vec(),
            metadata: ScenarioMetadata::new(
                "都市",
                4,
                7,
                "",
                vec![IncidentEntry::new(3, "殺人事件")],
            )
            .expect("valid metadata"),
        };

        service.export_scenario(&export).expect("export should succeed");

        let calls = archiver.calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.len(), CharacterId::ALL.len() + 1);
    }

    #[test]
    fn test_duplicate_characters_each_produce_a_file() {
        let (service, archiver) = service(Arc::new(TagSerializer));
        let export = ScenarioExport {
            characters: vec![CharacterId::Doctor, CharacterId::Doctor],
            metadata: school_metadata(),
        };

        service.export_scenario(&export).expect("export should succeed");

        let calls = archiver.calls.lock().expect("lock");
        let names: Vec<_> = calls[0].0.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["医者.xml", "医者.xml", "公開シート.xml"]);
    }

    #[test]
    fn test_serialization_failure_aborts_before_archive() {
        for fail_at in [0, 1, 2] {
            let (service, archiver) = service(Arc::new(FailingSerializer {
                calls: AtomicUsize::new(0),
                fail_at,
            }));
            let export = ScenarioExport {
                characters: vec![CharacterId::BoyStudent, CharacterId::GirlStudent],
                metadata: school_metadata(),
            };

            let result = service.export_scenario(&export);
            assert!(matches!(result, Err(ExportError::Serialization { .. })));
            assert!(archiver.calls.lock().expect("lock").is_empty());
        }
    }

    #[test]
    fn test_archive_error_is_propagated() {
        struct BrokenArchiver;
        impl ArchivePort for BrokenArchiver {
            fn save(&self, _: Vec<NamedTextFile>, _: &str) -> Result<SavedArchive, ArchiveError> {
                Err(ArchiveError::Bundle("disk full".to_string()))
            }
        }

        let service = ScenarioExportService::new(Arc::new(TagSerializer), Arc::new(BrokenArchiver));
        let export = ScenarioExport {
            characters: vec![CharacterId::Nurse],
            metadata: school_metadata(),
        };

        let err = service.export_scenario(&export).expect_err("archive fails");
        assert!(matches!(err, ExportError::Archive(ArchiveError::Bundle(_))));
    }
}
