//! Zip archive adapter
//!
//! Builds the whole archive in memory; the HTTP layer sends the bytes as a
//! download.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::outbound::{ArchiveError, ArchivePort, NamedTextFile, SavedArchive};

pub const APPLICATION_ZIP: &str = "application/zip";

#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

fn bundle_error(e: zip::result::ZipError) -> ArchiveError {
    ArchiveError::Bundle(e.to_string())
}

/// One entry per filename: the last content wins, at the first position
fn collapse_duplicates(files: Vec<NamedTextFile>) -> Vec<NamedTextFile> {
    let mut entries: Vec<NamedTextFile> = Vec::with_capacity(files.len());
    for file in files {
        match entries.iter_mut().find(|e| e.filename == file.filename) {
            Some(existing) => *existing = file,
            None => entries.push(file),
        }
    }
    entries
}

impl ArchivePort for ZipArchiver {
    fn save(&self, files: Vec<NamedTextFile>, base_name: &str) -> Result<SavedArchive, ArchiveError> {
        if base_name.trim().is_empty() {
            return Err(ArchiveError::EmptyBaseName);
        }
        if files.iter().any(|f| f.filename.is_empty()) {
            return Err(ArchiveError::EmptyFileName);
        }

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for file in collapse_duplicates(files) {
            writer
                .start_file(file.filename.as_str(), options)
                .map_err(bundle_error)?;
            writer.write_all(file.content.as_bytes())?;
        }

        let bytes = writer.finish().map_err(bundle_error)?.into_inner();
        tracing::debug!(base_name, bytes = bytes.len(), "Wrote zip archive");

        Ok(SavedArchive {
            file_name: format!("{}.zip", base_name),
            content_type: APPLICATION_ZIP.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::Arc;

    use crate::application::services::{ScenarioExport, ScenarioExportService};
    use crate::domain::value_objects::{CharacterId, ScenarioMetadata};
    use crate::infrastructure::export::XmlSerializer;

    /// (name, content) of every entry, in archive order
    fn entries(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        (0..archive.len())
            .map(|i| {
                let mut entry = archive.by_index(i).expect("entry");
                let mut content = String::new();
                entry.read_to_string(&mut content).expect("utf8 content");
                (entry.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_writes_named_entries() {
        let archive = ZipArchiver::new()
            .save(
                vec![
                    NamedTextFile::text("a.xml", "<a/>"),
                    NamedTextFile::text("b.xml", "<b/>"),
                ],
                "scenario",
            )
            .expect("archive");

        assert_eq!(archive.file_name, "scenario.zip");
        assert_eq!(archive.content_type, "application/zip");
        assert_eq!(
            entries(&archive.bytes),
            vec![
                ("a.xml".to_string(), "<a/>".to_string()),
                ("b.xml".to_string(), "<b/>".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_keep_last_content() {
        let archive = ZipArchiver::new()
            .save(
                vec![
                    NamedTextFile::text("x.xml", "first"),
                    NamedTextFile::text("y.xml", "other"),
                    NamedTextFile::text("x.xml", "second"),
                ],
                "scenario",
            )
            .expect("archive");

        assert_eq!(
            entries(&archive.bytes),
            vec![
                ("x.xml".to_string(), "second".to_string()),
                ("y.xml".to_string(), "other".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_empty_names() {
        let archiver = ZipArchiver::new();
        assert!(matches!(
            archiver.save(vec![], ""),
            Err(ArchiveError::EmptyBaseName)
        ));
        assert!(matches!(
            archiver.save(vec![NamedTextFile::text("", "x")], "scenario"),
            Err(ArchiveError::EmptyFileName)
        ));
    }

    #[test]
    fn test_student_export_contains_exactly_three_files() {
        let service = ScenarioExportService::new(Arc::new(XmlSerializer::new()), Arc::new(ZipArchiver::new()));
        let export = ScenarioExport {
            characters: vec![CharacterId::BoyStudent, CharacterId::GirlStudent],
            metadata: ScenarioMetadata::new("学校", 2, 3, "", vec![]).expect("valid metadata"),
        };

        let archive = service.export_scenario(&export).expect("export");
        let files = entries(&archive.bytes);

        let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["男子学生.xml", "女子学生.xml", "公開シート.xml"]);
        for (_, content) in &files {
            assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        }
        assert!(files[2].1.contains("ループ回数:2 1ループ日数:3日"));
    }

    #[test]
    fn test_empty_cast_exports_only_the_note() {
        let service = ScenarioExportService::new(Arc::new(XmlSerializer::new()), Arc::new(ZipArchiver::new()));
        let export = ScenarioExport {
            characters: vec![],
            metadata: ScenarioMetadata::new("神社", 1, 1, "", vec![]).expect("valid metadata"),
        };

        let archive = service.export_scenario(&export).expect("export");
        let files = entries(&archive.bytes);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "公開シート.xml");
    }
}
