//! `META-INF/manifest.xml`: the package table of contents.
//!
//! Lists every entry written before it, so it must run last.

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::odf::constants::{
    NS_MANIFEST, ODF_CHART, ODF_MANIFEST, ODF_MIMETYPE, ODF_PRESENTATION, OFFICE_VERSION,
};
use crate::odf::core::{Archive, ArchiveEntry};
use crate::odf::odp::{ChartAccumulator, ChartEntry, PartContext, PartWriter};
use std::fmt::Write as FmtWrite;

#[derive(Debug, Default)]
pub struct ManifestWriter;

impl PartWriter for ManifestWriter {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn render(
        &self,
        mut archive: Archive,
        _ctx: &PartContext<'_>,
        charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        let xml = generate_manifest_xml(archive.entries(), charts.iter())?;
        archive.write_entry(ODF_MANIFEST, xml.as_bytes())?;
        Ok(archive)
    }
}

fn file_entry(xml: &mut String, path: &str, media_type: &str) -> Result<()> {
    write!(
        xml,
        r#"<manifest:file-entry manifest:full-path="{}" manifest:media-type="{}"/>"#,
        escape_xml(path),
        escape_xml(media_type)
    )?;
    Ok(())
}

fn generate_manifest_xml<'a>(
    entries: &[ArchiveEntry],
    charts: impl Iterator<Item = &'a ChartEntry>,
) -> Result<String> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write!(
        xml,
        r#"<manifest:manifest xmlns:manifest="{NS_MANIFEST}" manifest:version="{OFFICE_VERSION}">"#
    )?;
    write!(
        xml,
        r#"<manifest:file-entry manifest:full-path="/" manifest:version="{OFFICE_VERSION}" manifest:media-type="{ODF_PRESENTATION}"/>"#
    )?;
    for chart in charts {
        file_entry(&mut xml, &chart.object_dir(), ODF_CHART)?;
    }
    for entry in entries.iter().filter(|e| e.name != ODF_MIMETYPE) {
        file_entry(&mut xml, &entry.name, &entry.media_type)?;
    }
    xml.push_str("</manifest:manifest>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Chart, ChartKind};
    use std::sync::Arc;

    fn entry(name: &str, media_type: &str) -> ArchiveEntry {
        ArchiveEntry {
            name: name.to_string(),
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn test_lists_entries_and_chart_objects() {
        let entries = vec![
            entry("mimetype", ""),
            entry("content.xml", "text/xml"),
            entry("Object 1/content.xml", "text/xml"),
            entry("Pictures/image1.png", "image/png"),
        ];
        let mut charts = ChartAccumulator::new();
        charts.register(&Arc::new(Chart::new(ChartKind::Bar)));

        let xml = generate_manifest_xml(&entries, charts.iter()).unwrap();
        assert!(xml.contains(r#"manifest:full-path="/" manifest:version="1.2""#));
        assert!(xml.contains(
            r#"manifest:full-path="Object 1/" manifest:media-type="application/vnd.oasis.opendocument.chart""#
        ));
        assert!(xml.contains(r#"manifest:full-path="Pictures/image1.png" manifest:media-type="image/png""#));
        assert!(!xml.contains(r#"manifest:full-path="mimetype""#));
    }
}
