//! `meta.xml`: document properties.
//!
//! Dates are only written when the presentation carries them, so saving the
//! same presentation twice yields the same bytes.

use super::open_document;
use crate::common::xml::escape_xml;
use crate::common::{Metadata, Result};
use crate::odf::constants::{NS_DC, NS_META, NS_OFFICE, NS_XLINK, ODF_META};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

#[derive(Debug, Default)]
pub struct MetaWriter;

impl PartWriter for MetaWriter {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        let xml = generate_meta_xml(&ctx.presentation.metadata, &ctx.options.generator)?;
        archive.write_entry(ODF_META, xml.as_bytes())?;
        Ok(archive)
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn generate_meta_xml(metadata: &Metadata, generator: &str) -> Result<String> {
    let mut xml = open_document(
        "document-meta",
        &[
            ("office", NS_OFFICE),
            ("xlink", NS_XLINK),
            ("dc", NS_DC),
            ("meta", NS_META),
        ],
    );
    xml.push_str("<office:meta>");
    write!(xml, "<meta:generator>{}</meta:generator>", escape_xml(generator))?;
    if metadata.has_data() {
        write_properties(&mut xml, metadata)?;
    }
    xml.push_str("</office:meta></office:document-meta>");
    Ok(xml)
}

fn write_properties(xml: &mut String, metadata: &Metadata) -> Result<()> {
    if let Some(title) = &metadata.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(subject) = &metadata.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(subject))?;
    }
    if let Some(description) = &metadata.description {
        write!(xml, "<dc:description>{}</dc:description>", escape_xml(description))?;
    }
    if let Some(author) = &metadata.author {
        write!(xml, "<meta:initial-creator>{}</meta:initial-creator>", escape_xml(author))?;
    }
    if let Some(creator) = metadata.last_modified_by.as_ref().or(metadata.author.as_ref()) {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
    }
    if let Some(created) = &metadata.created {
        write!(xml, "<meta:creation-date>{}</meta:creation-date>", format_date(created))?;
    }
    if let Some(modified) = &metadata.modified {
        write!(xml, "<dc:date>{}</dc:date>", format_date(modified))?;
    }
    for keyword in metadata.keyword_list() {
        write!(xml, "<meta:keyword>{}</meta:keyword>", escape_xml(keyword))?;
    }
    if let Some(category) = &metadata.category {
        write!(
            xml,
            r#"<meta:user-defined meta:name="Category">{}</meta:user-defined>"#,
            escape_xml(category)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_metadata_has_only_generator() {
        let xml = generate_meta_xml(&Metadata::default(), "gen/1.0").unwrap();
        assert!(xml.contains("<meta:generator>gen/1.0</meta:generator>"));
        assert!(!xml.contains("dc:date"));
        assert!(!xml.contains("meta:creation-date"));
        assert!(!xml.contains("dc:creator"));
        assert!(xml.ends_with(
            "<office:meta><meta:generator>gen/1.0</meta:generator></office:meta></office:document-meta>"
        ));
    }

    #[test]
    fn test_dates_alone_are_written() {
        let metadata = Metadata {
            modified: Some(Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap()),
            ..Default::default()
        };
        let xml = generate_meta_xml(&metadata, "gen").unwrap();
        assert!(xml.contains("<dc:date>2024-05-02T12:00:00Z</dc:date>"));
        assert!(!xml.contains("dc:title"));
    }

    #[test]
    fn test_full_metadata() {
        let metadata = Metadata {
            title: Some("Q3 & Q4".to_string()),
            author: Some("Ana".to_string()),
            last_modified_by: Some("Bo".to_string()),
            keywords: Some("sales; plan, 2024".to_string()),
            category: Some("Finance".to_string()),
            created: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()),
            ..Default::default()
        };
        let xml = generate_meta_xml(&metadata, "gen").unwrap();

        assert!(xml.contains("<dc:title>Q3 &amp; Q4</dc:title>"));
        assert!(xml.contains("<meta:initial-creator>Ana</meta:initial-creator>"));
        assert!(xml.contains("<dc:creator>Bo</dc:creator>"));
        assert!(xml.contains("<meta:creation-date>2024-03-01T09:30:00Z</meta:creation-date>"));
        assert_eq!(xml.matches("<meta:keyword>").count(), 3);
        assert!(xml.contains(r#"meta:name="Category">Finance<"#));
    }
}
