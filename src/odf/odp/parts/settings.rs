use super::open_document;
use crate::common::Result;
use crate::odf::constants::{NS_CONFIG, NS_OFFICE, NS_OOO, ODF_SETTINGS};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};
use crate::presentation::Layout;
use std::fmt::Write as FmtWrite;

/// EMUs per 1/100 mm, the unit of the view settings.
const EMUS_PER_HUNDREDTH_MM: i64 = 360;

/// Writes `settings.xml` with a view area covering the whole slide.
#[derive(Debug, Default)]
pub struct SettingsWriter;

impl PartWriter for SettingsWriter {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        let xml = generate_settings_xml(ctx.presentation.layout)?;
        archive.write_entry(ODF_SETTINGS, xml.as_bytes())?;
        Ok(archive)
    }
}

fn generate_settings_xml(layout: Layout) -> Result<String> {
    let mut xml = open_document(
        "document-settings",
        &[("office", NS_OFFICE), ("config", NS_CONFIG), ("ooo", NS_OOO)],
    );
    xml.push_str(r#"<office:settings><config:config-item-set config:name="ooo:view-settings">"#);
    for (name, value) in [
        ("VisibleAreaTop", 0),
        ("VisibleAreaLeft", 0),
        ("VisibleAreaWidth", layout.width / EMUS_PER_HUNDREDTH_MM),
        ("VisibleAreaHeight", layout.height / EMUS_PER_HUNDREDTH_MM),
    ] {
        write!(
            xml,
            r#"<config:config-item config:name="{}" config:type="int">{}</config:config-item>"#,
            name, value
        )?;
    }
    xml.push_str("</config:config-item-set></office:settings></office:document-settings>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_area() {
        let xml = generate_settings_xml(Layout::SCREEN_4X3).unwrap();
        assert!(xml.contains(r#"config:name="VisibleAreaWidth" config:type="int">25400<"#));
        assert!(xml.contains(r#"config:name="VisibleAreaHeight" config:type="int">19050<"#));
    }
}
