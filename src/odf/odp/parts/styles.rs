use super::content::MASTER_PAGE;
use super::open_document;
use crate::common::Result;
use crate::common::unit::emu_to_odf_length;
use crate::odf::constants::{NS_DRAW, NS_FO, NS_OFFICE, NS_PRESENTATION, NS_STYLE, ODF_STYLES};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};
use crate::presentation::Layout;
use std::fmt::Write as FmtWrite;

/// Writes `styles.xml`: the page layout and the master page every slide uses.
#[derive(Debug, Default)]
pub struct StylesWriter;

impl PartWriter for StylesWriter {
    fn name(&self) -> &'static str {
        "styles"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        let xml = generate_styles_xml(ctx.presentation.layout)?;
        archive.write_entry(ODF_STYLES, xml.as_bytes())?;
        Ok(archive)
    }
}

fn generate_styles_xml(layout: Layout) -> Result<String> {
    let mut xml = open_document(
        "document-styles",
        &[
            ("office", NS_OFFICE),
            ("style", NS_STYLE),
            ("draw", NS_DRAW),
            ("fo", NS_FO),
            ("presentation", NS_PRESENTATION),
        ],
    );
    let orientation = if layout.width >= layout.height {
        "landscape"
    } else {
        "portrait"
    };

    xml.push_str("<office:styles/><office:automatic-styles>");
    write!(
        xml,
        r#"<style:page-layout style:name="PM1"><style:page-layout-properties fo:margin-top="0cm" fo:margin-bottom="0cm" fo:margin-left="0cm" fo:margin-right="0cm" fo:page-width="{}" fo:page-height="{}" style:print-orientation="{}"/></style:page-layout>"#,
        emu_to_odf_length(layout.width),
        emu_to_odf_length(layout.height),
        orientation
    )?;
    xml.push_str(
        r#"<style:style style:name="Mdp1" style:family="drawing-page"><style:drawing-page-properties draw:background-size="full"/></style:style>"#,
    );
    xml.push_str("</office:automatic-styles>");
    write!(
        xml,
        r#"<office:master-styles><style:master-page style:name="{MASTER_PAGE}" style:page-layout-name="PM1" draw:style-name="Mdp1"/></office:master-styles>"#
    )?;
    xml.push_str("</office:document-styles>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_follows_layout() {
        let xml = generate_styles_xml(Layout::SCREEN_4X3).unwrap();
        assert!(xml.contains(r#"fo:page-width="25.400cm""#));
        assert!(xml.contains(r#"fo:page-height="19.050cm""#));
        assert!(xml.contains(r#"style:print-orientation="landscape""#));
        assert!(xml.contains(r#"style:master-page style:name="Default""#));
    }

    #[test]
    fn test_portrait_layout() {
        let layout = Layout {
            width: 100,
            height: 200,
        };
        let xml = generate_styles_xml(layout).unwrap();
        assert!(xml.contains(r#"style:print-orientation="portrait""#));
    }
}
