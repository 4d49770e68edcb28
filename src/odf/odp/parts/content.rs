//! `content.xml`: the slides and their shapes.

use super::open_document;
use crate::common::Result;
use crate::common::unit::emu_to_odf_length;
use crate::common::xml::escape_xml;
use crate::odf::constants::{
    NS_DRAW, NS_FO, NS_OFFICE, NS_PRESENTATION, NS_STYLE, NS_SVG, NS_TABLE, NS_TEXT, NS_XLINK,
    ODF_CONTENT,
};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};
use crate::presentation::{Chart, Drawing, Geometry, Group, RichText, Shape, Table};
use std::fmt::Write as FmtWrite;
use std::sync::Arc;
use tracing::warn;

/// Graphic style shared by every frame.
const FRAME_STYLE: &str = "gr1";
/// Drawing-page style shared by every slide.
const PAGE_STYLE: &str = "dp1";
/// Master page defined in `styles.xml`.
pub(crate) const MASTER_PAGE: &str = "Default";

/// Writes `content.xml` and registers every chart it places.
#[derive(Debug, Default)]
pub struct ContentWriter;

impl PartWriter for ContentWriter {
    fn name(&self) -> &'static str {
        "content"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        let xml = generate_content_xml(ctx, charts)?;
        archive.write_entry(ODF_CONTENT, xml.as_bytes())?;
        Ok(archive)
    }
}

fn generate_content_xml(ctx: &PartContext<'_>, charts: &mut ChartAccumulator) -> Result<String> {
    let mut xml = open_document(
        "document-content",
        &[
            ("office", NS_OFFICE),
            ("style", NS_STYLE),
            ("text", NS_TEXT),
            ("table", NS_TABLE),
            ("draw", NS_DRAW),
            ("fo", NS_FO),
            ("xlink", NS_XLINK),
            ("presentation", NS_PRESENTATION),
            ("svg", NS_SVG),
        ],
    );

    write!(
        xml,
        r#"<office:automatic-styles><style:style style:name="{PAGE_STYLE}" style:family="drawing-page"/><style:style style:name="{FRAME_STYLE}" style:family="graphic"><style:graphic-properties draw:stroke="none" draw:fill="none"/></style:style></office:automatic-styles>"#
    )?;
    xml.push_str("<office:body><office:presentation>");

    for (index, slide) in ctx.presentation.slides().iter().enumerate() {
        let default_name = format!("page{}", index + 1);
        let name = slide.name.as_deref().unwrap_or(&default_name);
        write!(
            xml,
            r#"<draw:page draw:name="{}" draw:style-name="{PAGE_STYLE}" draw:master-page-name="{MASTER_PAGE}">"#,
            escape_xml(name)
        )?;
        for shape in slide.shapes() {
            write_shape(&mut xml, shape, ctx, charts)?;
        }
        xml.push_str("</draw:page>");
    }

    xml.push_str("</office:presentation></office:body></office:document-content>");
    Ok(xml)
}

fn write_shape(
    xml: &mut String,
    shape: &Shape,
    ctx: &PartContext<'_>,
    charts: &mut ChartAccumulator,
) -> Result<()> {
    match shape {
        Shape::Drawing(drawing) => write_drawing(xml, drawing, ctx),
        Shape::Chart(chart) => write_chart(xml, chart, charts),
        Shape::Table(table) => write_table(xml, table),
        Shape::RichText(text) => write_rich_text(xml, text),
        Shape::Group(group) => write_group(xml, group, ctx, charts),
    }
}

fn open_frame(xml: &mut String, name: Option<&str>, geometry: Geometry) -> Result<()> {
    xml.push_str("<draw:frame");
    if let Some(name) = name {
        write!(xml, r#" draw:name="{}""#, escape_xml(name))?;
    }
    write!(
        xml,
        r#" draw:style-name="{FRAME_STYLE}" svg:x="{}" svg:y="{}" svg:width="{}" svg:height="{}">"#,
        emu_to_odf_length(geometry.x),
        emu_to_odf_length(geometry.y),
        emu_to_odf_length(geometry.width),
        emu_to_odf_length(geometry.height),
    )?;
    Ok(())
}

fn write_drawing(xml: &mut String, drawing: &Drawing, ctx: &PartContext<'_>) -> Result<()> {
    open_frame(xml, Some(drawing.name()), drawing.geometry())?;

    if ctx.drawings.contains(drawing) {
        let href = ctx.drawings.part_name(drawing)?;
        if drawing.is_media() {
            write!(
                xml,
                r#"<draw:plugin xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad" draw:mime-type="{}"><draw:param draw:name="Loop" draw:value="false"/></draw:plugin>"#,
                escape_xml(&href),
                drawing.mime_type()
            )?;
        } else {
            write!(
                xml,
                r#"<draw:image xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad"/>"#,
                escape_xml(&href)
            )?;
        }
    } else {
        // only reachable for drawings nested two or more groups deep
        warn!(drawing = drawing.name(), "drawing is not embedded, writing an empty frame");
    }

    if !drawing.description().is_empty() {
        write!(xml, "<svg:desc>{}</svg:desc>", escape_xml(drawing.description()))?;
    }
    xml.push_str("</draw:frame>");
    Ok(())
}

fn write_chart(xml: &mut String, chart: &Arc<Chart>, charts: &mut ChartAccumulator) -> Result<()> {
    let entry = charts.register(chart);
    open_frame(xml, Some(&entry.object_name), chart.geometry)?;
    write!(
        xml,
        r#"<draw:object xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad"/></draw:frame>"#,
        escape_xml(&entry.href())
    )?;
    Ok(())
}

fn write_table(xml: &mut String, table: &Table) -> Result<()> {
    let columns = table.column_count();
    open_frame(xml, table.name.as_deref(), table.geometry)?;
    xml.push_str("<table:table>");
    if columns > 0 {
        write!(
            xml,
            r#"<table:table-column table:number-columns-repeated="{}"/>"#,
            columns
        )?;
    }
    for row in &table.rows {
        xml.push_str("<table:table-row>");
        for column in 0..columns {
            match row.get(column) {
                Some(cell) => write!(
                    xml,
                    r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
                    escape_xml(cell)
                )?,
                None => xml.push_str("<table:table-cell/>"),
            }
        }
        xml.push_str("</table:table-row>");
    }
    xml.push_str("</table:table></draw:frame>");
    Ok(())
}

fn write_rich_text(xml: &mut String, text: &RichText) -> Result<()> {
    open_frame(xml, text.name.as_deref(), text.geometry)?;
    xml.push_str("<draw:text-box>");
    for paragraph in &text.paragraphs {
        write!(xml, "<text:p>{}</text:p>", escape_xml(paragraph))?;
    }
    xml.push_str("</draw:text-box></draw:frame>");
    Ok(())
}

fn write_group(
    xml: &mut String,
    group: &Group,
    ctx: &PartContext<'_>,
    charts: &mut ChartAccumulator,
) -> Result<()> {
    match &group.name {
        Some(name) => write!(xml, r#"<draw:g draw:name="{}">"#, escape_xml(name))?,
        None => xml.push_str("<draw:g>"),
    }
    for shape in group.shapes() {
        write_shape(xml, shape, ctx, charts)?;
    }
    xml.push_str("</draw:g>");
    Ok(())
}
