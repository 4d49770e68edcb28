//! Embedded chart objects.
//!
//! Every chart registered by the content writer becomes an `Object N/`
//! sub-document holding the chart and its data in a local table. Column A of
//! that table carries the categories, series follow from column B.

use super::open_document;
use crate::common::Result;
use crate::common::unit::emu_to_odf_length;
use crate::common::xml::escape_xml;
use crate::odf::constants::{
    NS_CHART, NS_DRAW, NS_OFFICE, NS_STYLE, NS_SVG, NS_TABLE, NS_TEXT, NS_XLINK, XML_MEDIA_TYPE,
};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};
use crate::presentation::{Chart, ChartKind};
use std::fmt::Write as FmtWrite;
use tracing::debug;

const LOCAL_TABLE: &str = "local-table";

#[derive(Debug, Default)]
pub struct ChartWriter;

impl PartWriter for ChartWriter {
    fn name(&self) -> &'static str {
        "charts"
    }

    fn render(
        &self,
        mut archive: Archive,
        _ctx: &PartContext<'_>,
        charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        for entry in charts.iter_mut() {
            let rendered = generate_chart_xml(&entry.chart)?;
            let part = format!("{}content.xml", entry.object_dir());
            archive.write_entry_with_media_type(&part, rendered.xml.as_bytes(), XML_MEDIA_TYPE)?;
            debug!(object = %entry.object_name, series = rendered.series_ranges.len(), "chart written");

            entry.parts.push(part);
            entry.series_ranges = rendered.series_ranges;
        }
        Ok(archive)
    }
}

struct RenderedChart {
    xml: String,
    series_ranges: Vec<String>,
}

/// Spreadsheet column name for a zero-based index: A..Z, AA, AB, ...
fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn cell_range(column: usize, first_row: usize, last_row: usize) -> String {
    let column = column_name(column);
    format!("{LOCAL_TABLE}.${column}${first_row}:.${column}${last_row}")
}

fn generate_chart_xml(chart: &Chart) -> Result<RenderedChart> {
    // header row plus one row per category
    let rows = chart
        .series
        .iter()
        .map(|s| s.points.len())
        .max()
        .unwrap_or(0);
    let last_row = rows + 1;
    let categories: Vec<&str> = chart.categories().collect();

    let mut xml = open_document(
        "document-content",
        &[
            ("office", NS_OFFICE),
            ("style", NS_STYLE),
            ("text", NS_TEXT),
            ("table", NS_TABLE),
            ("draw", NS_DRAW),
            ("xlink", NS_XLINK),
            ("svg", NS_SVG),
            ("chart", NS_CHART),
        ],
    );
    xml.push_str("<office:body><office:chart>");
    write!(
        xml,
        r#"<chart:chart chart:class="{}" svg:width="{}" svg:height="{}">"#,
        chart.kind.odf_class(),
        emu_to_odf_length(chart.geometry.width),
        emu_to_odf_length(chart.geometry.height)
    )?;
    if let Some(title) = &chart.title {
        write!(xml, "<chart:title><text:p>{}</text:p></chart:title>", escape_xml(title))?;
    }
    xml.push_str(r#"<chart:legend chart:legend-position="end"/>"#);

    write!(
        xml,
        r#"<chart:plot-area table:cell-range-address="{LOCAL_TABLE}.$A$1:.${}${}">"#,
        column_name(chart.series.len()),
        last_row
    )?;
    if chart.kind != ChartKind::Pie {
        write!(
            xml,
            r#"<chart:axis chart:dimension="x" chart:name="primary-x"><chart:categories table:cell-range-address="{}"/></chart:axis><chart:axis chart:dimension="y" chart:name="primary-y"/>"#,
            cell_range(0, 2, last_row)
        )?;
    }

    let mut series_ranges = Vec::with_capacity(chart.series.len());
    for (index, _) in chart.series.iter().enumerate() {
        let column = index + 1;
        let values = cell_range(column, 2, last_row);
        write!(
            xml,
            r#"<chart:series chart:class="{}" chart:values-cell-range-address="{}" chart:label-cell-address="{LOCAL_TABLE}.${}$1"/>"#,
            chart.kind.odf_class(),
            values,
            column_name(column)
        )?;
        series_ranges.push(values);
    }
    xml.push_str("</chart:plot-area>");

    write_local_table(&mut xml, chart, &categories, rows)?;
    xml.push_str("</chart:chart></office:chart></office:body></office:document-content>");

    Ok(RenderedChart { xml, series_ranges })
}

fn write_local_table(xml: &mut String, chart: &Chart, categories: &[&str], rows: usize) -> Result<()> {
    write!(xml, r#"<table:table table:name="{LOCAL_TABLE}">"#)?;
    xml.push_str("<table:table-header-columns><table:table-column/></table:table-header-columns>");
    if !chart.series.is_empty() {
        write!(
            xml,
            r#"<table:table-columns><table:table-column table:number-columns-repeated="{}"/></table:table-columns>"#,
            chart.series.len()
        )?;
    }

    xml.push_str("<table:table-header-rows><table:table-row><table:table-cell/>");
    for series in &chart.series {
        write!(
            xml,
            r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
            escape_xml(&series.name)
        )?;
    }
    xml.push_str("</table:table-row></table:table-header-rows><table:table-rows>");

    let mut number = ryu::Buffer::new();
    for row in 0..rows {
        xml.push_str("<table:table-row>");
        match categories.get(row) {
            Some(category) => write!(
                xml,
                r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
                escape_xml(category)
            )?,
            None => xml.push_str("<table:table-cell/>"),
        }
        for series in &chart.series {
            match series.points.get(row) {
                Some((_, value)) if value.is_finite() => {
                    let value = number.format_finite(*value);
                    write!(
                        xml,
                        r#"<table:table-cell office:value-type="float" office:value="{value}"><text:p>{value}</text:p></table:table-cell>"#
                    )?;
                },
                _ => xml.push_str("<table:table-cell/>"),
            }
        }
        xml.push_str("</table:table-row>");
    }
    xml.push_str("</table:table-rows></table:table>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Series;

    fn sales() -> Chart {
        Chart::new(ChartKind::Bar)
            .with_title("Sales")
            .with_series(Series::new("2023").with_point("Q1", 1.5).with_point("Q2", 2.0))
            .with_series(Series::new("2024").with_point("Q1", 3.0).with_point("Q2", f64::NAN))
    }

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_series_ranges() {
        let rendered = generate_chart_xml(&sales()).unwrap();
        assert_eq!(
            rendered.series_ranges,
            vec!["local-table.$B$2:.$B$3", "local-table.$C$2:.$C$3"]
        );
        assert!(rendered.xml.contains(r#"chart:class="chart:bar""#));
        assert!(rendered.xml.contains("<text:p>Sales</text:p>"));
        assert!(rendered.xml.contains(r#"office:value="1.5""#));
    }

    #[test]
    fn test_non_finite_values_are_empty_cells() {
        let rendered = generate_chart_xml(&sales()).unwrap();
        assert!(!rendered.xml.contains("NaN"));
        assert_eq!(rendered.xml.matches(r#"office:value-type="float""#).count(), 3);
    }

    #[test]
    fn test_pie_has_no_axes() {
        let pie = Chart::new(ChartKind::Pie).with_series(Series::new("share").with_point("a", 1.0));
        let rendered = generate_chart_xml(&pie).unwrap();
        assert!(rendered.xml.contains(r#"chart:class="chart:circle""#));
        assert!(!rendered.xml.contains("chart:axis"));
    }
}
