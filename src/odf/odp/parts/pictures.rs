//! Embedded picture and media payloads.

use crate::common::Result;
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, DrawingRegistry, PartContext, PartWriter};
use crate::presentation::{Drawing, DrawingSource};
use tracing::debug;

/// Copies every registered drawing into `Pictures/`, once per drawing, in
/// registry order.
///
/// With disk caching enabled, base64 payloads are decoded into a temporary
/// file in the caching directory first, so the decoded bytes never sit in
/// memory.
#[derive(Debug, Default)]
pub struct PictureWriter;

impl PartWriter for PictureWriter {
    fn name(&self) -> &'static str {
        "pictures"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        for (index, drawing) in ctx.drawings.iter() {
            let part = DrawingRegistry::part_name_at(index, drawing);
            let size = write_payload(&mut archive, &part, drawing, ctx)?;
            debug!(part = %part, bytes = size, "picture written");
        }
        Ok(archive)
    }
}

fn write_payload(
    archive: &mut Archive,
    part: &str,
    drawing: &Drawing,
    ctx: &PartContext<'_>,
) -> Result<u64> {
    let caching = ctx.disk_caching();
    let mut reader = drawing.open()?;

    if caching.is_enabled() && matches!(drawing.source(), DrawingSource::Base64(_)) {
        let mut staged = caching.stage(&mut reader)?;
        // removed when `staged` drops
        return archive.write_entry_from_reader(part, &mut staged, drawing.mime_type());
    }
    archive.write_entry_from_reader(part, &mut reader, drawing.mime_type())
}
