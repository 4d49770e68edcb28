use crate::common::Result;
use crate::odf::constants::ODF_THUMBNAIL;
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};

/// Writes `Thumbnails/thumbnail.png` when the presentation carries a preview.
#[derive(Debug, Default)]
pub struct ThumbnailWriter;

impl PartWriter for ThumbnailWriter {
    fn name(&self) -> &'static str {
        "thumbnail"
    }

    fn render(
        &self,
        mut archive: Archive,
        ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        if let Some(png) = ctx.presentation.thumbnail() {
            archive.write_entry_with_media_type(ODF_THUMBNAIL, png, "image/png")?;
        }
        Ok(archive)
    }
}
