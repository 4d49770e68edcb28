use crate::common::Result;
use crate::odf::constants::{ODF_MIMETYPE, ODF_PRESENTATION};
use crate::odf::core::Archive;
use crate::odf::odp::{ChartAccumulator, PartContext, PartWriter};

/// Writes the `mimetype` entry, uncompressed, as the first file of the package.
#[derive(Debug, Default)]
pub struct MimetypeWriter;

impl PartWriter for MimetypeWriter {
    fn name(&self) -> &'static str {
        "mimetype"
    }

    fn render(
        &self,
        mut archive: Archive,
        _ctx: &PartContext<'_>,
        _charts: &mut ChartAccumulator,
    ) -> Result<Archive> {
        archive.write_stored(ODF_MIMETYPE, ODF_PRESENTATION.as_bytes(), "")?;
        Ok(archive)
    }
}
