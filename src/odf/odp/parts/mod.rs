//! Built-in part writers, one per document part.

mod charts;
mod content;
mod manifest;
mod meta;
mod mimetype;
mod pictures;
mod settings;
mod styles;
mod thumbnail;

pub use charts::ChartWriter;
pub use content::ContentWriter;
pub use manifest::ManifestWriter;
pub use meta::MetaWriter;
pub use mimetype::MimetypeWriter;
pub use pictures::PictureWriter;
pub use settings::SettingsWriter;
pub use styles::StylesWriter;
pub use thumbnail::ThumbnailWriter;

use crate::odf::constants::{OFFICE_VERSION, xmlns};

/// XML declaration plus the opening tag of an office root element.
fn open_document(root: &str, prefixes: &[(&str, &str)]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<office:{}{} office:version=\"{}\">",
        root,
        xmlns(prefixes),
        OFFICE_VERSION
    )
}
