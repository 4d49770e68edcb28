//! ODF constants: MIME types, part paths and namespace declarations used when
//! writing a presentation package.

/// ODF version written to every part
pub const OFFICE_VERSION: &str = "1.2";

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Presentation (.odp)
pub const ODF_PRESENTATION: &str = "application/vnd.oasis.opendocument.presentation";

/// MIME type for an embedded OpenDocument Chart object
pub const ODF_CHART: &str = "application/vnd.oasis.opendocument.chart";

/// Media type of XML parts in the manifest
pub const XML_MEDIA_TYPE: &str = "text/xml";

// ============================================================================
// PART PATHS
// ============================================================================

/// The uncompressed MIME type entry, first in the archive
pub const ODF_MIMETYPE: &str = "mimetype";

/// Main content part
pub const ODF_CONTENT: &str = "content.xml";

/// Metadata part
pub const ODF_META: &str = "meta.xml";

/// Application settings part
pub const ODF_SETTINGS: &str = "settings.xml";

/// Styles part
pub const ODF_STYLES: &str = "styles.xml";

/// Package manifest
pub const ODF_MANIFEST: &str = "META-INF/manifest.xml";

/// Preview image
pub const ODF_THUMBNAIL: &str = "Thumbnails/thumbnail.png";

/// Directory holding embedded pictures and media
pub const ODF_PICTURES_DIR: &str = "Pictures/";

// ============================================================================
// NAMESPACES
// ============================================================================

pub const NS_OFFICE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
pub const NS_STYLE: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
pub const NS_TEXT: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
pub const NS_TABLE: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
pub const NS_DRAW: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";
pub const NS_FO: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";
pub const NS_XLINK: &str = "http://www.w3.org/1999/xlink";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_META: &str = "urn:oasis:names:tc:opendocument:xmlns:meta:1.0";
pub const NS_PRESENTATION: &str = "urn:oasis:names:tc:opendocument:xmlns:presentation:1.0";
pub const NS_SVG: &str = "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0";
pub const NS_CHART: &str = "urn:oasis:names:tc:opendocument:xmlns:chart:1.0";
pub const NS_CONFIG: &str = "urn:oasis:names:tc:opendocument:xmlns:config:1.0";
pub const NS_MANIFEST: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";
pub const NS_OOO: &str = "http://openoffice.org/2004/office";

/// Render `xmlns:prefix="uri"` declarations for a root element.
pub fn xmlns(prefixes: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (prefix, uri) in prefixes {
        out.push_str(" xmlns:");
        out.push_str(prefix);
        out.push_str("=\"");
        out.push_str(uri);
        out.push('"');
    }
    out
}
