//! Unit conversion utilities.
//!
//! Geometry in the presentation model is expressed in EMUs (English Metric
//! Units); ODF attributes such as `svg:x` and `fo:page-width` want lengths
//! with an explicit unit suffix.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn px_to_emu(px: u32, dpi: u32) -> i64 {
    ((px as f64) * EMUS_PER_INCH as f64 / dpi as f64) as i64
}

#[inline]
pub fn px_to_emu_96(px: u32) -> i64 {
    px_to_emu(px, 96)
}

#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

#[inline]
pub fn emu_to_cm_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_CM as f64
}

/// Format an EMU length as an ODF length in centimetres, e.g. `"2.540cm"`.
/// Lengths are rounded to three decimals.
pub fn emu_to_odf_length(emu: i64) -> String {
    format!("{:.3}cm", emu_to_cm_f64(emu))
}
