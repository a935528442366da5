use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use tracing::{debug, warn};

use crate::domain::common::OverlayConfig;

/// Top-left corner of the warning text.
pub const WARNING_ANCHOR: (i64, i64) = (10, 10);
pub const WARNING_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Accepted text heights in pixels; other sizes are clamped into this range.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 6.0..=128.0;
const DEFAULT_FONT_SIZE: f32 = 20.0;

const BITMAP_GLYPH_SIZE: u32 = 8;

fn bounded_font_size(size: f32) -> f32 {
    if size.is_nan() {
        return DEFAULT_FONT_SIZE;
    }
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Font used for the allergy warning.
pub enum OverlayFont {
    TrueType { font: FontVec, size: f32 },
    /// 8x8 bitmap glyphs scaled up by an integer factor; always available.
    Builtin { scale: u32 },
}

impl OverlayFont {
    /// Loads the preferred font from `config.font_path`, falling back to the
    /// built-in bitmap font when it is missing or unreadable.
    pub fn load(config: &OverlayConfig) -> Self {
        let size = bounded_font_size(config.font_size);
        if size != config.font_size {
            warn!(
                requested = config.font_size,
                size = size,
                "Overlay font size out of range, clamped"
            );
        }

        let Some(path) = config.font_path.as_deref() else {
            return Self::builtin(size);
        };

        match Self::load_truetype(path, size) {
            Ok(font) => {
                debug!(path = %path.display(), "Loaded overlay font");
                font
            }
            Err(reason) => {
                warn!(
                    path = %path.display(),
                    reason = %reason,
                    "Overlay font unavailable, using built-in font"
                );
                Self::builtin(size)
            }
        }
    }

    pub fn builtin(size: f32) -> Self {
        let scale = (bounded_font_size(size) / BITMAP_GLYPH_SIZE as f32).floor().max(1.0) as u32;
        OverlayFont::Builtin { scale }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, OverlayFont::Builtin { .. })
    }

    fn load_truetype(path: &Path, size: f32) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| e.to_string())?;

        Ok(OverlayFont::TrueType { font, size })
    }
}

pub fn warning_text(matches: &[String]) -> String {
    format!("(!) Allergy: {}", matches.join(", "))
}

/// Writes the allergy warning onto the image. No-op when nothing matched.
pub fn annotate_allergy_warning(image: &mut RgbImage, matches: &[String], font: &OverlayFont) {
    if matches.is_empty() {
        return;
    }

    let text = warning_text(matches);
    match font {
        OverlayFont::TrueType { font, size } => draw_truetype(image, &text, font, *size),
        OverlayFont::Builtin { scale } => draw_bitmap(image, &text, *scale),
    }
}

fn draw_truetype(image: &mut RgbImage, text: &str, font: &FontVec, size: f32) {
    let scaled = font.as_scaled(PxScale::from(size));
    let (origin_x, origin_y) = WARNING_ANCHOR;
    let baseline = origin_y as f32 + scaled.ascent();
    let mut caret = origin_x as f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scaled.scale(), point(caret, baseline));
        caret += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                blend_pixel(
                    image,
                    bounds.min.x as i64 + i64::from(x),
                    bounds.min.y as i64 + i64::from(y),
                    coverage,
                );
            });
        }
    }
}

fn draw_bitmap(image: &mut RgbImage, text: &str, scale: u32) {
    let (origin_x, origin_y) = WARNING_ANCHOR;
    let scale = i64::from(scale.max(1));
    let advance = i64::from(BITMAP_GLYPH_SIZE) * scale;

    for (index, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let glyph_x = origin_x + index as i64 * advance;
        if glyph_x >= i64::from(image.width()) {
            break;
        }

        for (row, bits) in glyph.iter().enumerate() {
            for column in 0..BITMAP_GLYPH_SIZE {
                if bits & (1 << column) == 0 {
                    continue;
                }
                let x = glyph_x + i64::from(column) * scale;
                let y = origin_y + row as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        blend_pixel(image, x + dx, y + dy, 1.0);
                    }
                }
            }
        }
    }
}

fn blend_pixel(image: &mut RgbImage, x: i64, y: i64, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= image.width() || y >= image.height() {
        return;
    }

    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = image.get_pixel_mut(x, y);
    for (channel, target) in pixel.0.iter_mut().zip(WARNING_COLOR.0) {
        let blended = f32::from(*channel) * (1.0 - coverage) + f32::from(target) * coverage;
        *channel = blended.round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn white(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
    }

    fn red_pixels(image: &RgbImage) -> usize {
        image.pixels().filter(|p| **p == WARNING_COLOR).count()
    }

    #[test]
    fn warning_lists_matches_in_order() {
        let matches = vec!["gluten".to_string(), "dairy".to_string()];

        assert_eq!(warning_text(&matches), "(!) Allergy: gluten, dairy");
    }

    #[test]
    fn builtin_font_draws_red_text_below_and_right_of_anchor() {
        let mut image = white(400, 60);

        annotate_allergy_warning(&mut image, &["dairy".to_string()], &OverlayFont::builtin(20.0));

        assert!(red_pixels(&image) > 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            if *pixel == WARNING_COLOR {
                assert!(x >= 10 && y >= 10, "red pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn no_matches_leaves_image_untouched() {
        let mut image = white(64, 64);
        let original = image.clone();

        annotate_allergy_warning(&mut image, &[], &OverlayFont::builtin(20.0));

        assert_eq!(image, original);
    }

    #[test]
    fn text_is_clipped_on_small_images() {
        let mut image = white(12, 12);

        annotate_allergy_warning(&mut image, &["sugar".to_string()], &OverlayFont::builtin(20.0));

        assert_eq!(image.dimensions(), (12, 12));
    }

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let font = OverlayFont::load(&OverlayConfig {
            font_path: Some("/nonexistent/arial.ttf".into()),
            font_size: 20.0,
        });

        assert!(font.is_builtin());
    }

    #[test]
    fn unparseable_font_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"not a font").expect("write");

        let font = OverlayFont::load(&OverlayConfig {
            font_path: Some(file.path().to_path_buf()),
            font_size: 20.0,
        });

        assert!(font.is_builtin());
    }

    #[test]
    fn builtin_scale_derives_from_font_size() {
        assert!(matches!(OverlayFont::builtin(20.0), OverlayFont::Builtin { scale: 2 }));
        assert!(matches!(OverlayFont::builtin(4.0), OverlayFont::Builtin { scale: 1 }));
    }

    #[test]
    fn font_size_is_clamped() {
        assert!(matches!(OverlayFont::builtin(1e9), OverlayFont::Builtin { scale: 16 }));
        assert!(matches!(OverlayFont::builtin(f32::NAN), OverlayFont::Builtin { scale: 2 }));
        assert!(matches!(OverlayFont::builtin(-3.0), OverlayFont::Builtin { scale: 1 }));

        let font = OverlayFont::load(&OverlayConfig {
            font_path: Some(fixture_font()),
            font_size: 0.0,
        });
        assert!(matches!(font, OverlayFont::TrueType { size, .. } if size == 6.0));
    }

    fn fixture_font() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/DejaVuSansMono.ttf")
    }

    #[test]
    fn truetype_font_draws_red_text_below_and_right_of_anchor() {
        let font = OverlayFont::load(&OverlayConfig {
            font_path: Some(fixture_font()),
            font_size: 20.0,
        });
        assert!(!font.is_builtin());

        let mut image = white(400, 60);
        annotate_allergy_warning(&mut image, &["gluten".to_string()], &font);

        assert!(red_pixels(&image) > 0);
        let (anchor_x, anchor_y) = WARNING_ANCHOR;
        for (x, y, pixel) in image.enumerate_pixels() {
            if *pixel != Rgb([255, 255, 255]) {
                assert!(
                    i64::from(x) >= anchor_x && i64::from(y) >= anchor_y,
                    "touched pixel at ({x}, {y})"
                );
            }
        }
    }
}
