//! Platform abstraction layer
//!
//! Pure helpers for the browser glue in `main.rs`: pointer coordinates and
//! URL overrides. Kept free of `web_sys` so they run in native tests.

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::QualityPreset;

/// Canvas position and size on the page, from `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    /// Map client (viewport) coordinates into logical canvas pixels.
    ///
    /// The canvas may be scaled by CSS, so the offset is rescaled to the
    /// 800x600 space the sim works in. A collapsed rect maps unscaled.
    pub fn to_canvas(&self, client_x: f32, client_y: f32) -> Vec2 {
        let sx = if self.width > 0.0 { CANVAS_WIDTH / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { CANVAS_HEIGHT / self.height } else { 1.0 };
        Vec2::new((client_x - self.left) * sx, (client_y - self.top) * sy)
    }
}

/// Read `quality=<preset>` from a location search string like `?quality=low`
pub fn quality_override(search: &str) -> Option<QualityPreset> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "quality")
        .and_then(|(_, value)| QualityPreset::from_str(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_canvas_subtracts_offset() {
        let rect = CanvasRect { left: 20.0, top: 50.0, width: 800.0, height: 600.0 };
        assert_eq!(rect.to_canvas(120.0, 575.0), Vec2::new(100.0, 525.0));
    }

    #[test]
    fn test_css_scaled_canvas() {
        // Canvas shown at half size on a phone
        let rect = CanvasRect { left: 0.0, top: 10.0, width: 400.0, height: 300.0 };
        assert_eq!(rect.to_canvas(50.0, 272.5), Vec2::new(100.0, 525.0));
    }

    #[test]
    fn test_collapsed_rect_does_not_divide_by_zero() {
        let rect = CanvasRect { left: 5.0, top: 5.0, width: 0.0, height: 0.0 };
        assert_eq!(rect.to_canvas(15.0, 25.0), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_quality_override() {
        assert_eq!(quality_override("?quality=low"), Some(QualityPreset::Low));
        assert_eq!(quality_override("?debug=1&quality=High"), Some(QualityPreset::High));
        assert_eq!(quality_override("?quality=potato"), None);
        assert_eq!(quality_override(""), None);
    }
}
