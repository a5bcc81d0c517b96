//! Zoom level handling.
//!
//! Zoom is expressed as a percentage of the page's natural size, where 100%
//! maps one PDF point to 96/72 device-independent pixels. Fit modes derive
//! the percentage from the viewport and the first page's size.

/// Minimum and maximum supported zoom percentages.
pub const MIN_ZOOM_PERCENT: u32 = 25;
pub const MAX_ZOOM_PERCENT: u32 = 400;

/// Steps walked by the zoom-in and zoom-out buttons.
pub const ZOOM_PRESETS: [u32; 8] = [50, 75, 100, 125, 150, 200, 300, 400];

/// Entries of the zoom pick list.
pub const ZOOM_CHOICES: [ZoomChoice; 10] = [
    ZoomChoice::PageWidth,
    ZoomChoice::PageFit,
    ZoomChoice::Percent(50),
    ZoomChoice::Percent(75),
    ZoomChoice::Percent(100),
    ZoomChoice::Percent(125),
    ZoomChoice::Percent(150),
    ZoomChoice::Percent(200),
    ZoomChoice::Percent(300),
    ZoomChoice::Percent(400),
];

/// Padding kept around a page when fitting it into the viewport.
const PAGE_GAP: f32 = 20.0;
const POINTS_TO_PX: f32 = 96.0 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    Percent,
    PageWidth,
    PageFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomChoice {
    Percent(u32),
    PageWidth,
    PageFit,
}

impl std::fmt::Display for ZoomChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomChoice::Percent(percent) => write!(f, "{percent}%"),
            ZoomChoice::PageWidth => write!(f, "Page width"),
            ZoomChoice::PageFit => write!(f, "Page fit"),
        }
    }
}

/// Viewport and page dimensions needed by the fit modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitGeometry {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// First page size in PDF points.
    pub page_width: f32,
    pub page_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u32,
    mode: ZoomMode,
}

impl Zoom {
    pub fn new(percent: u32) -> Self {
        Self {
            percent: clamp_zoom(percent),
            mode: ZoomMode::Percent,
        }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    /// Pixels per PDF point at the current zoom.
    pub fn render_scale(&self) -> f32 {
        self.percent as f32 / 100.0 * POINTS_TO_PX
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Current pick list selection.
    pub fn choice(&self) -> ZoomChoice {
        match self.mode {
            ZoomMode::Percent => ZoomChoice::Percent(self.percent),
            ZoomMode::PageWidth => ZoomChoice::PageWidth,
            ZoomMode::PageFit => ZoomChoice::PageFit,
        }
    }

    /// Move to the next larger preset. Returns whether the percentage changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = ZOOM_PRESETS
            .iter()
            .copied()
            .find(|preset| *preset > self.percent)
            .unwrap_or(MAX_ZOOM_PERCENT);
        self.set_percent(next)
    }

    /// Move to the next smaller preset. Returns whether the percentage changed.
    pub fn zoom_out(&mut self) -> bool {
        let previous = ZOOM_PRESETS
            .iter()
            .rev()
            .copied()
            .find(|preset| *preset < self.percent)
            .unwrap_or(MIN_ZOOM_PERCENT.max(self.percent.min(ZOOM_PRESETS[0])));
        self.set_percent(previous)
    }

    /// Apply a pick list selection. Fit modes need geometry; without it the
    /// mode is remembered and the percentage stays until [`Zoom::refit`].
    pub fn select(&mut self, choice: ZoomChoice, geometry: Option<FitGeometry>) -> bool {
        match choice {
            ZoomChoice::Percent(percent) => self.set_percent(percent),
            ZoomChoice::PageWidth => {
                self.mode = ZoomMode::PageWidth;
                self.refit(geometry)
            }
            ZoomChoice::PageFit => {
                self.mode = ZoomMode::PageFit;
                self.refit(geometry)
            }
        }
    }

    /// Recompute the percentage for fit modes after a viewport change.
    pub fn refit(&mut self, geometry: Option<FitGeometry>) -> bool {
        let Some(geometry) = geometry else {
            return false;
        };
        let percent = match self.mode {
            ZoomMode::Percent => return false,
            ZoomMode::PageWidth => fit_width_percent(geometry.viewport_width, geometry.page_width),
            ZoomMode::PageFit => fit_page_percent(
                geometry.viewport_width,
                geometry.viewport_height,
                geometry.page_width,
                geometry.page_height,
            ),
        };
        let changed = percent != self.percent;
        self.percent = percent;
        changed
    }

    fn set_percent(&mut self, percent: u32) -> bool {
        let clamped = clamp_zoom(percent);
        let changed = clamped != self.percent;
        self.percent = clamped;
        self.mode = ZoomMode::Percent;
        changed
    }
}

fn clamp_zoom(zoom: u32) -> u32 {
    zoom.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT)
}

fn fit_width_percent(viewport_width: f32, page_width: f32) -> u32 {
    if viewport_width <= 0.0 || page_width <= 0.0 {
        return 100;
    }

    let usable_width = (viewport_width - PAGE_GAP * 2.0).max(1.0);
    clamp_zoom(((usable_width / (page_width * POINTS_TO_PX)) * 100.0).round() as u32)
}

fn fit_page_percent(
    viewport_width: f32,
    viewport_height: f32,
    page_width: f32,
    page_height: f32,
) -> u32 {
    if viewport_width <= 0.0 || viewport_height <= 0.0 || page_width <= 0.0 || page_height <= 0.0
    {
        return 100;
    }

    let usable_width = (viewport_width - PAGE_GAP * 2.0).max(1.0);
    let usable_height = (viewport_height - PAGE_GAP * 2.0).max(1.0);
    let width_ratio = usable_width / (page_width * POINTS_TO_PX);
    let height_ratio = usable_height / (page_height * POINTS_TO_PX);
    clamp_zoom((width_ratio.min(height_ratio) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_in(viewport_width: f32, viewport_height: f32) -> FitGeometry {
        FitGeometry {
            viewport_width,
            viewport_height,
            page_width: 612.0,
            page_height: 792.0,
        }
    }

    #[test]
    fn zoom_in_and_out_walk_presets() {
        let mut zoom = Zoom::new(100);
        assert!(zoom.zoom_in());
        assert_eq!(zoom.percent(), 125);
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert_eq!(zoom.percent(), 75);
    }

    #[test]
    fn off_preset_values_snap_to_neighbours() {
        let mut zoom = Zoom::new(110);
        zoom.zoom_in();
        assert_eq!(zoom.percent(), 125);

        let mut zoom = Zoom::new(110);
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 100);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut zoom = Zoom::new(400);
        assert!(!zoom.zoom_in());
        assert_eq!(zoom.percent(), MAX_ZOOM_PERCENT);

        let mut zoom = Zoom::new(50);
        assert!(!zoom.zoom_out());
        assert_eq!(zoom.percent(), 50);

        let mut zoom = Zoom::new(30);
        assert!(!zoom.zoom_out());
        assert_eq!(zoom.percent(), 30);

        assert_eq!(Zoom::new(5).percent(), MIN_ZOOM_PERCENT);
        assert_eq!(Zoom::new(9000).percent(), MAX_ZOOM_PERCENT);
    }

    #[test]
    fn page_width_fills_viewport() {
        let mut zoom = Zoom::new(100);
        let geometry = letter_in(1000.0 + PAGE_GAP * 2.0, 600.0);
        assert!(zoom.select(ZoomChoice::PageWidth, Some(geometry)));
        let expected = (1000.0 / (612.0 * POINTS_TO_PX) * 100.0).round() as u32;
        assert_eq!(zoom.percent(), expected);
        assert_eq!(zoom.choice(), ZoomChoice::PageWidth);
    }

    #[test]
    fn page_fit_uses_tighter_dimension() {
        let mut zoom = Zoom::new(100);
        zoom.select(ZoomChoice::PageFit, Some(letter_in(2000.0, 500.0)));
        let by_height = ((500.0 - PAGE_GAP * 2.0) / (792.0 * POINTS_TO_PX) * 100.0).round() as u32;
        assert_eq!(zoom.percent(), by_height);
    }

    #[test]
    fn fit_without_geometry_keeps_percent_until_refit() {
        let mut zoom = Zoom::new(150);
        assert!(!zoom.select(ZoomChoice::PageWidth, None));
        assert_eq!(zoom.percent(), 150);
        assert_eq!(zoom.mode(), ZoomMode::PageWidth);
        assert!(zoom.refit(Some(letter_in(500.0, 500.0))));
        assert!(zoom.percent() < 150);
    }

    #[test]
    fn explicit_percent_leaves_fit_mode() {
        let mut zoom = Zoom::new(100);
        zoom.select(ZoomChoice::PageFit, Some(letter_in(800.0, 800.0)));
        zoom.select(ZoomChoice::Percent(200), None);
        assert_eq!(zoom.mode(), ZoomMode::Percent);
        assert!(!zoom.refit(Some(letter_in(300.0, 300.0))));
        assert_eq!(zoom.percent(), 200);
    }

    #[test]
    fn labels_match_pick_list_entries() {
        assert_eq!(Zoom::new(125).label(), "125%");
        assert_eq!(ZoomChoice::Percent(75).to_string(), "75%");
        assert_eq!(ZoomChoice::PageWidth.to_string(), "Page width");
    }
}
