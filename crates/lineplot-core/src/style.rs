// File: crates/lineplot-core/src/style.rs
// Summary: Cosmetic line/legend/border settings and their gnuplot directives.

/// 24-bit RGB color, `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineColor(pub u32);

impl LineColor {
    pub const WHITE: Self = Self(0xFFFFFF);
    pub const BLACK: Self = Self(0x000000);
    pub const RED: Self = Self(0xFF0000);
    pub const GREEN: Self = Self(0x00FF00);
    pub const BLUE: Self = Self(0x0000FF);
    pub const YELLOW: Self = Self(0xFFFF00);
    pub const TEAL: Self = Self(0x00FFFF);
    pub const MAGENTA: Self = Self(0xFF00FF);

    pub fn hex(&self) -> String {
        format!("#{:06X}", self.0 & 0xFF_FFFF)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
}

impl DashPattern {
    /// Gnuplot `dashtype` index.
    pub fn dashtype(&self) -> u32 {
        match self {
            DashPattern::Solid => 1,
            DashPattern::Dashed => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    Hidden,
    TopLeft,
    #[default]
    TopRight,
    BottomRight,
    BottomLeft,
}

impl LegendLocation {
    /// Argument to `set key`.
    pub fn key_spec(&self) -> &'static str {
        match self {
            LegendLocation::Hidden => "off",
            LegendLocation::TopLeft => "top left",
            LegendLocation::TopRight => "top right",
            LegendLocation::BottomRight => "bottom right",
            LegendLocation::BottomLeft => "bottom left",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderThickness {
    ExtraThin,
    Thin,
    #[default]
    Normal,
    Thick,
    ExtraThick,
}

impl BorderThickness {
    pub fn line_width(&self) -> f64 {
        match self {
            BorderThickness::ExtraThin => 0.5,
            BorderThickness::Thin => 0.75,
            BorderThickness::Normal => 1.0,
            BorderThickness::Thick => 1.5,
            BorderThickness::ExtraThick => 2.0,
        }
    }
}

pub const DEFAULT_LINE_WIDTH: u32 = 1;
pub const DEFAULT_LINE_COLOR: LineColor = LineColor::BLACK;
pub const DEFAULT_DASH: DashPattern = DashPattern::Solid;
pub const DEFAULT_LEGEND: LegendLocation = LegendLocation::TopRight;
pub const DEFAULT_BORDER: BorderThickness = BorderThickness::Normal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
    pub width: u32,
    pub dash: DashPattern,
    pub color: LineColor,
    pub legend: LegendLocation,
    pub border: BorderThickness,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_LINE_WIDTH,
            dash: DEFAULT_DASH,
            color: DEFAULT_LINE_COLOR,
            legend: DEFAULT_LEGEND,
            border: DEFAULT_BORDER,
        }
    }
}

impl LineStyle {
    pub fn with_width(mut self, width: u32) -> Self { self.width = width.max(1); self }
    pub fn with_dash(mut self, dash: DashPattern) -> Self { self.dash = dash; self }
    pub fn with_color(mut self, color: LineColor) -> Self { self.color = color; self }
    pub fn with_legend(mut self, legend: LegendLocation) -> Self { self.legend = legend; self }
    pub fn with_border(mut self, border: BorderThickness) -> Self { self.border = border; self }

    /// Directives applying this style. Linetype 1 is what the first (and only)
    /// plotted series uses, so redefining it styles the rendered line.
    pub fn directives(&self) -> Vec<String> {
        vec![
            format!(
                "set linetype 1 lc rgb '{}' lw {} dt {}",
                self.color.hex(),
                self.width,
                self.dash.dashtype()
            ),
            format!("set border lw {}", self.border.line_width()),
            format!("set key {}", self.legend.key_spec()),
        ]
    }
}
