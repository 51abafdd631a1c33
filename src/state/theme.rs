use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Raw surface profile stroke.
    pub fn profile_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(230, 230, 230),
            Theme::Light => Color32::BLACK,
        }
    }

    pub fn mean_line_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(90, 150, 255),
            Theme::Light => Color32::BLUE,
        }
    }

    pub fn roughness_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 90, 90),
            Theme::Light => Color32::RED,
        }
    }

    /// Zero reference line.
    pub fn center_line_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgba_premultiplied(140, 140, 140, 120),
            Theme::Light => Color32::from_rgba_premultiplied(60, 60, 60, 160),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
