#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub brand_name: String,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub dark_mode: bool,
    /// Below this width (logical points) the header collapses into a menu.
    pub narrow_layout_width: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "The Mom Test Bot".to_owned(),
            window_title: "The Mom Test Bot".to_owned(),
            window_size: [1000.0, 760.0],
            min_window_size: [420.0, 480.0],
            dark_mode: false,
            narrow_layout_width: 768.0,
        }
    }
}

impl SiteConfig {
    pub fn is_narrow(&self, available_width: f32) -> bool {
        available_width < self.narrow_layout_width
    }
}
