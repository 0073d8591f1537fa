//! Color themes for the conversation view.

use eframe::egui::Color32;

use crate::identity;

/// Semantic colors used by the message list.
#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    /// 0: view background, 1: tile hover, 2: badge background
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(28, 28, 38),
                Color32::from_rgb(37, 37, 50),
                Color32::from_rgb(56, 56, 74),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_subtle: Color32::from_rgba_unmultiplied(209, 213, 219, 64),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(220, 38, 38),
            text_primary: Color32::BLACK,
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(156, 163, 175),
            border_subtle: Color32::from_rgba_unmultiplied(209, 213, 219, 64),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn by_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}

const IDENTITY_COLORS: [Color32; 16] = [
    Color32::from_rgb(231, 76, 60),   // Vibrant red
    Color32::from_rgb(46, 204, 113),  // Emerald green
    Color32::from_rgb(52, 152, 219),  // Bright blue
    Color32::from_rgb(155, 89, 182),  // Amethyst purple
    Color32::from_rgb(241, 196, 15),  // Sunflower yellow
    Color32::from_rgb(230, 126, 34),  // Carrot orange
    Color32::from_rgb(26, 188, 156),  // Turquoise
    Color32::from_rgb(236, 100, 166), // Pink
    Color32::from_rgb(142, 68, 173),  // Wisteria
    Color32::from_rgb(41, 128, 185),  // Belize blue
    Color32::from_rgb(39, 174, 96),   // Nephritis
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(192, 57, 43),   // Pomegranate
    Color32::from_rgb(22, 160, 133),  // Green sea
    Color32::from_rgb(211, 84, 0),    // Pumpkin
    Color32::from_rgb(102, 178, 255), // Light blue
];

/// Stable avatar color for a sender address.
pub fn identity_color(address: &str) -> Color32 {
    IDENTITY_COLORS[identity::palette_index(address, IDENTITY_COLORS.len())]
}
