//! Default content placed on a fresh deck.

use crate::style::{Color, FontFamily, TextAlign, TextStyle};

/// One overlay of the starter deck.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedOverlay {
    pub slide_index: usize,
    pub content: &'static str,
    pub left: f64,
    pub top: f64,
    pub style: TextStyle,
}

fn seed(
    slide_index: usize,
    content: &'static str,
    left: f64,
    top: f64,
    font: &str,
    size: f64,
    translucent: bool,
) -> SeedOverlay {
    let background = if translucent {
        Color::rgba(139, 90, 43, 0.8)
    } else {
        Color::DEFAULT_BACKGROUND
    };
    SeedOverlay {
        slide_index,
        content,
        left,
        top,
        style: TextStyle {
            font_family: FontFamily::new(font),
            font_size_px: size,
            text_color: Color::DEFAULT_TEXT,
            background_color: background,
            text_align: TextAlign::Center,
        },
    }
}

/// Two titles per slide for the first three slides.
pub fn default_overlays() -> Vec<SeedOverlay> {
    vec![
        seed(
            0,
            "Welcome to Canvas",
            80.0,
            100.0,
            "'Playfair Display', serif",
            32.0,
            false,
        ),
        seed(
            0,
            "Create beautiful designs",
            60.0,
            180.0,
            "'Great Vibes', cursive",
            24.0,
            true,
        ),
        seed(
            1,
            "Premium Editor",
            90.0,
            120.0,
            "'Playfair Display', serif",
            28.0,
            false,
        ),
        seed(
            1,
            "Unleash your creativity",
            50.0,
            200.0,
            "'Dancing Script', cursive",
            22.0,
            true,
        ),
        seed(
            2,
            "Professional Results",
            70.0,
            140.0,
            "Arial, sans-serif",
            26.0,
            false,
        ),
        seed(
            2,
            "Made with passion",
            80.0,
            220.0,
            "'Great Vibes', cursive",
            20.0,
            true,
        ),
    ]
}
