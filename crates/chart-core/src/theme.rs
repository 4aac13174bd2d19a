// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, axes, legend text).

use crate::color::{Rgba, CATEGORY10};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub legend_label: Rgba,
    pub status_text: Rgba,
    pub palette: &'static [Rgba],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            tick: Rgba::rgb(0, 0, 0),
            legend_label: Rgba::rgb(20, 20, 30),
            status_text: Rgba::rgb(200, 40, 40),
            palette: &CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            legend_label: Rgba::rgb(210, 210, 220),
            status_text: Rgba::rgb(255, 120, 110),
            palette: &CATEGORY10,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            tick: Rgba::rgb(0x83, 0x94, 0x96),       // base0
            legend_label: Rgba::rgb(0xee, 0xe8, 0xd5),
            status_text: Rgba::rgb(0xdc, 0x32, 0x2f), // red
            palette: &CATEGORY10,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),  // base00
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            tick: Rgba::rgb(0x58, 0x6e, 0x75),       // base01
            legend_label: Rgba::rgb(0x00, 0x2b, 0x36),
            status_text: Rgba::rgb(0xdc, 0x32, 0x2f),
            palette: &CATEGORY10,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            legend_label: Rgba::rgb(0xff, 0xff, 0xff),
            status_text: Rgba::rgb(0xff, 0xff, 0x00),
            palette: &CATEGORY10,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
