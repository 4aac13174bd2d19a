// File: crates/chart-core/src/color.rs
// Summary: RGBA color value, the default categorical palette, and the stable course -> color assignment.

use std::collections::HashMap;

use crate::record::Record;
use crate::series::distinct_names;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        match s.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// Ten-hue categorical palette (d3 `schemeCategory10`).
pub const CATEGORY10: [Rgba; 10] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
    Rgba::rgb(0xe3, 0x77, 0xc2),
    Rgba::rgb(0x7f, 0x7f, 0x7f),
    Rgba::rgb(0xbc, 0xbd, 0x22),
    Rgba::rgb(0x17, 0xbe, 0xcf),
];

/// Color returned for names that were not part of the loaded dataset.
pub const FALLBACK: Rgba = Rgba::rgb(0x7f, 0x7f, 0x7f);

/// Course -> color mapping for one loaded dataset.
///
/// Built once from every distinct course name; lookups never extend the
/// mapping, so `color_of` does not depend on which subset is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorAssignment {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    palette: Vec<Rgba>,
}

impl ColorAssignment {
    /// Assign colors in the order names are given, cycling through `palette`.
    /// Duplicate names keep their first slot. An empty palette selects `CATEGORY10`.
    pub fn build<I, S>(names: I, palette: &[Rgba]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette = if palette.is_empty() { CATEGORY10.to_vec() } else { palette.to_vec() };
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for name in names {
            let name = name.into();
            if !index.contains_key(&name) {
                index.insert(name.clone(), keys.len());
                keys.push(name);
            }
        }
        Self { keys, index, palette }
    }

    /// Assignment over the complete record set of a load.
    pub fn from_records(records: &[Record], palette: &[Rgba]) -> Self {
        Self::build(distinct_names(records), palette)
    }

    pub fn color_of(&self, name: &str) -> Rgba {
        match self.index.get(name) {
            Some(&i) => self.palette[i % self.palette.len()],
            None => FALLBACK,
        }
    }

    pub fn contains(&self, name: &str) -> bool { self.index.contains_key(name) }

    /// Every assigned course, in assignment order.
    pub fn keys(&self) -> &[String] { &self.keys }

    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }
    pub fn palette(&self) -> &[Rgba] { &self.palette }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self::build(std::iter::empty::<String>(), &CATEGORY10)
    }
}
