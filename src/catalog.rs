//! Color Catalog
//!
//! Assigns a stable label ("1", "2", ...) to every distinct color of a source
//! raster, in the order the colors are first met during a row-major scan.
//! Colors are compared by exact channel equality; there is no tolerance.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// COLOR KEY
// ============================================================================

/// A 3-channel color used as catalog key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorKey(pub [u8; 3]);

impl ColorKey {
    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }

    /// `#rrggbb` notation
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl From<Rgb<u8>> for ColorKey {
    fn from(pixel: Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<&Rgb<u8>> for ColorKey {
    fn from(pixel: &Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}

/// Lexicographic on channel 0, then channel 1, then channel 2.
/// Only used to index the catalog, carries no visual meaning.
impl Ord for ColorKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        a0.cmp(&b0)
            .then_with(|| a1.cmp(&b1))
            .then_with(|| a2.cmp(&b2))
    }
}

impl PartialOrd for ColorKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Order in which catalog entries are listed (and drawn into the legend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrder {
    /// Ascending label: "1", "2", "3", ...
    #[default]
    Label,
    /// Ascending color tuple, which is how the legacy tool laid out its legend
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub color: ColorKey,
    pub label: String,
    /// Number of source pixels with this color
    pub pixels: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
    /// Entries in label order, entry `i` carries label `i + 1`
    entries: Vec<CatalogEntry>,
    /// Color -> position in `entries`
    index: BTreeMap<ColorKey, usize>,
}

impl ColorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `img` row by row and label every color not seen before
    pub fn from_image(img: &RgbImage) -> Self {
        let mut catalog = Self::new();
        // enumerate_pixels walks rows top to bottom, each row left to right
        for (_, _, pixel) in img.enumerate_pixels() {
            catalog.insert(pixel.into());
        }
        catalog
    }

    /// Register one occurrence of `color`, returns its label
    pub fn insert(&mut self, color: ColorKey) -> &str {
        let idx = match self.index.get(&color) {
            Some(&idx) => {
                self.entries[idx].pixels += 1;
                idx
            }
            None => {
                let idx = self.entries.len();
                self.entries.push(CatalogEntry {
                    color,
                    label: (idx + 1).to_string(),
                    pixels: 1,
                });
                self.index.insert(color, idx);
                idx
            }
        };
        &self.entries[idx].label
    }

    pub fn label(&self, color: ColorKey) -> Option<&str> {
        self.index
            .get(&color)
            .map(|&idx| self.entries[idx].label.as_str())
    }

    pub fn get(&self, color: ColorKey) -> Option<&CatalogEntry> {
        self.index.get(&color).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the requested order
    pub fn entries(&self, order: LegendOrder) -> Vec<&CatalogEntry> {
        match order {
            LegendOrder::Label => self.entries.iter().collect(),
            LegendOrder::Color => self.index.values().map(|&idx| &self.entries[idx]).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
