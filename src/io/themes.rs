//! Built-in level themes and the catalog of hidden-object variants

use crate::io::error::{Result, invalid_parameter};
use std::num::NonZeroU32;

/// Scene descriptions cycled through as levels advance
pub const THEMES: [&str; 25] = [
    "A sunlit cottage kitchen table in morning light",
    "A cozy explorer's desk by a window in autumn",
    "A vintage sewing corner bathed in soft afternoon sun",
    "A lush secret garden nook with blooming hydrangeas",
    "A storybook herbalist's hut interior",
    "A peaceful sunroom filled with ferns",
    "A picnic on a checkered blanket in evening light",
    "A dusty attic window seat with soft sunbeams",
    "A greenhouse shelf crowded with succulents",
    "A bakery counter in a village",
    "A magical potion shop counter",
    "A rustic toolshed workbench",
    "A vintage candy shop display",
    "A painter's easel in a meadow",
    "A cozy reading nook with a plush armchair",
    "A forest floor covered in moss and mushrooms",
    "A seaside rock pool with colorful shells",
    "A vintage vanity table with perfume bottles",
    "A cluttered antique shop shelf",
    "A festive holiday fireplace mantle",
    "A treehouse floor scattered with toys",
    "A japanese tea ceremony set",
    "A wizard's alchemy table",
    "A farmer's market stall",
    "A cozy bedroom window sill",
];

/// Theme for a level, cycling through [`THEMES`] starting at level 1
pub fn theme_for_level(level: u32) -> &'static str {
    let index = level.saturating_sub(1) as usize % THEMES.len();
    THEMES.get(index).copied().unwrap_or_default()
}

/// Number of object sprites in the default catalog
pub const DEFAULT_VARIANT_COUNT: usize = 12;

/// Fixed, ordered collection of object image references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCatalog {
    entries: Vec<String>,
}

impl VariantCatalog {
    /// Build a catalog from image references
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or holds more than `u32::MAX` references
    pub fn new(entries: Vec<String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(invalid_parameter(
                "variants",
                &"[]",
                &"catalog needs at least one object image",
            ));
        }
        if u32::try_from(entries.len()).is_err() {
            return Err(invalid_parameter(
                "variants",
                &entries.len(),
                &"catalog is too large to index",
            ));
        }
        Ok(Self { entries })
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exclusive bound for drawing a variant index
    pub fn bound(&self) -> NonZeroU32 {
        u32::try_from(self.entries.len())
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MIN)
    }

    /// Image reference at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }
}

impl Default for VariantCatalog {
    fn default() -> Self {
        Self {
            entries: (1..=DEFAULT_VARIANT_COUNT)
                .map(|n| format!("objects/pup-{n:02}.png"))
                .collect(),
        }
    }
}
