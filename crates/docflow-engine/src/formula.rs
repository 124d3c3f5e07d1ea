//! Formula rendering seam.
//!
//! The compiler never renders formulas itself. It asks a [`FormulaRenderer`]
//! for geometry once per formula record and copies the result onto the
//! record. Renderers must not fail: a formula that cannot be rendered yields a
//! placeholder geometry that a later pass can correct.

use std::collections::HashMap;

/// Geometry of a rendered formula.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaGeometry {
    pub svg: String,
    pub width: f64,
    pub height: f64,
    pub is_block: bool,
}

impl FormulaGeometry {
    /// Visible stand-in used until the real rendering is available.
    pub fn placeholder() -> Self {
        Self {
            svg: concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">"#,
                r#"<text x="2" y="13" font-size="14">&amp;</text></svg>"#
            )
            .to_string(),
            width: 16.0,
            height: 16.0,
            is_block: false,
        }
    }
}

pub trait FormulaRenderer {
    fn render(&self, formula: &str) -> FormulaGeometry;
}

/// Cache keyed by the literal formula text.
///
/// Warmed by whoever owns the real renderer; lookups never block and a miss
/// returns [`FormulaGeometry::placeholder`].
#[derive(Debug, Default, Clone)]
pub struct FormulaCache {
    entries: HashMap<String, FormulaGeometry>,
}

impl FormulaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, formula: impl Into<String>, geometry: FormulaGeometry) {
        self.entries.insert(formula.into(), geometry);
    }

    pub fn contains(&self, formula: &str) -> bool {
        self.entries.contains_key(formula)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FormulaRenderer for FormulaCache {
    fn render(&self, formula: &str) -> FormulaGeometry {
        match self.entries.get(formula) {
            Some(geometry) => geometry.clone(),
            None => {
                log::debug!("formula cache miss for {formula:?}, using placeholder");
                FormulaGeometry::placeholder()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_returns_placeholder() {
        let cache = FormulaCache::new();
        assert_eq!(cache.render("x^2"), FormulaGeometry::placeholder());
    }

    #[test]
    fn hit_returns_warmed_geometry() {
        let mut cache = FormulaCache::new();
        let geometry = FormulaGeometry {
            svg: "<svg/>".into(),
            width: 40.0,
            height: 12.0,
            is_block: true,
        };
        cache.insert("$$x$$", geometry.clone());
        assert!(cache.contains("$$x$$"));
        assert_eq!(cache.render("$$x$$"), geometry);
        assert_eq!(cache.len(), 1);
    }
}
