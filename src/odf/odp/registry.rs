//! Drawing registry.
//!
//! Maps each distinct drawing (by identity) to a dense index, so every part
//! writer refers to the same embedded file for the same drawing.

use crate::common::{Error, Result};
use crate::odf::constants::ODF_PICTURES_DIR;
use crate::presentation::Drawing;
use std::collections::HashMap;
use std::sync::Arc;

/// Identity of a shared allocation. Entries keep their `Arc` alive, so an
/// address cannot be reused while it is a key.
fn identity(drawing: &Drawing) -> usize {
    drawing as *const Drawing as usize
}

/// Index assignment for the drawings of one save.
///
/// Built once before any part writer runs and read-only afterwards.
#[derive(Debug, Default)]
pub struct DrawingRegistry {
    drawings: Vec<Arc<Drawing>>,
    index: HashMap<usize, usize>,
}

impl DrawingRegistry {
    /// Register `drawings`, giving each distinct drawing the position of its
    /// first occurrence among the distinct ones.
    pub fn build<I>(drawings: I) -> Self
    where
        I: IntoIterator<Item = Arc<Drawing>>,
    {
        let mut registry = Self::default();
        for drawing in drawings {
            let key = identity(&drawing);
            if registry.index.contains_key(&key) {
                continue;
            }
            registry.index.insert(key, registry.drawings.len());
            registry.drawings.push(drawing);
        }
        registry
    }

    /// Index assigned to `drawing`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the drawing was never registered.
    pub fn index_of(&self, drawing: &Drawing) -> Result<usize> {
        self.index
            .get(&identity(drawing))
            .copied()
            .ok_or_else(|| Error::NotFound(format!("drawing '{}' is not registered", drawing.name())))
    }

    pub fn contains(&self, drawing: &Drawing) -> bool {
        self.index.contains_key(&identity(drawing))
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Drawing>> {
        self.drawings.get(index)
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// Registered drawings with their indices, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Arc<Drawing>)> {
        self.drawings.iter().enumerate()
    }

    /// Archive path of a drawing's payload, e.g. `Pictures/image1.png`.
    pub fn part_name(&self, drawing: &Drawing) -> Result<String> {
        let index = self.index_of(drawing)?;
        Ok(Self::part_name_at(index, drawing))
    }

    pub(crate) fn part_name_at(index: usize, drawing: &Drawing) -> String {
        format!("{}image{}.{}", ODF_PICTURES_DIR, index + 1, drawing.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn image(name: &str) -> Arc<Drawing> {
        Arc::new(Drawing::from_data_uri(name, "data:image/png;base64,iVBORw0KGgo=").unwrap())
    }

    #[test]
    fn test_first_seen_order() {
        let a = image("a");
        let b = image("b");
        let registry = DrawingRegistry::build(vec![a.clone(), b.clone(), a.clone()]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of(&a).unwrap(), 0);
        assert_eq!(registry.index_of(&b).unwrap(), 1);
        assert_eq!(registry.part_name(&b).unwrap(), "Pictures/image2.png");
    }

    #[test]
    fn test_equal_content_is_distinct() {
        let a = image("same");
        let b = image("same");
        let registry = DrawingRegistry::build(vec![a.clone(), b.clone()]);
        assert_eq!(registry.len(), 2);
        assert_ne!(registry.index_of(&a).unwrap(), registry.index_of(&b).unwrap());
    }

    #[test]
    fn test_unregistered_lookup() {
        let registry = DrawingRegistry::build(Vec::new());
        assert!(registry.is_empty());

        let stray = image("stray");
        assert!(!registry.contains(&stray));
        assert!(matches!(registry.index_of(&stray), Err(Error::NotFound(_))));
        assert!(registry.part_name(&stray).is_err());
    }

    proptest! {
        #[test]
        fn prop_registry_is_bijection(picks in proptest::collection::vec(0usize..6, 0..40)) {
            let pool: Vec<Arc<Drawing>> = (0..6).map(|i| image(&format!("d{i}"))).collect();
            let input: Vec<Arc<Drawing>> = picks.iter().map(|&i| pool[i].clone()).collect();
            let distinct: HashSet<usize> = picks.iter().copied().collect();

            let registry = DrawingRegistry::build(input.clone());
            prop_assert_eq!(registry.len(), distinct.len());

            let mut seen = HashSet::new();
            for drawing in &input {
                let index = registry.index_of(drawing).unwrap();
                prop_assert!(index < registry.len());
                prop_assert!(Arc::ptr_eq(registry.get(index).unwrap(), drawing));
                seen.insert(index);
            }
            prop_assert_eq!(seen.len(), distinct.len());

            // indices follow first occurrence
            let mut expected = Vec::new();
            for &i in &picks {
                if !expected.contains(&i) {
                    expected.push(i);
                }
            }
            for (index, drawing) in registry.iter() {
                prop_assert!(Arc::ptr_eq(drawing, &pool[expected[index]]));
            }
        }
    }
}
