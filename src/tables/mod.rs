//! Layer table and layer-name classification

use crate::entities::EntityKind;
use crate::types::{LayerId, PointId};
use ahash::RandomState;
use indexmap::IndexMap;
use std::collections::HashSet;

pub mod dof;
pub mod layer;
pub mod layer_name;

pub use dof::Dof;
pub use layer::Layer;
pub use layer_name::{classify, LayerAttributes, LayerNameError};

/// Layers of one conversion, in order of first appearance
///
/// Names are compared exactly. A layer removed with
/// [`invalidate`](Self::invalidate) stays blocked for the rest of the run.
#[derive(Debug, Clone)]
pub struct LayerTable {
    entries: IndexMap<String, Layer, RandomState>,
    invalidated: HashSet<String>,
    next_id: LayerId,
}

impl LayerTable {
    pub fn new() -> Self {
        LayerTable {
            entries: IndexMap::with_hasher(RandomState::new()),
            invalidated: HashSet::new(),
            next_id: LayerId::FIRST,
        }
    }

    /// Return the layer called `name`, creating it under the next id if needed
    pub fn create(&mut self, name: &str, kind: EntityKind, attributes: LayerAttributes) -> &mut Layer {
        let next_id = &mut self.next_id;
        self.entries.entry(name.to_string()).or_insert_with(|| {
            let id = *next_id;
            *next_id = next_id.next();
            Layer::new(name, id, kind, attributes)
        })
    }

    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.entries.get_mut(name)
    }

    /// Remove a layer and block its name
    pub fn invalidate(&mut self, name: &str) -> Option<Layer> {
        self.invalidated.insert(name.to_string());
        self.entries.shift_remove(name)
    }

    pub fn is_invalidated(&self, name: &str) -> bool {
        self.invalidated.contains(name)
    }

    /// Ids of every point referenced by a current layer
    pub fn point_ids(&self) -> HashSet<PointId> {
        self.entries.values().flat_map(Layer::point_ids).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.entries.values()
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.entries.into_values().collect()
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_creation_order() {
        let mut table = LayerTable::new();
        table.create("A H10", EntityKind::Face3D, LayerAttributes::Thickness(0.1));
        table.create("B1 H1", EntityKind::Line, LayerAttributes::CrossSection { width: 1.0, height: 1.0 });

        let ids: Vec<u32> = table.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(table.get("A H10").is_some());
        assert!(table.get("a h10").is_none());
    }

    #[test]
    fn test_invalidate_blocks_name_and_keeps_ids() {
        let mut table = LayerTable::new();
        table.create("first", EntityKind::LwPolyline, LayerAttributes::Empty);
        table.create("second", EntityKind::LwPolyline, LayerAttributes::Empty);

        let removed = table.invalidate("first").unwrap();
        assert_eq!(removed.id, LayerId::new(1));
        assert!(table.is_invalidated("first"));
        assert_eq!(table.len(), 1);

        let third = table.create("third", EntityKind::LwPolyline, LayerAttributes::Empty);
        assert_eq!(third.id, LayerId::new(3));
    }
}
