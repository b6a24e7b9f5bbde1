//! Drawing model and per-run conversion state

use crate::notification::NotificationCollection;
use crate::registry::PointRegistry;
use crate::tables::{Layer, LayerTable};
use crate::types::Point;

/// Mutable state of a single conversion run
///
/// Every decoder and the layer classification work against one context, so
/// two conversions never share point ids or layer ids.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    pub registry: PointRegistry,
    pub layers: LayerTable,
    pub notifications: NotificationCollection,
}

impl ConversionContext {
    /// Create a context whose registry keeps `precision` fractional digits
    pub fn new(precision: u32) -> Self {
        ConversionContext {
            registry: PointRegistry::with_precision(precision),
            layers: LayerTable::new(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Finish the run
    pub fn into_model(self) -> DrawingModel {
        DrawingModel {
            layers: self.layers.into_layers(),
            registry: self.registry,
            notifications: self.notifications,
        }
    }
}

/// Result of reading a drawing: layers plus every registered point
#[derive(Debug, Clone, Default)]
pub struct DrawingModel {
    layers: Vec<Layer>,
    registry: PointRegistry,
    /// Issues skipped while reading
    pub notifications: NotificationCollection,
}

impl DrawingModel {
    /// Assemble a model from already classified layers
    pub fn new(layers: Vec<Layer>, registry: PointRegistry) -> Self {
        DrawingModel {
            layers,
            registry,
            notifications: NotificationCollection::new(),
        }
    }

    /// Layers in order of first appearance
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Registered points in registration order
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.registry.iter()
    }

    pub fn point_count(&self) -> usize {
        self.registry.len()
    }
}
