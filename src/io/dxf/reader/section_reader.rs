//! ENTITIES section reader
//!
//! Groups decoded entities by layer. The layer name is classified before the
//! entity is decoded, so entities on rejected layers never register points.

use super::entity_reader::EntityReader;
use super::tag_reader::TagReader;
use crate::document::ConversionContext;
use crate::entities::EntityKind;
use crate::error::Result;
use crate::io::dxf::DxfCode;
use crate::notification::NotificationType;
use crate::tables::{classify, LayerAttributes};
use std::io::BufRead;
use tracing::{debug, warn};

/// Outcome of checking an entity's layer
enum Admission {
    Existing,
    New(LayerAttributes),
    Rejected,
}

/// Reads the ENTITIES section into the context's layer table
pub struct SectionReader<'a, R: BufRead> {
    tags: &'a mut TagReader<R>,
    context: &'a mut ConversionContext,
    failsafe: bool,
}

impl<'a, R: BufRead> SectionReader<'a, R> {
    pub fn new(tags: &'a mut TagReader<R>, context: &'a mut ConversionContext, failsafe: bool) -> Self {
        Self {
            tags,
            context,
            failsafe,
        }
    }

    /// Read entities until `ENDSEC` or the end of the stream
    pub fn read_entities(&mut self) -> Result<()> {
        while let Some(entity_type) = self.tags.read_value(DxfCode::Start)? {
            if entity_type == "ENDSEC" {
                break;
            }

            // a numeric "type" is a value line of an entity we did not decode
            if !entity_type.is_empty() && entity_type.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }

            let Some(kind) = EntityKind::from_name(&entity_type) else {
                warn!(entity = %entity_type, line = self.tags.line_number(), "no decoder for entity type");
                self.context.notifications.notify(
                    NotificationType::UnsupportedEntity,
                    format!("{} skipped at line {}", entity_type, self.tags.line_number()),
                );
                continue;
            };

            let Some(layer_name) = self.tags.read_value(DxfCode::LayerName)? else {
                break;
            };

            let admission = self.admit(kind, &layer_name);
            if let Admission::Rejected = admission {
                continue;
            }

            let mark = self.context.registry.next_id();
            let decoded = EntityReader::new(self.tags, &mut self.context.registry).read(kind);
            let entity = match decoded {
                Ok(Some(entity)) => entity,
                Ok(None) => break,
                Err(e) if e.is_recoverable() && self.failsafe => {
                    // corners read before the failure belong to no entity
                    self.context.registry.release_from(mark);
                    warn!(layer = %layer_name, error = %e, "skipping malformed {}", kind);
                    self.context
                        .notifications
                        .notify(NotificationType::Malformed, format!("{} on '{}': {}", kind, layer_name, e));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let layer = match admission {
                Admission::New(attributes) => self.context.layers.create(&layer_name, kind, attributes),
                _ => match self.context.layers.get_mut(&layer_name) {
                    Some(layer) => layer,
                    None => continue,
                },
            };
            if layer.add_entity(entity).is_err() {
                warn!(layer = %layer_name, "entity kind changed while decoding");
            }
        }

        debug!(
            layers = self.context.layers.len(),
            points = self.context.registry.len(),
            "ENTITIES section read"
        );
        Ok(())
    }

    /// Decide whether an entity of `kind` on `layer_name` is kept.
    ///
    /// A kind that differs from the existing layer's kind invalidates the
    /// layer.
    fn admit(&mut self, kind: EntityKind, layer_name: &str) -> Admission {
        if self.context.layers.is_invalidated(layer_name) {
            debug!(layer = %layer_name, "entity on discarded layer skipped");
            return Admission::Rejected;
        }

        if let Some(layer) = self.context.layers.get(layer_name) {
            if layer.kind == kind {
                return Admission::Existing;
            }
            let existing = layer.kind;
            self.invalidate(layer_name, existing, kind);
            return Admission::Rejected;
        }

        match classify(kind, layer_name) {
            Ok(attributes) => Admission::New(attributes),
            Err(reason) => {
                warn!(layer = %layer_name, kind = %kind, %reason, "invalid layer name");
                self.context.notifications.notify(
                    NotificationType::InvalidLayer,
                    format!("{} on '{}' discarded: {}", kind, layer_name, reason),
                );
                Admission::Rejected
            }
        }
    }

    /// Drop a layer that mixes entity kinds and release the points only it
    /// used.
    fn invalidate(&mut self, layer_name: &str, existing: EntityKind, found: EntityKind) {
        let Some(layer) = self.context.layers.invalidate(layer_name) else {
            return;
        };

        let discarded = layer.point_ids().collect();
        let retained = self.context.layers.point_ids();
        let released = self.context.registry.rollback(&discarded, &retained);

        warn!(
            layer = %layer_name,
            %existing,
            %found,
            entities = layer.entity_count(),
            released_points = released,
            "layer mixes entity kinds, discarded"
        );
        self.context.notifications.notify(
            NotificationType::MixedLayer,
            format!(
                "'{}' holds {} and {}; {} entities discarded, {} point ids released",
                layer_name,
                existing,
                found,
                layer.entity_count(),
                released
            ),
        );
    }
}
