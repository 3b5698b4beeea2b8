//! Per-call store of distinct object shapes.
//!
//! A new field list is compared structurally against every registered shape
//! (order-sensitive, `ObjectRef` by identity). A match reuses the existing
//! declaration; otherwise the shape is named and appended.
use crate::ir::{Field, Shape, ShapeId};
use crate::naming::{Context, NameAllocator};

#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.shapes.len() }

    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// First registered shape with exactly this field list.
    pub fn find(&self, fields: &[Field]) -> Option<ShapeId> {
        self.shapes
            .iter()
            .position(|shape| shape.same_structure(fields))
            .map(ShapeId)
    }

    /// Reuse a structurally equal shape, or name and append a new one.
    ///
    /// `ticket` is the pre-order position of the object being registered; it
    /// only matters when the shape turns out to be new.
    pub fn register(
        &mut self,
        fields: Vec<Field>,
        context: Context<'_>,
        ticket: usize,
        names: &mut NameAllocator,
    ) -> ShapeId {
        if let Some(id) = self.find(&fields) {
            tracing::trace!(name = %self.shapes[id.0].name, ?context, "reused shape");
            return id;
        }
        let name = names.allocate_for(context);
        tracing::debug!(%name, ?context, fields = fields.len(), "registered shape");
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Shape { name, fields, ticket });
        id
    }

    /// Drop every shape registered at or after position `len`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.shapes.len() {
            tracing::debug!(dropped = self.shapes.len() - len, "discarded shapes");
        }
        self.shapes.truncate(len);
    }

    /// Shapes in emission order: the order their first instance was entered
    /// during the walk, root first.
    pub fn in_emission_order(&self) -> Vec<(ShapeId, &Shape)> {
        let mut out: Vec<(ShapeId, &Shape)> = self
            .shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| (ShapeId(i), shape))
            .collect();
        out.sort_by_key(|(_, shape)| shape.ticket);
        out
    }
}
