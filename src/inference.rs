//! Single-pass structural inference over one JSON document.
//!
//! Walk the value depth-first, turn every node into a [`Ty`], and register
//! each distinct object shape exactly once. All state (shape registry, name
//! counters, discovery tickets) lives in one [`Inference`] value, so every
//! document gets a fresh one and nothing leaks between calls.
//!
//! - Scalars map to primitives; `null` maps to `any` and marks its field optional.
//! - Objects are registered after their fields, so inner shapes are named first.
//! - Arrays must agree on one element type or degrade to `any[]`, in which case
//!   every shape discovered inside them is rolled back.
pub mod obj;
pub mod arr;

use serde_json::Value;

use crate::ir::{Primitive, Shape, ShapeId, Ty};
use crate::naming::{Context, NameAllocator, NameMark};
use crate::registry::ShapeRegistry;

#[derive(Debug, Clone, Default)]
pub struct Inference {
    registry: ShapeRegistry,
    names: NameAllocator,
    next_ticket: usize,
}

/// Everything needed to undo registrations made after this point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    shapes: usize,
    names: NameMark,
}

impl Inference {
    pub fn new() -> Self { Self::default() }

    /// Infer the top-level value; objects here are named `RootObject`.
    pub fn infer_root(&mut self, value: &Value) -> Ty {
        let ty = self.infer(value, Context::Root);
        tracing::debug!(shapes = self.registry.len(), "inferred document");
        ty
    }

    pub fn infer(&mut self, value: &Value, context: Context<'_>) -> Ty {
        match value {
            Value::Null => Ty::Any,
            Value::Bool(_) => Ty::Primitive(Primitive::Boolean),
            Value::Number(_) => Ty::Primitive(Primitive::Number),
            Value::String(_) => Ty::Primitive(Primitive::String),
            Value::Array(xs) => self.resolve_array(xs, context),
            Value::Object(map) => self.infer_object(map, context),
        }
    }

    /// Registered shapes in emission order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.registry.in_emission_order().into_iter().map(|(_, shape)| shape)
    }

    pub fn name_of(&self, id: ShapeId) -> Option<&str> {
        self.registry.get(id).map(|shape| shape.name.as_str())
    }

    pub fn registry(&self) -> &ShapeRegistry { &self.registry }

    pub fn names(&self) -> &NameAllocator { &self.names }

    fn take_ticket(&mut self) -> usize {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint { shapes: self.registry.len(), names: self.names.mark() }
    }

    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.registry.truncate(checkpoint.shapes);
        self.names.rewind(checkpoint.names);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_and_null() {
        let mut inf = Inference::new();
        assert_eq!(inf.infer_root(&json!("x")), Ty::Primitive(Primitive::String));
        assert_eq!(inf.infer_root(&json!(4.5)), Ty::Primitive(Primitive::Number));
        assert_eq!(inf.infer_root(&json!(false)), Ty::Primitive(Primitive::Boolean));
        assert_eq!(inf.infer_root(&json!(null)), Ty::Any);
        assert!(inf.registry().is_empty());
    }

    #[test]
    fn root_object_is_named_and_emitted_first() {
        let mut inf = Inference::new();
        let ty = inf.infer_root(&json!({ "a": { "b": 42 } }));
        let names: Vec<&str> = inf.shapes().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["RootObject", "A"]);
        assert_eq!(ty.shape_ref().and_then(|id| inf.name_of(id)), Some("RootObject"));
    }

    #[test]
    fn fresh_inference_per_document() {
        let doc = json!({ "a": { "b": 1 } });
        let mut first = Inference::new();
        first.infer_root(&doc);
        let mut second = Inference::new();
        second.infer_root(&doc);
        assert_eq!(second.names().count("A"), 1);
        assert_eq!(first.registry().len(), second.registry().len());
    }
}
