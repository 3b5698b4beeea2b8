use serde_json::{Map, Value};

use super::Inference;
use crate::ir::{Field, Ty};
use crate::naming::Context;

impl Inference {
    /// Fields in key order, each inferred under its own key, then registered.
    pub(super) fn infer_object(&mut self, map: &Map<String, Value>, context: Context<'_>) -> Ty {
        // Ticket is taken on entry so that emission follows document order.
        let ticket = self.take_ticket();

        let fields: Vec<Field> = map
            .iter()
            .map(|(key, value)| Field {
                name: key.clone(),
                ty: self.infer(value, Context::Field(key)),
                optional: value.is_null(),
            })
            .collect();

        let id = self.registry.register(fields, context, ticket, &mut self.names);
        Ty::ObjectRef(id)
    }
}
