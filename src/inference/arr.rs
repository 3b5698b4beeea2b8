use serde_json::Value;

use super::Inference;
use crate::ir::Ty;
use crate::naming::Context;

impl Inference {
    /// Merge element types into one `ArrayOf`.
    ///
    /// - empty → `any[]`
    /// - all elements agree → that type (nested arrays add to `depth`)
    /// - otherwise → `any[]`, and shapes found inside the array are dropped
    pub(super) fn resolve_array(&mut self, xs: &[Value], context: Context<'_>) -> Ty {
        let checkpoint = self.checkpoint();
        let element_context = context.element();

        let mut merged: Option<Ty> = None;
        for (i, el) in xs.iter().enumerate() {
            let ty = self.infer(el, element_context);
            if merged.is_none() {
                merged = Some(ty);
                continue;
            }
            if merged.as_ref() != Some(&ty) {
                tracing::debug!(?context, index = i, expected = ?merged, found = ?ty, "array elements disagree");
                self.rollback(checkpoint);
                return Ty::array_of(Ty::Any);
            }
        }

        Ty::array_of(merged.unwrap_or(Ty::Any))
    }
}
