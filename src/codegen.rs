//! Render registered shapes as TypeScript `interface` declarations.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::inference::Inference;
use crate::ir::{Shape, Ty};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// spaces before each field line
    pub indent: usize,
    /// prefix declarations with `export `
    pub export: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 2, export: false }
    }
}

pub struct Codegen<'a> {
    inference: &'a Inference,
    options: &'a RenderOptions,
}

impl<'a> Codegen<'a> {
    pub fn new(inference: &'a Inference, options: &'a RenderOptions) -> Self {
        Self { inference, options }
    }

    /// One declaration per registered shape, in emission order.
    pub fn declarations(&self) -> Vec<String> {
        self.inference.shapes().map(|shape| self.declaration(shape)).collect()
    }

    pub fn declaration(&self, shape: &Shape) -> String {
        let export = if self.options.export { "export " } else { "" };
        let pad = " ".repeat(self.options.indent);
        let mut out = format!("{export}interface {} {{\n", shape.name);
        for field in &shape.fields {
            let marker = if field.optional { "?" } else { "" };
            out.push_str(&format!(
                "{pad}{}{marker}: {};\n",
                property_key(&field.name),
                self.type_text(&field.ty),
            ));
        }
        out.push('}');
        out
    }

    pub fn type_text(&self, ty: &Ty) -> String {
        match ty {
            Ty::Primitive(kind) => kind.as_str().to_string(),
            Ty::Any => "any".to_string(),
            // dangling refs cannot survive inference; degrade like everything else
            Ty::ObjectRef(id) => self.inference.name_of(*id).unwrap_or("any").to_string(),
            Ty::ArrayOf { element, depth } => {
                let mut text = self.type_text(element);
                for _ in 0..*depth {
                    text.push_str("[]");
                }
                text
            }
        }
    }
}

/// Bare identifier when possible, otherwise a single-quoted string key.
fn property_key(name: &str) -> String {
    if IDENTIFIER.is_match(name) {
        return name.to_string();
    }
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
