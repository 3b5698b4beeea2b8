// Strongly-typed IR shared by inference and codegen. No serde_json::Value here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }
}

/// Identity of a registered shape (index into the registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShapeId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    Primitive(Primitive),
    /// null, or array elements that could not be reconciled
    Any,
    /// compared by registry identity, never by rendered name
    ObjectRef(ShapeId),
    /// `element` is never itself an `ArrayOf`; nesting lives in `depth`
    ArrayOf { element: Box<Ty>, depth: u32 },
}

impl Ty {
    /// Wrap one more array level around `element`, flattening nested arrays.
    pub fn array_of(element: Ty) -> Ty {
        match element {
            Ty::ArrayOf { element, depth } => Ty::ArrayOf { element, depth: depth + 1 },
            other => Ty::ArrayOf { element: Box::new(other), depth: 1 },
        }
    }

    /// The shape this type points at, looking through arrays.
    pub fn shape_ref(&self) -> Option<ShapeId> {
        match self {
            Ty::ObjectRef(id) => Some(*id),
            Ty::ArrayOf { element, .. } => element.shape_ref(),
            Ty::Primitive(_) | Ty::Any => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: Ty,
    pub optional: bool, // value was null
}

#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    pub name: String,
    pub fields: Vec<Field>,
    /// pre-order position of the object that first produced this shape
    #[serde(skip)]
    pub(crate) ticket: usize,
}

impl Shape {
    /// Same field names, same order, pairwise-equal types.
    pub fn same_structure(&self, fields: &[Field]) -> bool {
        self.fields.as_slice() == fields
    }
}
