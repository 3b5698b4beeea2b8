//! Infer TypeScript interfaces from a JSON value.
//!
//! ```
//! use serde_json::json;
//!
//! let interfaces = json_to_ts::json_to_ts(&json!({ "dogs": [{ "name": "sparky" }] }));
//! assert_eq!(interfaces, [
//!     "interface RootObject {\n  dogs: Dog[];\n}",
//!     "interface Dog {\n  name: string;\n}",
//! ]);
//! ```
pub mod ir;
pub mod naming;
pub mod registry;
pub mod inference;
pub mod codegen;
pub mod error;

use serde_json::Value;

pub use codegen::{Codegen, RenderOptions};
pub use error::{Error, Result};
pub use inference::Inference;
pub use ir::{Field, Primitive, Shape, ShapeId, Ty};

/// One declaration per distinct object shape, root first.
pub fn json_to_ts(value: &Value) -> Vec<String> {
    json_to_ts_with(value, &RenderOptions::default())
}

pub fn json_to_ts_with(value: &Value, options: &RenderOptions) -> Vec<String> {
    let mut inference = Inference::new();
    inference.infer_root(value);
    Codegen::new(&inference, options).declarations()
}

/// Parse `src` as JSON, then infer. Fails only on malformed JSON.
pub fn json_str_to_ts(src: &str) -> Result<Vec<String>> {
    let value = serde_json::from_str::<Value>(src).map_err(|source| Error::Parse {
        origin: "<input>".to_string(),
        source,
    })?;
    Ok(json_to_ts(&value))
}
