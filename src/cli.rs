//! Minimal CLI: infer → (ts | shapes)
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use serde_json::Value;

use json_to_ts::{Codegen, Error, Inference, RenderOptions, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer TypeScript interfaces from JSON documents
#[derive(Parser, Debug)]
#[command(name = "json-to-ts", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit TypeScript interface declarations
    Ts(TsOut),
    /// infer and print the registered shapes as JSON (debug view)
    Shapes(ShapesOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct TsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// spaces before each field
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// prefix every declaration with `export`
    #[arg(long, default_value_t = false)]
    export: bool,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ShapesOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

/// One parsed input, after pointer selection.
#[derive(Debug)]
struct Document {
    origin: String,
    value: Value,
}

#[derive(Debug)]
enum Source {
    Stdin,
    File(PathBuf),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let sources = resolve_sources(&self.input)?;
        tracing::debug!(count = sources.len(), "resolved inputs");
        sources
            .par_iter()
            .map(|source| self.load_document(source))
            .collect()
    }

    fn load_document(&self, source: &Source) -> Result<Document> {
        let (origin, text) = match source {
            Source::Stdin => {
                let text = std::io::read_to_string(std::io::stdin())
                    .map_err(|source| Error::Io { path: PathBuf::from("-"), source })?;
                ("<stdin>".to_string(), text)
            }
            Source::File(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|source| Error::Io { path: path.clone(), source })?;
                (path.to_string_lossy().to_string(), text)
            }
        };
        let value = serde_json::from_str::<Value>(&text)
            .map_err(|source| Error::Parse { origin: origin.clone(), source })?;
        let value = match self.json_pointer.as_deref() {
            None => value,
            Some(pointer) => value
                .pointer(pointer)
                .cloned()
                .ok_or_else(|| Error::PointerNotFound { pointer: pointer.to_string(), origin: origin.clone() })?,
        };
        Ok(Document { origin, value })
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Ts(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let documents = target.input_settings.load_documents()?;
                let options = RenderOptions { indent: target.indent, export: target.export };
                let ts_src = render_documents(&documents, &options);
                emit(target.out.as_deref(), &ts_src)
            }
            Command::Shapes(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let documents = target.input_settings.load_documents()?;
                let views: Vec<Value> = documents
                    .par_iter()
                    .map(|doc| {
                        let mut inference = Inference::new();
                        let root = inference.infer_root(&doc.value);
                        serde_json::json!({
                            "origin": doc.origin,
                            "root": root,
                            "shapes": inference
                                .registry()
                                .in_emission_order()
                                .into_iter()
                                .map(|(id, shape)| serde_json::json!({ "id": id, "shape": shape }))
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                let json_src = serde_json::to_string_pretty(&views)
                    .context("failed to serialize shapes")?;
                emit(target.out.as_deref(), &json_src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Declarations per document; several documents get a `// <origin>` header each.
fn render_documents(documents: &[Document], options: &RenderOptions) -> String {
    // each document gets its own inference state
    let rendered: Vec<String> = documents
        .par_iter()
        .map(|doc| {
            let mut inference = Inference::new();
            inference.infer_root(&doc.value);
            Codegen::new(&inference, options).declarations().join("\n\n")
        })
        .collect();

    if documents.len() == 1 {
        return rendered.concat()
    }
    documents
        .iter()
        .zip(&rendered)
        .map(|(doc, src)| format!("// {}\n{src}", doc.origin))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn emit(out: Option<&Path>, src: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), "wrote output");
        }
        None => println!("{src}"),
    }
    Ok(())
}

fn resolve_sources<I>(patterns: I) -> Result<Vec<Source>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<Source>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            out.push(Source::Stdin);
        } else if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(Source::File(entry?));
            }
            if out.len() == before {
                return Err(Error::NoMatch { pattern: pattern.to_string() });
            }
        } else {
            out.push(Source::File(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_json(dir: &tempfile::TempDir, name: &str, src: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, src).expect("write fixture");
        path.to_string_lossy().to_string()
    }

    fn settings(input: Vec<String>, json_pointer: Option<&str>) -> InputSettings {
        InputSettings { json_pointer: json_pointer.map(str::to_string), input }
    }

    #[test]
    fn literal_paths_and_stdin_pass_through() {
        let sources = resolve_sources(["a.json", "-"]).expect("resolve");
        assert!(matches!(&sources[0], Source::File(p) if p == Path::new("a.json")));
        assert!(matches!(sources[1], Source::Stdin));
    }

    #[test]
    fn unmatched_glob_is_an_error() {
        let err = resolve_sources(["/definitely/not/here/*.json"]).err();
        assert!(matches!(err, Some(Error::NoMatch { .. })));
    }

    #[test]
    fn parses_ts_subcommand() {
        let cli = CommandLineInterface::try_parse_from([
            "json-to-ts", "ts", "-i", "a.json", "b.json", "--indent", "4", "--export",
        ])
        .expect("parse");
        match cli.cmd {
            Command::Ts(target) => {
                assert_eq!(target.input_settings.input, ["a.json", "b.json"]);
                assert_eq!(target.indent, 4);
                assert!(target.export);
            }
            Command::Shapes(_) => panic!("expected ts"),
        }
    }

    #[test]
    fn json_pointer_selects_a_subnode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_json(&dir, "payload.json", r#"{"data": {"items": [{"id": 1}]}}"#);

        let documents = settings(vec![path.clone()], Some("/data/items/0")).load_documents().expect("load");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].origin, path);
        assert_eq!(documents[0].value, json!({ "id": 1 }));

        let err = settings(vec![path.clone()], Some("/data/missing")).load_documents().err();
        assert!(matches!(
            err,
            Some(Error::PointerNotFound { ref pointer, ref origin }) if pointer == "/data/missing" && *origin == path
        ));
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_json(&dir, "broken.json", "{ \"a\": ");
        let err = settings(vec![path.clone()], None).load_documents().err();
        assert!(matches!(err, Some(Error::Parse { ref origin, .. }) if *origin == path));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json").to_string_lossy().to_string();
        let err = settings(vec![path], None).load_documents().err();
        assert!(matches!(err, Some(Error::Io { .. })));
    }

    #[test]
    fn single_document_has_no_header() {
        let documents = [Document { origin: "a.json".into(), value: json!({ "a": { "b": 1 } }) }];
        let src = render_documents(&documents, &RenderOptions::default());
        assert_eq!(src, "interface RootObject {\n  a: A;\n}\n\ninterface A {\n  b: number;\n}");
    }

    #[test]
    fn several_documents_get_origin_headers_in_input_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = write_json(&dir, "first.json", r#"{"x": 1}"#);
        let second = write_json(&dir, "second.json", r#"{"cats": [{"name": "Tom"}]}"#);

        let documents = settings(vec![first.clone(), second.clone()], None).load_documents().expect("load");
        let src = render_documents(&documents, &RenderOptions::default());
        assert_eq!(
            src,
            format!(
                "// {first}\ninterface RootObject {{\n  x: number;\n}}\n\n\
                 // {second}\ninterface RootObject {{\n  cats: Cat[];\n}}\n\ninterface Cat {{\n  name: string;\n}}"
            )
        );
    }
}
