//! Declaration names: candidate derivation + per-call collision counters.
//!
//! Names are handed out when a shape is registered. Because a shape can only
//! be registered once all of its fields are inferred, inner objects claim a
//! base name before the objects that contain them.
pub mod singular;

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed name of the top-level shape.
pub const ROOT_NAME: &str = "RootObject";

/// Base used when a key gives us nothing to work with (e.g. `""`).
const EMPTY_KEY_NAME: &str = "Field";

/// Characters dropped from keys before they become interface names.
static NON_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9]").expect("name filter pattern")
});

/// Where a value sits, as far as naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'a> {
    /// the top-level value (or elements of a top-level array)
    Root,
    /// held directly by an object field
    Field(&'a str),
    /// element of an array held by this field (at any nesting depth)
    Element(&'a str),
}

impl<'a> Context<'a> {
    /// Context for the elements of an array found in this context.
    ///
    /// Nested arrays keep the first `Element` so the key is singularized once.
    pub fn element(self) -> Context<'a> {
        match self {
            Context::Root => Context::Root,
            Context::Field(key) | Context::Element(key) => Context::Element(key),
        }
    }

    /// Base candidate before collision handling. `None` for the root.
    pub fn base_name(self) -> Option<String> {
        match self {
            Context::Root => None,
            Context::Field(key) => Some(type_name(key)),
            Context::Element(key) => Some(type_name(&singular::singularize(key))),
        }
    }
}

/// Interface name for a key: keep `[A-Za-z0-9]` only, upper-case the first
/// letter, and put `_` in front of a leading digit (`1st` → `_1st`).
pub fn type_name(key: &str) -> String {
    let cleaned = NON_NAME_CHARS.replace_all(key, "");
    let name = capitalize(&cleaned);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Upper-case the first character only; the rest is kept verbatim.
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        None => EMPTY_KEY_NAME.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[derive(Debug, Clone)]
enum Claim {
    Root,
    Base { base: String, name: String, previous: usize },
}

/// Position in the allocator journal; see [`NameAllocator::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMark(usize);

#[derive(Debug, Clone)]
pub struct NameAllocator {
    /// base → suffix slots consumed (1 = the bare base)
    counts: IndexMap<String, usize>,
    /// every name handed out so far
    taken: IndexSet<String>,
    root_claimed: bool,
    journal: Vec<Claim>,
}

impl Default for NameAllocator {
    fn default() -> Self { Self::new() }
}

impl NameAllocator {
    pub fn new() -> Self {
        // Reserved up front: a nested `rootObject` key must not take it.
        let mut counts = IndexMap::new();
        counts.insert(ROOT_NAME.to_string(), 1);
        let mut taken = IndexSet::new();
        taken.insert(ROOT_NAME.to_string());
        Self { counts, taken, root_claimed: false, journal: Vec::new() }
    }

    /// First use keeps `base`; later distinct shapes get `base2`, `base3`, …
    ///
    /// A suffixed name that some other key already produced verbatim
    /// (`item2` next to two `item`s) is skipped.
    pub fn allocate(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        let previous = *count;
        let name = loop {
            *count += 1;
            let candidate = if *count == 1 { base.to_string() } else { format!("{base}{count}") };
            if self.taken.insert(candidate.clone()) {
                break candidate;
            }
        };
        self.journal.push(Claim::Base { base: base.to_string(), name: name.clone(), previous });
        tracing::trace!(base, %name, "allocated name");
        name
    }

    pub fn allocate_for(&mut self, context: Context<'_>) -> String {
        match context.base_name() {
            Some(base) => self.allocate(&base),
            None if !self.root_claimed => {
                self.root_claimed = true;
                self.journal.push(Claim::Root);
                ROOT_NAME.to_string()
            }
            None => self.allocate(ROOT_NAME),
        }
    }

    pub fn count(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }

    pub fn mark(&self) -> NameMark {
        NameMark(self.journal.len())
    }

    /// Forget every name handed out since `mark`.
    pub fn rewind(&mut self, mark: NameMark) {
        while self.journal.len() > mark.0 {
            match self.journal.pop() {
                Some(Claim::Root) => self.root_claimed = false,
                Some(Claim::Base { base, name, previous }) => {
                    self.taken.shift_remove(&name);
                    if previous == 0 {
                        self.counts.shift_remove(&base);
                    } else {
                        self.counts.insert(base, previous);
                    }
                }
                None => break,
            }
        }
    }
}
