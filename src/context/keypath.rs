//! Dotted key paths over a settings tree
//!
//! A path such as `grafana.url` addresses a node by walking mapping keys.
//! Numeric segments index into sequences (`targets.0`).

use serde_yml::{Mapping, Value};

use crate::error::{GrrError, Result};

/// A parsed dotted path. The empty path addresses the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path, rejecting empty or whitespace-padded segments
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                segments: Vec::new(),
            });
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        let reason = if segments.iter().any(|s| s.is_empty()) {
            Some("empty path segment")
        } else if segments.iter().any(|s| s.trim() != s) {
            Some("path segment has leading or trailing whitespace")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GrrError::InvalidPath {
                path: raw.to_string(),
                reason: reason.to_string(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    fn invalid(&self, reason: impl Into<String>) -> GrrError {
        GrrError::InvalidPath {
            path: self.raw.clone(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Mapping(map) => map.get(segment),
        Value::Sequence(seq) => segment.parse::<usize>().ok().and_then(|i| seq.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Mapping(map) => map.get_mut(segment),
        Value::Sequence(seq) => match segment.parse::<usize>() {
            Ok(i) if i < seq.len() => Some(&mut seq[i]),
            _ => None,
        },
        _ => None,
    }
}

/// Find the node addressed by `path`
pub fn resolve<'a>(tree: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.segments
        .iter()
        .try_fold(tree, |node, segment| child(node, segment))
}

/// Step into `segment`, creating an empty mapping when it is missing
fn descend_or_create<'a>(
    node: &'a mut Value,
    segment: &str,
    path: &KeyPath,
) -> Result<&'a mut Value> {
    if node.is_null() {
        *node = Value::Mapping(Mapping::new());
    }

    match node {
        Value::Mapping(map) => {
            let next = map
                .entry(Value::String(segment.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            Ok(next)
        }
        Value::Sequence(seq) => match segment.parse::<usize>() {
            Ok(i) if i < seq.len() => Ok(&mut seq[i]),
            _ => Err(path.invalid(format!(
                "'{}' is not an index into a sequence of {} items",
                segment,
                seq.len()
            ))),
        },
        _ => Err(path.invalid(format!("'{}' is below a scalar value", segment))),
    }
}

/// Assign `value` at `path`, creating intermediate mappings as needed
pub fn assign(tree: &mut Value, path: &KeyPath, value: Value) -> Result<()> {
    let Some((last, parents)) = path.segments.split_last() else {
        return Err(path.invalid("cannot assign to the root"));
    };

    let mut node = tree;
    for segment in parents {
        node = descend_or_create(node, segment, path)?;
    }

    if node.is_null() {
        *node = Value::Mapping(Mapping::new());
    }

    match node {
        Value::Mapping(map) => {
            map.insert(Value::String(last.clone()), value);
            Ok(())
        }
        Value::Sequence(seq) => match last.parse::<usize>() {
            Ok(i) if i < seq.len() => {
                seq[i] = value;
                Ok(())
            }
            _ => Err(path.invalid(format!(
                "'{}' is not an index into a sequence of {} items",
                last,
                seq.len()
            ))),
        },
        _ => Err(path.invalid(format!("'{}' is below a scalar value", last))),
    }
}

/// Remove the node at `path`. Ancestors left empty are kept.
pub fn remove(tree: &mut Value, path: &KeyPath) -> Option<Value> {
    let (last, parents) = path.segments.split_last()?;

    let mut node = tree;
    for segment in parents {
        node = child_mut(node, segment)?;
    }

    match node {
        Value::Mapping(map) => map.shift_remove(last.as_str()),
        Value::Sequence(seq) => {
            let index = last.parse::<usize>().ok().filter(|i| *i < seq.len())?;
            Some(seq.remove(index))
        }
        _ => None,
    }
}
