//! Structure fragments.
//!
//! A fragment is the minimal nested mapping leading from the document root to
//! one leaf: every level holds exactly one key. Merging the fragments of all
//! leaves of a document rebuilds the document.

use serde_yaml::{Mapping, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure(Mapping);

impl Structure {
    /// Build a singleton-path fragment: `[a, b]` + `v` gives `{a: {b: v}}`.
    ///
    /// An empty path yields an empty fragment.
    pub fn from_path(path: &[Value], leaf: Value) -> Self {
        let Some((last, ancestors)) = path.split_last() else {
            return Self::default();
        };

        let mut bottom = Mapping::new();
        bottom.insert(last.clone(), leaf);

        let root = ancestors.iter().rev().fold(bottom, |child, key| {
            let mut parent = Mapping::new();
            parent.insert(key.clone(), Value::Mapping(child));
            parent
        });

        Self(root)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys from the root down to the leaf.
    pub fn path(&self) -> Vec<&Value> {
        let mut path = Vec::new();
        let mut level = &self.0;
        while let Some((key, value)) = level.iter().next() {
            path.push(key);
            match value {
                Value::Mapping(next) if !next.is_empty() => level = next,
                _ => break,
            }
        }
        path
    }

    /// The value at the bottom of the path.
    pub fn leaf(&self) -> Option<&Value> {
        let (_, mut value) = self.0.iter().next()?;
        while let Value::Mapping(map) = value {
            value = map.iter().next()?.1;
        }
        Some(value)
    }

    /// Same path, new leaf value. The original fragment is left untouched.
    pub fn with_leaf(&self, value: Value) -> Self {
        let path: Vec<Value> = self.path().into_iter().cloned().collect();
        Self::from_path(&path, value)
    }

    /// Deep-merge this fragment into `target`.
    pub fn merge_into(&self, target: &mut Mapping) {
        deep_merge(target, &self.0);
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }
}

impl From<Structure> for Value {
    fn from(structure: Structure) -> Self {
        Value::Mapping(structure.0)
    }
}

/// Recursive union of two mappings.
///
/// Mapping/mapping pairs recurse. Any other pair takes the value from `source`,
/// so the fragment merged last is authoritative. Existing keys keep their
/// position in `target`; new keys are appended.
pub fn deep_merge(target: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        if let (Some(Value::Mapping(existing)), Value::Mapping(incoming)) =
            (target.get_mut(key), value)
        {
            deep_merge(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

/// Render a mapping key as one segment of a dotted key path.
pub fn key_segment(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
