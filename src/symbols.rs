use crate::types::ExpressionType;
use std::collections::HashMap;

/// Type record of a variable, or of an anonymous (sub-)expression when
/// `name` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub name: Option<String>,
    pub ty: ExpressionType,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ty: ExpressionType::Undefined,
        }
    }
}

/// Variables bound in one parse session. A name keeps the record of its
/// first assignment for the lifetime of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SymbolTable {
    map: HashMap<String, ParseResult>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a copy of `record`. Returns `false` and leaves the
    /// table untouched when `name` is already bound.
    pub fn insert(&mut self, name: &str, record: &ParseResult) -> bool {
        if self.map.contains_key(name) {
            return false;
        }
        self.map.insert(name.to_string(), record.clone());
        true
    }

    pub fn get(&self, name: &str) -> Option<&ParseResult> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bindings ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParseResult)> {
        let mut entries: Vec<_> = self.map.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
