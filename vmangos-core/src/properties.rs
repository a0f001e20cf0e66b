//! `KEY=VALUE` property parsing for a single block.

use std::collections::HashMap;

/// Block properties keyed by uppercased name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    values: HashMap<String, String>,
}

impl PropertyMap {
    /// Parse multi-line block text.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Split each line at its first `=`. Lines without one, or starting with
    /// one, are ignored. A repeated key keeps its last value.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values = HashMap::new();
        for line in lines {
            let Some(eq) = line.find('=') else {
                continue;
            };
            if eq == 0 {
                continue;
            }
            let key = line[..eq].trim().to_uppercase();
            let value = line[eq + 1..].trim().to_string();
            values.insert(key, value);
        }
        Self { values }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
