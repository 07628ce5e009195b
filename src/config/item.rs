// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// One named configuration value for an engine.
///
/// Items are plain name/value string pairs; their meaning belongs to the
/// engine implementation that reads them (model paths, batch sizes, label
/// files and so on). The builder never inspects either side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AiConfigItem {
    pub name: String,
    pub value: String,
}

impl AiConfigItem {
    /// Create an item from any string-like name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered configuration item list for one engine.
///
/// Insertion order is preserved and is significant: it determines the order
/// items appear in the serialized configuration message. No deduplication is
/// performed; repeated names are handed to the runtime as-is.
///
/// # Example
/// ```
/// use dyngraph::config::AiConfig;
///
/// let mut cfg = AiConfig::default();
/// cfg.add("model_path", "./resnet18.om");
/// cfg.add("batch_size", "4");
/// assert_eq!(cfg.items.len(), 2);
/// assert_eq!(cfg.items[0].name, "model_path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct AiConfig {
    pub items: Vec<AiConfigItem>,
}

impl AiConfig {
    /// Append an already-built item.
    pub fn add_item(&mut self, item: AiConfigItem) {
        self.items.push(item);
    }

    /// Append a name/value pair.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.items.push(AiConfigItem::new(name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_keep_insertion_order() {
        let mut cfg = AiConfig::default();
        cfg.add("first", "1");
        cfg.add_item(AiConfigItem::new("second", "2"));
        cfg.add("first", "again");

        let names: Vec<&str> = cfg.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "first"]);
    }

    #[test]
    fn no_deduplication_is_performed() {
        let mut cfg = AiConfig::default();
        cfg.add("key", "a");
        cfg.add("key", "b");
        assert_eq!(cfg.items.len(), 2);
        assert_eq!(cfg.items[1].value, "b");
    }

    #[test]
    fn deserializes_from_a_yaml_sequence() {
        let yaml = r#"
- name: model_path
  value: ./model.om
- name: batch_size
  value: "4"
"#;
        let cfg: AiConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.items.len(), 2);
        assert_eq!(cfg.items[1], AiConfigItem::new("batch_size", "4"));
    }
}
