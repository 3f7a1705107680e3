//! Declared parameters and their typed values

use indexmap::IndexMap;
use std::fmt;

/// Kind of data a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamType {
    /// Free text, empty is a valid value
    #[default]
    String,
    /// Base-10 signed integer
    Int,
    /// One key out of a fixed option set
    Option,
    /// Presence flag, absent means `false`
    Bool,
}

impl ParamType {
    /// Reads a type annotation, anything unrecognised falls back to [ParamType::String]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "int" => Self::Int,
            "option" => Self::Option,
            "bool" => Self::Bool,
            _ => Self::String,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Option => "option",
            Self::Bool => "bool",
        })
    }
}

/// Typed value handed to a destination field after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Raw string of a string or option parameter
    Str(String),
    /// Parsed integer parameter
    Int(i64),
    /// Parsed boolean parameter
    Bool(bool),
}

/// One declared, typed, named command-line parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    /// Registry key, used as `-name` on the command line
    pub name: String,
    /// Raw value from the command line or the declared default, reset to the default on every parse; empty means absent
    pub value: String,
    /// Help text shown in usage and error messages
    pub usage: String,
    /// If an empty value should be reported, never applies to [ParamType::Bool]
    pub required: bool,
    /// Kind of data this parameter parses
    pub kind: ParamType,
    /// Allowed values mapped to their display labels, only used by [ParamType::Option]
    pub options: IndexMap<String, String>,
    default: String,
    pub(crate) int_value: Option<i64>,
    pub(crate) bool_value: bool,
}

impl Param {
    /// Creates an optional string parameter with no usage text
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn kind(mut self, kind: ParamType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets options from the `key:label,key:label` annotation format
    pub fn options(mut self, options: &str) -> Self {
        self.options = parse_options(options);
        self
    }

    /// Value used when the flag is absent from the command line
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self.value = self.default.clone();
        self
    }

    /// Drops everything a previous parse left behind
    pub(crate) fn reset(&mut self) {
        self.value = self.default.clone();
        self.int_value = None;
        self.bool_value = false;
    }

    /// Typed value for write-back, `None` for an integer which didn't parse
    pub fn typed_value(&self) -> Option<Value> {
        match self.kind {
            ParamType::Int => self.int_value.map(Value::Int),
            ParamType::Bool => Some(Value::Bool(self.bool_value)),
            ParamType::String | ParamType::Option => Some(Value::Str(self.value.clone())),
        }
    }
}

/// Parses `key:label` pairs separated by commas, skipping malformed pairs
pub fn parse_options(raw: &str) -> IndexMap<String, String> {
    raw.split(',')
        .filter_map(|item| {
            let mut parts = item.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(label), None) => Some((key.to_string(), label.to_string())),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags() {
        assert_eq!(ParamType::from_tag("int"), ParamType::Int);
        assert_eq!(ParamType::from_tag("option"), ParamType::Option);
        assert_eq!(ParamType::from_tag("bool"), ParamType::Bool);
        assert_eq!(ParamType::from_tag("string"), ParamType::String);
        assert_eq!(ParamType::from_tag("float"), ParamType::String); // lenient default
        assert_eq!(ParamType::from_tag(""), ParamType::String);
    }

    #[test]
    fn options_keep_order() {
        let options = parse_options("global:Global,rule:Rule,auto:Auto");
        let keys: Vec<&str> = options.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["global", "rule", "auto"]);
        assert_eq!(options["rule"], "Rule");
    }

    #[test]
    fn options_skip_malformed() {
        let options = parse_options("a:1,broken,b:2:3,,c:3");
        assert_eq!(options.len(), 2);
        assert!(options.contains_key("a"));
        assert!(options.contains_key("c"));
        assert!(parse_options("").is_empty());
    }

    #[test]
    fn typed_values() {
        let mut int = Param::new("P").kind(ParamType::Int);
        assert_eq!(int.typed_value(), None);
        int.int_value = Some(122);
        assert_eq!(int.typed_value(), Some(Value::Int(122)));

        let flag = Param::new("v").kind(ParamType::Bool);
        assert_eq!(flag.typed_value(), Some(Value::Bool(false)));

        let mode = Param::new("m").kind(ParamType::Option).default_value("auto");
        assert_eq!(mode.typed_value(), Some(Value::Str("auto".into())));
    }

    #[test]
    fn reset_restores_default() {
        let mut port = Param::new("P").kind(ParamType::Int).default_value("1080");
        port.value = "22".into();
        port.int_value = Some(22);
        port.bool_value = true;
        port.reset();

        assert_eq!(port.value, "1080");
        assert_eq!(port.int_value, None);
        assert!(!port.bool_value);
    }
}
