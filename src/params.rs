//! Parameter registration for resource agents.
//!
//! A concrete agent registers every configuration parameter it accepts in a
//! [`ParameterSet`] when it is constructed. The set is the single source of
//! truth for environment overrides and for the `<parameters>` section of the
//! metadata descriptor.

use crate::error::{AgentError, Result};
use crate::naming::to_ocf_type;
use std::fmt;

/// Value type of a parameter as advertised in the metadata descriptor.
///
/// Values are always stored as strings; the type only affects metadata and
/// the typed accessors on [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterType {
    #[default]
    String,
    Integer,
    Boolean,
}

impl ParameterType {
    /// Normalize a declared type name (`int`, `bool`, ...) into a parameter type.
    pub fn from_declared(declared: &str) -> Self {
        match to_ocf_type(declared) {
            "integer" => ParameterType::Integer,
            "boolean" => ParameterType::Boolean,
            _ => ParameterType::String,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
            ParameterType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single configuration parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterType,
    pub unique: bool,
    pub shortdesc: String,
    pub longdesc: String,
    /// Current value. Starts as the registered default.
    pub value: String,
    /// Never advertised as required, even when empty.
    pub optional: bool,
}

impl Parameter {
    /// Create a string parameter with an empty default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterType::String,
            unique: false,
            shortdesc: String::new(),
            longdesc: String::new(),
            value: String::new(),
            optional: false,
        }
    }

    pub fn kind(mut self, kind: ParameterType) -> Self {
        self.kind = kind;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn shortdesc(mut self, text: impl Into<String>) -> Self {
        self.shortdesc = text.into();
        self
    }

    pub fn longdesc(mut self, text: impl Into<String>) -> Self {
        self.longdesc = text.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark the parameter as never required.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// A parameter is required exactly when it has no value, unless it was
    /// registered as optional.
    pub fn required(&self) -> bool {
        !self.optional && self.value.is_empty()
    }

    /// The value advertised as `default` in metadata, if any.
    pub fn advertised_default(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }
}

/// Ordered collection of registered parameters.
///
/// Registration order is preserved and is the order parameters appear in
/// the metadata descriptor. Registering a name twice replaces the earlier
/// entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter, replacing any existing one with the same name.
    pub fn register(&mut self, param: Parameter) -> &mut Self {
        match self.params.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.params.push(param),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Parameter> {
        self.params.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Current string value of a parameter; empty when unregistered.
    pub fn get(&self, name: &str) -> &str {
        self.parameter(name).map(|p| p.value.as_str()).unwrap_or("")
    }

    /// Overwrite the value of a registered parameter.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let param = self
            .params
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| AgentError::UnknownParameter(name.to_string()))?;
        param.value = value.into();
        Ok(())
    }

    /// Parse a parameter as an integer.
    ///
    /// Returns `Ok(None)` when the parameter has no value.
    pub fn get_int(&self, name: &str) -> Result<Option<i64>> {
        let param = self.require(name)?;
        let value = param.value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AgentError::InvalidParameter {
                name: name.to_string(),
                expected: "integer",
                value: param.value.clone(),
            })
    }

    /// Parse a parameter as a boolean using the usual OCF spellings.
    ///
    /// Returns `Ok(None)` when the parameter has no value.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        let param = self.require(name)?;
        match param.value.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(AgentError::InvalidParameter {
                name: name.to_string(),
                expected: "boolean",
                value: param.value.clone(),
            }),
        }
    }

    fn require(&self, name: &str) -> Result<&Parameter> {
        self.parameter(name)
            .ok_or_else(|| AgentError::UnknownParameter(name.to_string()))
    }
}
