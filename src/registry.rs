//! Ordered collection of parameters for one invocation

use crate::{Error, Param, ParamType, Result};

/// Parameters in registration order, which is also the order usage is printed in
#[derive(Debug, Default)]
pub struct Registry {
    params: Vec<Param>,
    help: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any earlier one with the same name
    ///
    /// A replaced parameter loses its old position and takes the next one.
    pub fn register(&mut self, param: Param) {
        if let Some(pos) = self.position(&param.name) {
            tracing::debug!(name = %param.name, "overwriting registered parameter");
            self.params.remove(pos);
        }
        tracing::trace!(name = %param.name, kind = %param.kind, order = self.params.len(), "registered parameter");
        self.params.push(param);
    }

    /// Raw value of a parameter, the option key for option parameters
    pub fn get(&self, name: &str) -> Result<&str> {
        Ok(self.lookup(name)?.value.as_str())
    }

    /// Parsed integer of an [ParamType::Int] parameter, `0` if absent or invalid
    pub fn get_int(&self, name: &str) -> Result<i64> {
        let param = self.expect_kind(name, ParamType::Int)?;
        Ok(param.int_value.unwrap_or_default())
    }

    /// Parsed value of a [ParamType::Bool] parameter
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        Ok(self.expect_kind(name, ParamType::Bool)?.bool_value)
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Iterates parameters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// If a help flag was found during the last parse
    pub fn help_requested(&self) -> bool {
        self.help
    }

    pub(crate) fn set_help(&mut self, help: bool) {
        self.help = help
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Param> {
        self.params.iter_mut()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }

    fn lookup(&self, name: &str) -> Result<&Param> {
        self.param(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn expect_kind(&self, name: &str, expected: ParamType) -> Result<&Param> {
        let param = self.lookup(name)?;
        if param.kind != expected {
            return Err(Error::KindMismatch {
                name: name.to_string(),
                expected,
                actual: param.kind,
            });
        }
        Ok(param)
    }
}
