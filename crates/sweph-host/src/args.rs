//! Coercion of dynamically typed arguments into the typed API's values.

use serde_json::Value;
use sweph::{Calendar, GeoPosition, HouseSystem, Observer, RiseTarget};

use crate::error::{HostError, HostResult};

/// Positional arguments of one shim call
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    function: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(function: &'static str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, position: usize) -> HostResult<&'a Value> {
        self.values.get(position).ok_or(HostError::ArgumentCount)
    }

    fn mismatch(&self, position: usize, expected: &str, got: &Value) -> HostError {
        HostError::type_error(
            self.function,
            position,
            format!("must be {expected}, got {}", describe(got)),
        )
    }

    /// Turn a typed-layer rejection of argument `position` into a host error
    pub fn reject(&self, position: usize, err: sweph::Error) -> HostError {
        match err {
            sweph::Error::Native(message) => HostError::Native(message),
            other => HostError::type_error(self.function, position, format!("rejected: {other}")),
        }
    }

    /// Any JSON number
    pub fn f64(&self, position: usize) -> HostResult<f64> {
        let value = self.get(position)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(position, "a number", value))
    }

    /// An integer, or a float with no fractional part, within `i32`
    pub fn i32(&self, position: usize) -> HostResult<i32> {
        let value = self.get(position)?;
        let as_int = match value.as_i64() {
            Some(n) => Some(n),
            None => value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64),
        };
        as_int
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(position, "a 32-bit integer", value))
    }

    pub fn string(&self, position: usize) -> HostResult<&'a str> {
        let value = self.get(position)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(position, "a string", value))
    }

    /// A house-system letter: the first character of a string, or an ASCII code
    pub fn house_system(&self, position: usize) -> HostResult<HouseSystem> {
        let value = self.get(position)?;
        let system = match value {
            Value::String(s) => s.chars().next().and_then(HouseSystem::from_char),
            _ => value
                .as_i64()
                .and_then(|code| u8::try_from(code).ok())
                .filter(u8::is_ascii)
                .map(HouseSystem),
        };
        system.ok_or_else(|| self.mismatch(position, "a house-system letter", value))
    }

    /// Optional trailing calendar code, Gregorian when absent
    pub fn calendar(&self, position: usize) -> HostResult<Calendar> {
        if position >= self.values.len() {
            return Ok(Calendar::default());
        }
        let code = self.i32(position)?;
        Calendar::try_from(code).map_err(|err| self.reject(position, err))
    }

    pub fn optional_f64(&self, position: usize) -> HostResult<Option<f64>> {
        if position >= self.values.len() {
            return Ok(None);
        }
        self.f64(position).map(Some)
    }

    /// Star name when the argument is text, body id otherwise
    pub fn rise_target(&self, position: usize) -> HostResult<RiseTarget> {
        match self.get(position)? {
            Value::String(name) => Ok(RiseTarget::Star(name.clone())),
            _ => Ok(RiseTarget::Body(self.i32(position)?.into())),
        }
    }

    /// Five consecutive numbers: longitude, latitude, height, pressure, temperature
    pub fn observer(&self, start: usize) -> HostResult<Observer> {
        let position = GeoPosition::new(self.f64(start)?, self.f64(start + 1)?, self.f64(start + 2)?);
        Ok(Observer::new(
            position,
            self.f64(start + 3)?,
            self.f64(start + 4)?,
        ))
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
