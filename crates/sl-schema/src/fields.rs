//! Field resolution for loosely-shaped JSON records.
//!
//! Every input adapter goes through [`RecordFields`] so that aliasing,
//! defaults, and coercion live in one place instead of being scattered
//! across call sites.
//!
//! # Coercion rules
//!
//! | Target   | Accepted JSON                                          |
//! |----------|--------------------------------------------------------|
//! | integer  | integer, float with no fractional part, numeric string |
//! | float    | any number, numeric string                             |
//! | string   | string                                                 |
//!
//! `null` counts as absent for optional fields and as invalid for required
//! ones.

use serde_json::{Map, Value};

use crate::{SchemaError, SchemaResult};

/// Borrowed view over one JSON object with typed, alias-aware accessors.
#[derive(Clone, Copy, Debug)]
pub struct RecordFields<'a> {
    obj: &'a Map<String, Value>,
}

impl<'a> RecordFields<'a> {
    /// Wrap `value`, failing if it is not a JSON object.
    pub fn new(value: &'a Value) -> SchemaResult<Self> {
        value
            .as_object()
            .map(|obj| Self { obj })
            .ok_or_else(|| SchemaError::invalid("<record>", "a JSON object"))
    }

    /// First of `names` present in the object, with the name that matched.
    fn lookup(&self, names: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        names
            .iter()
            .find_map(|&name| self.obj.get(name).map(|v| (name, v)))
    }

    // ── Required ─────────────────────────────────────────────────────────

    pub fn require_str(&self, name: &'static str) -> SchemaResult<String> {
        let v = self.obj.get(name).ok_or_else(|| SchemaError::missing(name))?;
        coerce_str(v).ok_or_else(|| SchemaError::invalid(name, "a string"))
    }

    pub fn require_int<T: TryFrom<i64>>(&self, name: &'static str) -> SchemaResult<T> {
        let v = self.obj.get(name).ok_or_else(|| SchemaError::missing(name))?;
        coerce_int(v).ok_or_else(|| SchemaError::invalid(name, "an integer"))
    }

    pub fn require_f64(&self, name: &'static str) -> SchemaResult<f64> {
        let v = self.obj.get(name).ok_or_else(|| SchemaError::missing(name))?;
        coerce_f64(v).ok_or_else(|| SchemaError::invalid(name, "a number"))
    }

    /// Required key whose value may be `null`.
    pub fn require_nullable_int<T: TryFrom<i64>>(&self, name: &'static str) -> SchemaResult<Option<T>> {
        if !self.obj.contains_key(name) {
            return Err(SchemaError::missing(name));
        }
        self.optional_int(&[name])
    }

    // ── Defaulted / optional ─────────────────────────────────────────────

    /// Float under the first present alias, `default` when none is present.
    pub fn f64_or(&self, names: &[&'static str], default: f64) -> SchemaResult<f64> {
        match self.lookup(names) {
            None => Ok(default),
            Some((name, v)) => coerce_f64(v).ok_or_else(|| SchemaError::invalid(name, "a number")),
        }
    }

    pub fn optional_f64(&self, names: &[&'static str]) -> SchemaResult<Option<f64>> {
        match self.lookup(names) {
            None | Some((_, Value::Null)) => Ok(None),
            Some((name, v)) => coerce_f64(v)
                .map(Some)
                .ok_or_else(|| SchemaError::invalid(name, "a number")),
        }
    }

    pub fn optional_int<T: TryFrom<i64>>(&self, names: &[&'static str]) -> SchemaResult<Option<T>> {
        match self.lookup(names) {
            None | Some((_, Value::Null)) => Ok(None),
            Some((name, v)) => coerce_int(v)
                .map(Some)
                .ok_or_else(|| SchemaError::invalid(name, "an integer")),
        }
    }

    pub fn optional_str(&self, names: &[&'static str]) -> SchemaResult<Option<String>> {
        match self.lookup(names) {
            None | Some((_, Value::Null)) => Ok(None),
            Some((name, v)) => coerce_str(v)
                .map(Some)
                .ok_or_else(|| SchemaError::invalid(name, "a string")),
        }
    }
}

// ── Coercion ──────────────────────────────────────────────────────────────────

fn coerce_int<T: TryFrom<i64>>(v: &Value) -> Option<T> {
    let i = match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    T::try_from(i).ok()
}

fn coerce_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn coerce_str(v: &Value) -> Option<String> {
    v.as_str().map(str::to_owned)
}
