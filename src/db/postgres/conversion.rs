//! Type conversion utilities for the PostgreSQL backend.
//!
//! Handles conversion between `Value` and PostgreSQL wire types:
//! - `Value` → parameter (`ToSql`), converted to the type the server
//!   inferred for the placeholder; text is parsed into that type
//! - column → `Value` (`FromSql`), null-aware, by column type
//!
//! A value/type pair with no faithful conversion is an error in both
//! directions; nothing is written or read as raw bytes of another type.

use std::error::Error;
use std::fmt;

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::types::{to_sql_checked, FromSql, IsNull, Kind, ToSql, Type};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::Value;

type BoxError = Box<dyn Error + Sync + Send>;

fn is_text(ty: &Type) -> bool {
    matches!(
        *ty,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN
    )
}

fn mismatch(value: &Value, ty: &Type) -> BoxError {
    format!("cannot bind a {} value to a parameter of type {}", value.type_name(), ty).into()
}

fn unparsable(raw: &str, ty: &Type, e: impl fmt::Display) -> BoxError {
    format!("cannot parse '{}' as {}: {}", raw, ty, e).into()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
}

/// Text bound to a non-text parameter is parsed into the parameter's type,
/// so CLI literals such as `2024-01-01` or `{"a": 1}` reach DATE or JSONB
/// columns intact.
fn text_to_sql(s: &str, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    let raw = s.trim();
    match *ty {
        Type::BOOL => parse_bool(raw)
            .ok_or_else(|| unparsable(s, ty, "expected true or false"))?
            .to_sql(ty, out),
        Type::INT2 => raw.parse::<i16>().map_err(|e| unparsable(s, ty, e))?.to_sql(ty, out),
        Type::INT4 => raw.parse::<i32>().map_err(|e| unparsable(s, ty, e))?.to_sql(ty, out),
        Type::INT8 => raw.parse::<i64>().map_err(|e| unparsable(s, ty, e))?.to_sql(ty, out),
        Type::FLOAT4 => raw.parse::<f32>().map_err(|e| unparsable(s, ty, e))?.to_sql(ty, out),
        Type::FLOAT8 => raw.parse::<f64>().map_err(|e| unparsable(s, ty, e))?.to_sql(ty, out),
        Type::NUMERIC => raw
            .parse::<Decimal>()
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::UUID => Uuid::parse_str(raw)
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::JSON | Type::JSONB => serde_json::from_str::<serde_json::Value>(s)
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::DATE => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::TIME => raw
            .parse::<NaiveTime>()
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::TIMESTAMP => parse_timestamp(raw)
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        Type::TIMESTAMPTZ => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| parse_timestamp(raw).map(|dt| dt.and_utc()))
            .map_err(|e| unparsable(s, ty, e))?
            .to_sql(ty, out),
        _ => Err(format!(
            "cannot bind text to a parameter of type {}; cast the placeholder in SQL",
            ty
        )
        .into()),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        if self.is_null() {
            return Ok(IsNull::Yes);
        }
        match ty.kind() {
            Kind::Domain(base) => return self.to_sql(base, out),
            Kind::Enum(_) => {
                return match self {
                    Value::Text(s) => s.as_str().to_sql(ty, out),
                    _ => Err(mismatch(self, ty)),
                };
            }
            _ => {}
        }
        // Every value except raw bytes has a text form.
        if is_text(ty) && !matches!(self, Value::Bytes(_)) {
            return self.to_string().to_sql(ty, out);
        }

        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => match *ty {
                Type::BOOL => b.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Int(i) => match *ty {
                Type::INT2 => i16::try_from(*i)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*i)?.to_sql(ty, out),
                Type::INT8 => i.to_sql(ty, out),
                Type::OID => u32::try_from(*i)?.to_sql(ty, out),
                Type::FLOAT4 => (*i as f32).to_sql(ty, out),
                Type::FLOAT8 => (*i as f64).to_sql(ty, out),
                Type::NUMERIC => Decimal::from(*i).to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Float(f) => match *ty {
                Type::FLOAT4 => (*f as f32).to_sql(ty, out),
                Type::FLOAT8 => f.to_sql(ty, out),
                // Through the shortest decimal text, so 0.1 stays 0.1.
                Type::NUMERIC => f
                    .to_string()
                    .parse::<Decimal>()
                    .map_err(|e| unparsable(&f.to_string(), ty, e))?
                    .to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Text(s) => text_to_sql(s, ty, out),
            Value::Bytes(b) => match *ty {
                Type::BYTEA => b.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Decimal(d) => match *ty {
                Type::NUMERIC => d.to_sql(ty, out),
                Type::FLOAT4 => d.to_f32().ok_or_else(|| mismatch(self, ty))?.to_sql(ty, out),
                Type::FLOAT8 => d.to_f64().ok_or_else(|| mismatch(self, ty))?.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Uuid(u) => match *ty {
                Type::UUID => u.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Json(j) => match *ty {
                Type::JSON | Type::JSONB => j.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Date(d) => match *ty {
                Type::DATE => d.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Time(t) => match *ty {
                Type::TIME => t.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::DateTime(dt) => match *ty {
                Type::TIMESTAMP => dt.to_sql(ty, out),
                Type::TIMESTAMPTZ => dt.and_utc().to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

impl<'a> FromSql<'a> for Value {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, BoxError> {
        match ty.kind() {
            Kind::Domain(base) => return Value::from_sql(base, raw),
            Kind::Enum(_) => return Ok(Value::Text(std::str::from_utf8(raw)?.to_string())),
            _ => {}
        }

        let value = match *ty {
            Type::BOOL => Value::Bool(bool::from_sql(ty, raw)?),
            Type::CHAR => Value::Int(i8::from_sql(ty, raw)?.into()),
            Type::INT2 => Value::Int(i16::from_sql(ty, raw)?.into()),
            Type::INT4 => Value::Int(i32::from_sql(ty, raw)?.into()),
            Type::INT8 => Value::Int(i64::from_sql(ty, raw)?),
            Type::OID => Value::Int(u32::from_sql(ty, raw)?.into()),
            Type::FLOAT4 => Value::Float(f32::from_sql(ty, raw)?.into()),
            Type::FLOAT8 => Value::Float(f64::from_sql(ty, raw)?),
            Type::NUMERIC => Value::Decimal(Decimal::from_sql(ty, raw)?),
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN => {
                Value::Text(String::from_sql(ty, raw)?)
            }
            Type::BYTEA => Value::Bytes(Vec::<u8>::from_sql(ty, raw)?),
            Type::UUID => Value::Uuid(Uuid::from_sql(ty, raw)?),
            Type::JSON | Type::JSONB => Value::Json(serde_json::Value::from_sql(ty, raw)?),
            Type::DATE => Value::Date(NaiveDate::from_sql(ty, raw)?),
            Type::TIME => Value::Time(NaiveTime::from_sql(ty, raw)?),
            Type::TIMESTAMP => Value::DateTime(NaiveDateTime::from_sql(ty, raw)?),
            Type::TIMESTAMPTZ => Value::DateTime(DateTime::<Utc>::from_sql(ty, raw)?.naive_utc()),
            _ => {
                return Err(format!(
                    "unsupported column type {}; cast it in the query, e.g. column::text",
                    ty
                )
                .into());
            }
        };
        Ok(value)
    }

    fn from_sql_null(_ty: &Type) -> Result<Self, BoxError> {
        Ok(Value::Null)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// Decode every cell of a row.
pub fn row_values(row: &postgres::Row) -> Result<Vec<Value>, postgres::Error> {
    (0..row.len()).map(|idx| row.try_get::<_, Value>(idx)).collect()
}
