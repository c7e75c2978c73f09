use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ModelError;

/// Registry columns the checker understands.
///
/// The published registry uses Indonesian column names; [`RegistryField::key`]
/// returns the exact JSON key for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistryField {
    /// `Nomor`: optional display order assigned by the registry.
    Number,
    /// `Nama Perusahaan`
    Company,
    /// `Nama Sistem Elektronik`
    System,
    /// `Surat Tanda Berizin/Terdaftar`: license or registration certificate id.
    License,
    /// `Tanggal Berizin/Terdaftar`: raw registration date text.
    RegistrationDate,
    /// `Jenis Usaha`
    BusinessType,
    /// `Alamat Website`
    Website,
}

impl RegistryField {
    /// All fields in registry column order.
    pub const ALL: [RegistryField; 7] = [
        RegistryField::Number,
        RegistryField::Company,
        RegistryField::System,
        RegistryField::License,
        RegistryField::RegistrationDate,
        RegistryField::BusinessType,
        RegistryField::Website,
    ];

    /// JSON key used by the registry export.
    pub const fn key(&self) -> &'static str {
        match self {
            RegistryField::Number => "Nomor",
            RegistryField::Company => "Nama Perusahaan",
            RegistryField::System => "Nama Sistem Elektronik",
            RegistryField::License => "Surat Tanda Berizin/Terdaftar",
            RegistryField::RegistrationDate => "Tanggal Berizin/Terdaftar",
            RegistryField::BusinessType => "Jenis Usaha",
            RegistryField::Website => "Alamat Website",
        }
    }

    /// Short column header for tables.
    pub const fn label(&self) -> &'static str {
        match self {
            RegistryField::Number => "No",
            RegistryField::Company => "Nama Perusahaan",
            RegistryField::System => "Nama Sistem Elektronik",
            RegistryField::License => "Surat Tanda",
            RegistryField::RegistrationDate => "Tanggal Terdaftar",
            RegistryField::BusinessType => "Jenis Usaha",
            RegistryField::Website => "Alamat Website",
        }
    }

    /// Look up a field by its exact JSON key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for RegistryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for RegistryField {
    type Err = ModelError;

    /// Accepts the JSON key or a short name (`company`, `business-type`, ...),
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = Self::from_key(s.trim()) {
            return Ok(field);
        }
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "no" | "number" | "nomor" => Ok(RegistryField::Number),
            "company" => Ok(RegistryField::Company),
            "system" => Ok(RegistryField::System),
            "license" | "licence" => Ok(RegistryField::License),
            "date" | "registration-date" => Ok(RegistryField::RegistrationDate),
            "business-type" | "businesstype" => Ok(RegistryField::BusinessType),
            "website" => Ok(RegistryField::Website),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// A single field value as it appears in the registry JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    Null,
    Text(String),
    Number(Number),
    /// Booleans, arrays and objects are carried through unchanged.
    Other(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text form used for matching and display.
    ///
    /// Null has no text form. Numbers render as JSON does, so `0` is `"0"`.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(text) => Some(Cow::Borrowed(text)),
            FieldValue::Number(number) => Some(Cow::Owned(number.to_string())),
            FieldValue::Other(value) => Some(Cow::Owned(value.to_string())),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => FieldValue::Number(number),
            other => FieldValue::Other(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Text(text) => Value::String(text),
            FieldValue::Number(number) => Value::Number(number),
            FieldValue::Other(other) => other,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Number::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_round_trip() {
        for field in RegistryField::ALL {
            assert_eq!(RegistryField::from_key(field.key()), Some(field));
        }
        assert_eq!(RegistryField::from_key("nama perusahaan"), None);
    }

    #[test]
    fn field_from_short_names() {
        assert_eq!("company".parse::<RegistryField>(), Ok(RegistryField::Company));
        assert_eq!("Business_Type".parse::<RegistryField>(), Ok(RegistryField::BusinessType));
        assert_eq!("no".parse::<RegistryField>(), Ok(RegistryField::Number));
        assert_eq!("date".parse::<RegistryField>(), Ok(RegistryField::RegistrationDate));
        assert_eq!(
            "Alamat Website".parse::<RegistryField>(),
            Ok(RegistryField::Website)
        );
        assert_eq!(
            "phone".parse::<RegistryField>(),
            Err(ModelError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn zero_has_text_form() {
        let zero = FieldValue::from(0_i64);
        assert_eq!(zero.text().as_deref(), Some("0"));
        assert!(FieldValue::Null.text().is_none());
    }

    #[test]
    fn value_conversion_keeps_other_values() {
        let value = serde_json::json!([1, 2]);
        let field = FieldValue::from(value.clone());
        assert_eq!(field, FieldValue::Other(value.clone()));
        assert_eq!(Value::from(field), value);
        assert_eq!(
            FieldValue::from(Value::Bool(true)).text().as_deref(),
            Some("true")
        );
    }
}
