use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        /// Opaque identifier. Numeric ids on the wire keep their decimal text.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(#[serde(deserialize_with = "lenient::text")] pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(FlightId);

/// One row of the flight list as served by the flights endpoint.
///
/// Every field is optional on the wire; absent values fall back to their
/// defaults so a partially filled record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightRecord {
    pub id: FlightId,
    #[serde(deserialize_with = "lenient::text")]
    pub gate: String,
    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub origin: String,
    #[serde(deserialize_with = "lenient::text")]
    pub airline: String,
    #[serde(deserialize_with = "lenient::text")]
    pub aircraft: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub arrival_time: String,
    #[serde(deserialize_with = "lenient::text")]
    pub destination: String,
    #[serde(deserialize_with = "lenient::text")]
    pub flight_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub departure_time: String,
    #[serde(deserialize_with = "lenient::seats")]
    pub seats_available: u32,
}

/// Decoders that accept numbers and numeric strings interchangeably, with
/// `null` mapping to the field default.
pub(crate) mod lenient {
    use serde::{de::Error as _, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Int(i64),
        Float(f64),
        Text(String),
        Bool(bool),
    }

    fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Scalar>, D::Error> {
        Option::<Scalar>::deserialize(deserializer)
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match scalar(deserializer)? {
            None => Ok(0),
            Some(Scalar::Int(value)) => Ok(value),
            Some(Scalar::Float(value)) if value.fract() == 0.0 => Ok(value as i64),
            Some(Scalar::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("expected an integer, got {text:?}"))),
            Some(Scalar::Float(value)) => Err(D::Error::custom(format!(
                "expected an integer, got {value}"
            ))),
            Some(Scalar::Bool(value)) => Err(D::Error::custom(format!(
                "expected an integer, got {value}"
            ))),
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match scalar(deserializer)? {
            None => Ok(0.0),
            Some(Scalar::Int(value)) => Ok(value as f64),
            Some(Scalar::Float(value)) => Ok(value),
            Some(Scalar::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| D::Error::custom(format!("expected a number, got {text:?}"))),
            Some(Scalar::Bool(value)) => {
                Err(D::Error::custom(format!("expected a number, got {value}")))
            }
        }
    }

    pub fn seats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = integer(deserializer)?;
        u32::try_from(value)
            .map_err(|_| D::Error::custom(format!("seat count out of range: {value}")))
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match scalar(deserializer)? {
            None => String::new(),
            Some(Scalar::Text(text)) => text,
            Some(Scalar::Int(value)) => value.to_string(),
            Some(Scalar::Float(value)) => value.to_string(),
            Some(Scalar::Bool(value)) => value.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
