use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensorId {
    #[serde(rename = "TEMP01")]
    Temp01,
    #[serde(rename = "LUX01")]
    Lux01,
    #[serde(rename = "OCCU01")]
    Occu01,
}

impl SensorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorId::Temp01 => "TEMP01",
            SensorId::Lux01 => "LUX01",
            SensorId::Occu01 => "OCCU01",
        }
    }
}

impl std::fmt::Display for SensorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a reading. Occupancy is a flag and is never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Continuous(f64),
    Flag(u8),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Continuous(v) => v,
            Value::Flag(v) => f64::from(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub sensor_id: SensorId,
    pub value: Value,
}

impl Measurement {
    pub fn continuous(timestamp: NaiveDateTime, sensor_id: SensorId, value: f64) -> Self {
        Self {
            timestamp,
            sensor_id,
            value: Value::Continuous(round2(value)),
        }
    }

    pub fn flag(timestamp: NaiveDateTime, sensor_id: SensorId, value: u8) -> Self {
        Self {
            timestamp,
            sensor_id,
            value: Value::Flag(value),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
