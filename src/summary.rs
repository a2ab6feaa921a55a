use std::fmt;

use chrono::NaiveDateTime;

use crate::measurement::{Measurement, SensorId, TIMESTAMP_FORMAT};

#[derive(Debug, Clone, PartialEq)]
pub struct SensorStats {
    pub sensor_id: SensorId,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub period: Option<(NaiveDateTime, NaiveDateTime)>,
    /// One entry per sensor, in order of first appearance.
    pub sensors: Vec<SensorStats>,
}

impl Summary {
    pub fn from_measurements(measurements: &[Measurement]) -> Summary {
        let period = measurements
            .iter()
            .map(|m| m.timestamp)
            .fold(None, |acc, ts| match acc {
                None => Some((ts, ts)),
                Some((lo, hi)) => Some((lo.min(ts), hi.max(ts))),
            });

        let mut sensors: Vec<(SensorStats, f64)> = Vec::new();
        for m in measurements {
            let value = m.value.as_f64();
            match sensors.iter_mut().find(|(s, _)| s.sensor_id == m.sensor_id) {
                Some((stats, sum)) => {
                    stats.count += 1;
                    stats.min = stats.min.min(value);
                    stats.max = stats.max.max(value);
                    *sum += value;
                }
                None => sensors.push((
                    SensorStats {
                        sensor_id: m.sensor_id,
                        count: 1,
                        mean: 0.0,
                        min: value,
                        max: value,
                    },
                    value,
                )),
            }
        }

        Summary {
            total: measurements.len(),
            period,
            sensors: sensors
                .into_iter()
                .map(|(stats, sum)| SensorStats {
                    mean: sum / stats.count as f64,
                    ..stats
                })
                .collect(),
        }
    }
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated data statistics:")?;
        writeln!(f, "   Total records: {}", thousands(self.total))?;
        if let Some((start, end)) = self.period {
            writeln!(
                f,
                "   Period: {} to {}",
                start.format(TIMESTAMP_FORMAT),
                end.format(TIMESTAMP_FORMAT)
            )?;
        }
        writeln!(f, "   Sensors: {} types", self.sensors.len())?;
        for s in &self.sensors {
            writeln!(f, "   {}:", s.sensor_id)?;
            writeln!(f, "      Mean: {:.2}", s.mean)?;
            writeln!(f, "      Min: {:.2}", s.min)?;
            writeln!(f, "      Max: {:.2}", s.max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(672), "672");
        assert_eq!(thousands(2016), "2,016");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_empty() {
        let summary = Summary::from_measurements(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.period, None);
        assert!(summary.sensors.is_empty());
    }

    #[test]
    fn test_stats_in_order_of_first_appearance() {
        let measurements = [
            Measurement::flag(at(9), SensorId::Occu01, 1),
            Measurement::continuous(at(9), SensorId::Temp01, 20.0),
            Measurement::flag(at(10), SensorId::Occu01, 0),
            Measurement::continuous(at(8), SensorId::Temp01, 23.0),
        ];
        let summary = Summary::from_measurements(&measurements);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.period, Some((at(8), at(10))));
        assert_eq!(
            summary.sensors,
            vec![
                SensorStats {
                    sensor_id: SensorId::Occu01,
                    count: 2,
                    mean: 0.5,
                    min: 0.0,
                    max: 1.0,
                },
                SensorStats {
                    sensor_id: SensorId::Temp01,
                    count: 2,
                    mean: 21.5,
                    min: 20.0,
                    max: 23.0,
                },
            ]
        );
    }

    #[test]
    fn test_display() {
        let measurements = [
            Measurement::continuous(at(12), SensorId::Lux01, 951.06),
            Measurement::continuous(at(13), SensorId::Lux01, 1000.0),
        ];
        let text = Summary::from_measurements(&measurements).to_string();

        assert!(text.contains("Total records: 2\n"));
        assert!(text.contains("Period: 2024-01-15 12:00:00 to 2024-01-15 13:00:00\n"));
        assert!(text.contains("Sensors: 1 types\n"));
        assert!(text.ends_with(
            "   LUX01:\n      Mean: 975.53\n      Min: 951.06\n      Max: 1000.00\n"
        ));
    }
}
