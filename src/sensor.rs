use chrono::NaiveDateTime;

use crate::{
    measurement::{Measurement, SensorId},
    signal::{self, NoiseSource},
};

pub const PROGRESS_EVERY: usize = 100;

/// Simulated office sensor array: one thermometer, one lux meter, one presence detector.
#[derive(Debug)]
pub struct Sensor<N> {
    noise: N,
}

impl<N: NoiseSource> Sensor<N> {
    pub fn new(noise: N) -> Sensor<N> {
        Sensor { noise }
    }

    /// Reads all three sensors at `timestamp`, in TEMP01, LUX01, OCCU01 order.
    pub fn measure(&mut self, timestamp: NaiveDateTime) -> [Measurement; 3] {
        let temperature = signal::temperature(&timestamp, &mut self.noise);
        let illuminance = signal::illuminance(&timestamp, &mut self.noise);
        let occupancy = signal::occupancy(&timestamp, &mut self.noise);

        [
            Measurement::continuous(timestamp, SensorId::Temp01, temperature),
            Measurement::continuous(timestamp, SensorId::Lux01, illuminance),
            Measurement::flag(timestamp, SensorId::Occu01, occupancy),
        ]
    }

    pub fn simulate<I>(&mut self, instants: I) -> Vec<Measurement>
    where
        I: ExactSizeIterator<Item = NaiveDateTime>,
    {
        let total = instants.len();
        let mut measurements = Vec::with_capacity(total * 3);

        for (i, timestamp) in instants.enumerate() {
            if i % PROGRESS_EVERY == 0 {
                log::info!("Processing: {i}/{total} instants");
            }
            measurements.extend(self.measure(timestamp));
        }

        measurements
    }
}
