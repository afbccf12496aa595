/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fmt;
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use uom::si::{f64::{Length,Velocity}, length::meter, velocity::meter_per_second};

/// geometry of an aircraft position relative to the approach path of a runway threshold
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ApproachSegment {
    pub airport: String,
    pub threshold: String,
    pub threshold_distance: Length,
    pub vertical_dev: Length,
    pub horizontal_dev: Length,
    pub normalized_euclidean_distance: f64,
}

/// a single timestamped observation of an aircraft.
///
/// Samples are immutable value types - once they are stored in a [`crate::Track`] there is no way to
/// obtain mutable access. Optional attributes are `None` if the source did not report them, which is
/// distinct from a reported zero value
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PositionSample {
    pub time: DateTime<Utc>,

    pub longitude: f64, // degrees
    pub latitude: f64,  // degrees
    pub altitude: Length,

    pub on_ground: Option<bool>,
    pub velocity: Option<Velocity>,
    pub true_track: Option<f64>, // degrees clockwise from north
    pub vertical_rate: Option<Velocity>,
    pub squawk: Option<String>,
    pub approach_segment: Option<ApproachSegment>,
}

impl PositionSample {
    /// a sample with only the required position attributes set
    pub fn new (time: DateTime<Utc>, longitude: f64, latitude: f64, altitude: Length)->Self {
        PositionSample {
            time, longitude, latitude, altitude,
            on_ground: None,
            velocity: None,
            true_track: None,
            vertical_rate: None,
            squawk: None,
            approach_segment: None,
        }
    }

    pub fn from_lon_lat_degrees_alt_meters (time: DateTime<Utc>, longitude: f64, latitude: f64, altitude: f64)->Self {
        PositionSample::new( time, longitude, latitude, Length::new::<meter>(altitude))
    }

    /// same instant means equal timestamps, regardless of the other attributes
    #[inline]
    pub fn is_same_instant (&self, other: &PositionSample)->bool { self.time == other.time }
}

impl fmt::Display for PositionSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Position( time: {}, lon: {:.5}, lat: {:.5}, alt: {:.0}", self.time, self.longitude, self.latitude, self.altitude.get::<meter>())?;
        if let Some(og) = self.on_ground { write!( f, ", gnd: {og}")?; }
        if let Some(spd) = self.velocity { write!( f, ", spd: {:.1}", spd.get::<meter_per_second>())?; }
        if let Some(trk) = self.true_track { write!( f, ", trk: {trk:.0}")?; }
        if let Some(vr) = self.vertical_rate { write!( f, ", vr: {:.1}", vr.get::<meter_per_second>())?; }
        if let Some(sq) = &self.squawk { write!( f, ", sqk: {sq}")?; }
        if let Some(seg) = &self.approach_segment { write!( f, ", appr: {}/{}", seg.airport, seg.threshold)?; }
        write!( f, ")")
    }
}
