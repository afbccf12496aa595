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

//! ingestion of track data from the JSON trajectory format, which is an array of per-aircraft records:
//! ```text
//! [ { "icao24": "abc123", "callsign": "..", "category": "..",
//!     "positions": {
//!        "2023-01-01T00:00:01Z": { "longitude": 1.1, "latitude": 2.2, "altitude": 3.3, "onGround": false, .. },
//!        ..
//!     }
//!   }, ..
//! ]
//! ```
//! Each record becomes one [`Track`]. Records are not merged even if they have the same `icao24`.

use std::{fs::File, io::{BufReader,Read}, path::Path};
use chrono::{DateTime,NaiveDateTime,Utc};
use serde::{Serialize,Deserialize};
use serde_with::{serde_as,Map};
use uom::si::{f64::{Length,Velocity}, length::meter, velocity::meter_per_second};

use crate::{AircraftIdentity, ApproachSegment, PositionSample, Track, TrackCollection};
use crate::errors::{OdinTrajectoryError,Result,invalid_input,parse_error};

/// the wire representation of one track. Positions are kept in document order, including repeated
/// timestamp keys. Of several entries for the same instant the first one in the document is kept when
/// the track is tidied (a plain JSON object parse would keep the last one instead)
#[serde_as]
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TrackRecord {
    pub icao24: String,
    pub callsign: Option<String>,
    pub category: Option<String>,

    #[serde_as(as = "Map<_,_>")]
    pub positions: Vec<(String,PositionRecord)>,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64, // meters
    pub on_ground: Option<bool>,
    pub velocity: Option<f64>, // m/s
    pub true_track: Option<f64>, // degrees
    pub vertical_rate: Option<f64>, // m/s
    pub squawk: Option<String>,
    pub approach_segment: Option<ApproachSegmentRecord>,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachSegmentRecord {
    pub airport: String,
    pub threshold: String,
    pub threshold_distance_meters: f64,
    pub vertical_dev_meters: f64,
    pub horizontal_dev_meters: f64,
    pub normalized_euclidean_distance: f64,
}

impl From<ApproachSegmentRecord> for ApproachSegment {
    fn from (r: ApproachSegmentRecord)->Self {
        ApproachSegment {
            airport: r.airport,
            threshold: r.threshold,
            threshold_distance: Length::new::<meter>( r.threshold_distance_meters),
            vertical_dev: Length::new::<meter>( r.vertical_dev_meters),
            horizontal_dev: Length::new::<meter>( r.horizontal_dev_meters),
            normalized_euclidean_distance: r.normalized_euclidean_distance,
        }
    }
}

impl PositionRecord {
    pub fn into_sample (self, time: DateTime<Utc>)->PositionSample {
        PositionSample {
            time,
            longitude: self.longitude,
            latitude: self.latitude,
            altitude: Length::new::<meter>( self.altitude),
            on_ground: self.on_ground,
            velocity: self.velocity.map( Velocity::new::<meter_per_second>),
            true_track: self.true_track,
            vertical_rate: self.vertical_rate.map( Velocity::new::<meter_per_second>),
            squawk: self.squawk,
            approach_segment: self.approach_segment.map( ApproachSegment::from),
        }
    }
}

impl TrackRecord {
    pub fn identity (&self)->AircraftIdentity {
        AircraftIdentity::new( self.icao24.as_str(), self.callsign.clone(), self.category.clone())
    }

    pub fn into_track (self)->Result<Track> {
        if self.positions.is_empty() {
            return Err( invalid_input!("empty positions for {}", self.icao24))
        }

        let identity = self.identity();
        let mut samples: Vec<PositionSample> = Vec::with_capacity( self.positions.len());
        for (ts, pos) in self.positions {
            let time = parse_timestamp( &ts).map_err( |_| parse_error!("invalid timestamp '{}' for {}", ts, self.icao24))?;
            samples.push( pos.into_sample( time));
        }

        Track::new( identity, samples)
    }
}

// ISO-8601 layouts not covered by RFC 3339 (minute precision, basic format, offsets without colon)
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// parse ISO-8601 timestamps in extended or basic format. Values without timezone offset are UTC
pub fn parse_timestamp (s: &str)->Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339( s) {
        return Ok( dt.to_utc())
    }

    if let Some(dt) = OFFSET_LAYOUTS.iter().find_map( |layout| DateTime::parse_from_str( s, layout).ok()) {
        return Ok( dt.to_utc())
    }

    let dt = NAIVE_LAYOUTS[1..].iter().fold( NaiveDateTime::parse_from_str( s, NAIVE_LAYOUTS[0]), |res, layout| {
        res.or_else( |_| NaiveDateTime::parse_from_str( s, layout))
    });
    Ok( dt?.and_utc())
}

pub fn parse_track_records (json: &str)->Result<Vec<TrackRecord>> {
    Ok( serde_json::from_str( json)? )
}

pub fn track_collection_from_records (records: Vec<TrackRecord>)->Result<TrackCollection> {
    records.into_iter().map( |r| r.into_track()).collect::<Result<TrackCollection>>()
}

pub fn track_collection_from_json (json: &str)->Result<TrackCollection> {
    track_collection_from_records( parse_track_records( json)?)
}

pub fn track_collection_from_reader<R: Read> (reader: R)->Result<TrackCollection> {
    let records: Vec<TrackRecord> = serde_json::from_reader( BufReader::new( reader))?;
    track_collection_from_records( records)
}

pub fn load_track_collection<P: AsRef<Path>> (path: P)->Result<TrackCollection> {
    let path = path.as_ref();
    let tracks = track_collection_from_reader( File::open( path)?)?;
    info!("loaded {} tracks of {} aircraft from {:?}", tracks.len(), tracks.physical_ids().len(), path);
    Ok(tracks)
}
