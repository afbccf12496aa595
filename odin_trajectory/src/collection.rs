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

use std::{fmt, slice};
use chrono::{DateTime,TimeDelta,Utc};
use hashbrown::{HashMap,HashSet};

use crate::{AircraftIdentity, PositionSample, Track, track::window_start};
use crate::errors::{OdinTrajectoryError,Result};

/// the result record of a per-aircraft window query: the latest sample of an aircraft within the
/// window, together with the track it came from
#[derive(Debug,Clone,Copy)]
pub struct AircraftFix<'a> {
    pub track: &'a Track,
    pub sample: &'a PositionSample,
}

impl<'a> AircraftFix<'a> {
    pub fn identity (&self)->&'a AircraftIdentity { self.track.identity() }
    pub fn physical_id (&self)->&'a str { self.track.physical_id() }
    pub fn time (&self)->DateTime<Utc> { self.sample.time }
}

impl<'a> fmt::Display for AircraftFix<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} {}", self.physical_id(), self.sample.time.to_rfc3339())
    }
}

/// the read-only set of all tracks of a loaded dataset.
///
/// Tracks are kept in the order in which they were supplied. The same aircraft can have several
/// tracks (e.g. for disjoint recording sessions), which are only associated by their physical id
/// when computing per-aircraft results
#[derive(Debug,Clone,Default)]
pub struct TrackCollection {
    tracks: Vec<Track>,
}

impl TrackCollection {
    pub fn new (tracks: Vec<Track>)->Self {
        TrackCollection { tracks }
    }

    pub fn tracks (&self)->&[Track] { self.tracks.as_slice() }
    pub fn iter (&self)->slice::Iter<'_,Track> { self.tracks.iter() }
    pub fn len (&self)->usize { self.tracks.len() }
    pub fn is_empty (&self)->bool { self.tracks.is_empty() }

    /// all tracks of the aircraft with the given physical id, in collection order
    pub fn tracks_of<'a> (&'a self, physical_id: &'a str)->impl Iterator<Item=&'a Track> + 'a {
        self.tracks.iter().filter( move |t| t.physical_id() == physical_id)
    }

    /// distinct physical ids in order of first appearance
    pub fn physical_ids (&self)->Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::with_capacity( self.tracks.len());
        self.tracks.iter().map( |t| t.physical_id()).filter( |id| seen.insert(*id)).collect()
    }

    pub fn earliest_time (&self)->Result<DateTime<Utc>> {
        self.tracks.iter().map( |t| t.earliest_time()).min().ok_or( OdinTrajectoryError::EmptyCollection)
    }

    pub fn latest_time (&self)->Result<DateTime<Utc>> {
        self.tracks.iter().map( |t| t.latest_time()).max().ok_or( OdinTrajectoryError::EmptyCollection)
    }

    pub fn time_range (&self)->Result<(DateTime<Utc>,DateTime<Utc>)> {
        Ok( (self.earliest_time()?, self.latest_time()?) )
    }

    /// the latest sample of each aircraft within the time window `[end_time - duration, end_time]` (both
    /// bounds inclusive).
    ///
    /// Aircraft without any track that intersects the window are not included. If an aircraft has several
    /// tracks intersecting the window it is represented by the one with the latest sample. Which of several
    /// equally-latest tracks is reported is unspecified. The order of the returned fixes is unspecified, callers
    /// that need a stable order have to sort the result
    pub fn latest_per_aircraft_within_window (&self, end_time: DateTime<Utc>, duration: TimeDelta)->Result<Vec<AircraftFix<'_>>> {
        window_start( end_time, duration)?; // reject invalid windows even if there are no tracks
        let mut latest: HashMap<&str,AircraftFix<'_>> = HashMap::new();

        for track in &self.tracks {
            if let Some(sample) = track.latest_within_window( end_time, duration)? {
                let fix = AircraftFix { track, sample };
                latest.entry( track.physical_id())
                    .and_modify( |best| if sample.time > best.sample.time { *best = fix })
                    .or_insert( fix);
            }
        }

        debug!("{} aircraft within {} of {}", latest.len(), duration, end_time);
        Ok( latest.into_values().collect() )
    }
}

impl FromIterator<Track> for TrackCollection {
    fn from_iter<I: IntoIterator<Item=Track>> (iter: I)->Self {
        TrackCollection::new( iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TrackCollection {
    type Item = &'a Track;
    type IntoIter = slice::Iter<'a,Track>;

    fn into_iter (self)->Self::IntoIter { self.tracks.iter() }
}
