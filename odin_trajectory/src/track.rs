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
use chrono::{DateTime,TimeDelta,Utc};

use crate::{AircraftIdentity, PositionSample};
use crate::errors::{OdinTrajectoryError,Result,invalid_input,invalid_argument};

/// the positions of one aircraft over one continuous recording session.
///
/// Samples are kept in strictly ascending time order with at most one sample per instant. This is
/// established once when the Track is created and never changes afterwards - there is no API to
/// modify the samples of an existing Track
#[derive(Debug,Clone)]
pub struct Track {
    identity: AircraftIdentity,
    samples: Vec<PositionSample>, // tidied, never empty
}

impl Track {
    /// create a Track from samples that can be in any order and can contain several samples for the
    /// same instant. Of samples with equal timestamps the one that comes first in `samples` is kept
    pub fn new (identity: AircraftIdentity, samples: Vec<PositionSample>)->Result<Self> {
        if samples.is_empty() {
            return Err( invalid_input!("no position samples for track of {}", identity.physical_id()))
        }

        let n_input = samples.len();
        let samples = tidy_samples( samples);
        if samples.len() < n_input {
            debug!("dropped {} duplicate samples of {}", n_input - samples.len(), identity.physical_id());
        }

        Ok( Track { identity, samples } )
    }

    pub fn identity (&self)->&AircraftIdentity { &self.identity }
    pub fn physical_id (&self)->&str { self.identity.physical_id() }

    /// the full ordered history, e.g. to build an interpolated position property for rendering
    pub fn samples (&self)->&[PositionSample] { self.samples.as_slice() }

    pub fn len (&self)->usize { self.samples.len() }

    pub fn first_sample (&self)->&PositionSample { &self.samples[0] }
    pub fn last_sample (&self)->&PositionSample { &self.samples[self.samples.len()-1] }

    pub fn earliest_time (&self)->DateTime<Utc> { self.first_sample().time }
    pub fn latest_time (&self)->DateTime<Utc> { self.last_sample().time }

    pub fn time_range (&self)->(DateTime<Utc>,DateTime<Utc>) { (self.earliest_time(), self.latest_time()) }

    /// the latest sample within the time window `[end_time - duration, end_time]`, or `None` if the track does
    /// not intersect this window. Both window bounds are inclusive
    pub fn latest_within_window (&self, end_time: DateTime<Utc>, duration: TimeDelta)->Result<Option<&PositionSample>> {
        let start_time = window_start( end_time, duration)?;

        let idx = self.samples.partition_point( |s| s.time <= end_time);
        if idx > 0 {
            let s = &self.samples[idx-1];
            if s.time >= start_time {
                return Ok( Some(s))
            }
        }
        Ok(None)
    }

    /// all samples within the inclusive time window `[end_time - duration, end_time]`, in ascending time order
    pub fn samples_within_window (&self, end_time: DateTime<Utc>, duration: TimeDelta)->Result<&[PositionSample]> {
        let start_time = window_start( end_time, duration)?;

        let lo = self.samples.partition_point( |s| s.time < start_time);
        let hi = self.samples.partition_point( |s| s.time <= end_time);
        if lo < hi { Ok( &self.samples[lo..hi] ) } else { Ok( &[] ) }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Track( id: {}, n_pos: {}, start: {}, end: {})", self.physical_id(), self.len(), self.earliest_time(), self.latest_time())
    }
}

/// stable sort by time, then keep the first of each run of equal-time samples
fn tidy_samples (mut samples: Vec<PositionSample>)->Vec<PositionSample> {
    samples.sort_by_key( |s| s.time);
    samples.dedup_by( |s, s_prev| s.is_same_instant(s_prev));
    samples
}

/// the (inclusive) lower bound of a query window. Windows reaching before the representable time range
/// are clamped to its minimum
pub(crate) fn window_start (end_time: DateTime<Utc>, duration: TimeDelta)->Result<DateTime<Utc>> {
    if duration < TimeDelta::zero() {
        return Err( invalid_argument!("negative window duration {}", duration))
    }
    Ok( end_time.checked_sub_signed( duration).unwrap_or( DateTime::<Utc>::MIN_UTC))
}
