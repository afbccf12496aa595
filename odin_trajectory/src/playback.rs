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

use crate::{AircraftFix, TrackCollection, PlaybackConfig};
use crate::errors::{OdinTrajectoryError,Result,invalid_argument};

/// caller side of per-aircraft window queries for a playback clock that ticks more often than its
/// time advances. Queries are only executed if the playback time changed since the last update
#[derive(Debug,Clone)]
pub struct WindowMonitor {
    window: TimeDelta,
    last_time: Option<DateTime<Utc>>,
}

impl WindowMonitor {
    pub fn new (window: TimeDelta)->Result<Self> {
        if window < TimeDelta::zero() {
            return Err( invalid_argument!("negative window duration {}", window))
        }
        Ok( WindowMonitor { window, last_time: None } )
    }

    pub fn from_config (config: &PlaybackConfig)->Result<Self> {
        WindowMonitor::new( config.window_delta()?)
    }

    pub fn window (&self)->TimeDelta { self.window }
    pub fn last_time (&self)->Option<DateTime<Utc>> { self.last_time }

    /// forget the last processed time so that the next update always queries
    pub fn reset (&mut self) { self.last_time = None; }

    /// return a new report if `time` differs from the last processed time, `None` otherwise
    pub fn update<'a> (&mut self, tracks: &'a TrackCollection, time: DateTime<Utc>)->Result<Option<WindowReport<'a>>> {
        if self.last_time == Some(time) {
            return Ok(None)
        }

        let mut fixes = tracks.latest_per_aircraft_within_window( time, self.window)?;
        fixes.sort_by( |a, b| a.physical_id().cmp( b.physical_id()));
        self.last_time = Some(time);

        Ok( Some( WindowReport { time, window: self.window, fixes }) )
    }
}

/// the aircraft positions for one playback time, sorted by physical id
#[derive(Debug,Clone)]
pub struct WindowReport<'a> {
    pub time: DateTime<Utc>,
    pub window: TimeDelta,
    pub fixes: Vec<AircraftFix<'a>>,
}

impl<'a> WindowReport<'a> {
    pub fn len (&self)->usize { self.fixes.len() }
    pub fn is_empty (&self)->bool { self.fixes.is_empty() }

    pub fn get (&self, physical_id: &str)->Option<&AircraftFix<'a>> {
        self.fixes.iter().find( |f| f.physical_id() == physical_id)
    }
}

impl<'a> fmt::Display for WindowReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!( f, "As of {}, {} aircraft seen in last {} seconds:", self.time.to_rfc3339(), self.fixes.len(), self.window.num_milliseconds() as f64 / 1000.0)?;
        for fix in &self.fixes {
            writeln!( f, "  {fix}")?;
        }
        Ok(())
    }
}

/// a simulated playback clock that steps from `start` to `end` (both inclusive) in fixed increments
#[derive(Debug,Clone)]
pub struct PlaybackClock {
    next: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
    step: TimeDelta,
}

impl PlaybackClock {
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>, step: TimeDelta)->Result<Self> {
        if step <= TimeDelta::zero() {
            return Err( invalid_argument!("playback step has to be positive: {}", step))
        }
        let next = if start <= end { Some(start) } else { None };
        debug!("playback clock {} .. {} with step {}", start, end, step);

        Ok( PlaybackClock { next, end, step } )
    }
}

impl Iterator for PlaybackClock {
    type Item = DateTime<Utc>;

    fn next (&mut self)->Option<Self::Item> {
        let t = self.next?;
        self.next = t.checked_add_signed( self.step).filter( |tn| *tn <= self.end);
        Some(t)
    }
}
