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

use std::{fs, path::Path, time::Duration};
use chrono::TimeDelta;
use serde::{Deserialize,Deserializer,Serialize,Serializer};

use crate::errors::{OdinTrajectoryError,Result,invalid_argument};

/// playback parameters. Durations are given as human readable strings such as "60s" or "5min"
/// ```text
/// PlaybackConfig(
///     window: "60s",
///     step: "1s",
/// )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PlaybackConfig {
    /// how far back from the playback time we consider positions to be current
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub window: Duration,

    /// playback clock increment for replays
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub step: Duration,
}

impl Default for PlaybackConfig {
    fn default()->Self {
        PlaybackConfig { window: Duration::from_secs(60), step: Duration::from_secs(1) }
    }
}

impl PlaybackConfig {
    pub fn window_delta (&self)->Result<TimeDelta> { to_time_delta( self.window) }
    pub fn step_delta (&self)->Result<TimeDelta> { to_time_delta( self.step) }
}

pub fn to_time_delta (dur: Duration)->Result<TimeDelta> {
    TimeDelta::from_std( dur).map_err( |_| invalid_argument!("duration out of range: {:?}", dur))
}

pub fn parse_playback_config (s: &str)->Result<PlaybackConfig> {
    Ok( ron::from_str( s)? )
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<PlaybackConfig> {
    let s = fs::read_to_string( path)?;
    parse_playback_config( &s)
}

pub fn deserialize_duration <'a,D>(deserializer: D) -> std::result::Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse_duration::parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>  {
    s.serialize_str( &format!("{}s", dur.as_secs_f64()))
}
