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

#![allow(unused)]

use chrono::{DateTime,TimeDelta,Utc};
use uom::si::{length::meter, velocity::meter_per_second};
use odin_trajectory::{io::{self,parse_timestamp}, load_track_collection, track_collection_from_json, OdinTrajectoryError};

fn t (s: &str)->DateTime<Utc> { parse_timestamp(s).unwrap() }

// run with "cargo test test_window_scenario -- --nocapture"

#[test]
fn test_window_scenario () {
    let tracks = load_track_collection("resources/trajectories.json").unwrap();
    for track in &tracks { println!("{track}"); }
    assert_eq!( tracks.len(), 5);

    assert_eq!( tracks.earliest_time().unwrap(), t("2023-01-01T00:00:01Z"));
    assert_eq!( tracks.latest_time().unwrap(), t("2023-01-03T00:01:01Z"));

    // 23h59min: 2023-01-01T00:01:01Z to 2023-01-02T00:00:01Z
    let fixes = tracks.latest_per_aircraft_within_window( t("2023-01-02T00:00:01Z"), TimeDelta::seconds(23*3600 + 59*60)).unwrap();
    for fix in &fixes { println!("  {fix}"); }

    assert_eq!( fixes.len(), 3); // no jkl012, its track is later than the window
    let has_fix = |id: &str, time: &str| fixes.iter().any( |f| f.physical_id() == id && f.time() == t(time));
    assert!( has_fix( "abc123", "2023-01-01T00:01:01Z"));
    assert!( has_fix( "def456", "2023-01-02T00:00:01Z"));
    assert!( has_fix( "ghi789", "2023-01-01T00:05:01Z"));

    let ghi = fixes.iter().find( |f| f.physical_id() == "ghi789").unwrap();
    let seg = ghi.sample.approach_segment.as_ref().unwrap();
    assert_eq!( seg.airport, "KSFO");
    assert_eq!( seg.threshold_distance.get::<meter>(), 5400.0);
}

#[test]
fn test_record_conversion () {
    let tracks = load_track_collection("resources/trajectories.json").unwrap();

    let def = &tracks.tracks()[0];
    assert_eq!( def.physical_id(), "def456");
    assert_eq!( def.identity().callsign(), Some("DLH4AB"));
    assert_eq!( def.identity().category(), Some("A3"));

    let abc = &tracks.tracks()[1];
    assert_eq!( abc.identity().callsign(), None);
    let s = abc.samples();
    assert_eq!( s.len(), 2);
    assert_eq!( s[0].time, t("2023-01-01T00:00:01Z")); // supplied second, but chronologically first
    assert_eq!( (s[0].longitude, s[0].latitude), (1.1, 2.2));
    assert_eq!( s[0].altitude.get::<meter>(), 3.3);
    assert_eq!( s[0].on_ground, Some(true));
    assert_eq!( s[0].velocity, None);

    assert_eq!( s[1].on_ground, Some(false));
    assert_eq!( s[1].velocity.map( |v| v.get::<meter_per_second>()), Some(120.5));
    assert_eq!( s[1].true_track, Some(270.0));
    assert_eq!( s[1].squawk.as_deref(), Some("7000"));
}

#[test]
fn test_same_instant_keys () {
    // different strings for the same instant, the first one in document order is kept
    let json = r#"[
        { "icao24": "abc123", "positions": {
            "2023-01-01T00:00:02Z":     { "longitude": 1.0, "latitude": 0.0, "altitude": 0.0 },
            "2023-01-01T01:00:01+01:00": { "longitude": 2.0, "latitude": 0.0, "altitude": 0.0 },
            "2023-01-01T00:00:01Z":     { "longitude": 3.0, "latitude": 0.0, "altitude": 0.0 }
        }}
    ]"#;
    let tracks = track_collection_from_json( json).unwrap();
    let s = tracks.tracks()[0].samples();
    assert_eq!( s.len(), 2);
    assert_eq!( s[0].longitude, 2.0);
    assert_eq!( s[1].longitude, 1.0);
}

#[test]
fn test_iso8601_variants () {
    let json = r#"[
        { "icao24": "abc123", "positions": {
            "20230101T000001Z":  { "longitude": 1.0, "latitude": 0.0, "altitude": 0.0 },
            "2023-01-01T00:02Z": { "longitude": 2.0, "latitude": 0.0, "altitude": 0.0 },
            "20230101T0103+0100": { "longitude": 3.0, "latitude": 0.0, "altitude": 0.0 }
        }}
    ]"#;
    let tracks = track_collection_from_json( json).unwrap();
    let s = tracks.tracks()[0].samples();
    assert_eq!( s.len(), 3);
    assert_eq!( s[0].time, t("2023-01-01T00:00:01Z"));
    assert_eq!( s[1].time, t("2023-01-01T00:02:00Z"));
    assert_eq!( s[2].time, t("2023-01-01T00:03:00Z"));
}

#[test]
fn test_repeated_keys () {
    // repeated keys are not collapsed by the JSON reader, the first entry in the document wins
    let json = r#"[
        { "icao24": "abc123", "positions": {
            "2023-01-01T00:00:01Z": { "longitude": 1.0, "latitude": 0.0, "altitude": 0.0 },
            "2023-01-01T00:00:01Z": { "longitude": 2.0, "latitude": 0.0, "altitude": 0.0 }
        }}
    ]"#;
    let tracks = track_collection_from_json( json).unwrap();
    let s = tracks.tracks()[0].samples();
    assert_eq!( s.len(), 1);
    assert_eq!( s[0].longitude, 1.0);
}

#[test]
fn test_records_not_merged () {
    let json = r#"[
        { "icao24": "abc123", "positions": { "2023-01-01T00:00:01Z": { "longitude": 1.0, "latitude": 0.0, "altitude": 0.0 } } },
        { "icao24": "abc123", "positions": { "2023-01-01T00:00:01Z": { "longitude": 2.0, "latitude": 0.0, "altitude": 0.0 } } }
    ]"#;
    let tracks = track_collection_from_json( json).unwrap();
    assert_eq!( tracks.len(), 2);
    assert_eq!( tracks.physical_ids(), vec!["abc123"]);
}

#[test]
fn test_invalid_input () {
    let json = r#"[ { "icao24": "abc123", "positions": {} } ]"#;
    assert!( matches!( track_collection_from_json( json), Err(OdinTrajectoryError::InvalidInput(_))));

    let json = r#"[ { "icao24": "abc123", "positions": { "noon": { "longitude": 1.0, "latitude": 0.0, "altitude": 0.0 } } } ]"#;
    assert!( matches!( track_collection_from_json( json), Err(OdinTrajectoryError::ParseError(_))));

    let json = r#"[ { "icao24": "abc123", "positions": { "2023-01-01T00:00:01Z": { "longitude": 1.0 } } } ]"#;
    assert!( matches!( track_collection_from_json( json), Err(OdinTrajectoryError::JsonError(_))));

    assert!( matches!( load_track_collection("resources/no_such_file.json"), Err(OdinTrajectoryError::IOError(_))));
}

#[test]
fn test_empty_dataset () {
    let tracks = track_collection_from_json("[]").unwrap();
    assert!( tracks.is_empty());
    assert!( tracks.time_range().is_err());
}
