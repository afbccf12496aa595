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

use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use odin_trajectory::{
    info, load_config, load_track_collection, PlaybackClock, PlaybackConfig, WindowMonitor,
    io::parse_timestamp
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "replay recorded aircraft tracks and report the latest positions per aircraft")]
pub struct Args {
    /// pathname of RON playback config
    #[arg(short,long)]
    pub config: Option<String>,

    /// position window (e.g. "60s"), overrides config
    #[arg(short,long, value_parser = parse_duration::parse)]
    pub window: Option<Duration>,

    /// playback clock step (e.g. "10s"), overrides config
    #[arg(short,long, value_parser = parse_duration::parse)]
    pub step: Option<Duration>,

    /// only report positions at this (ISO-8601) time
    #[arg(short,long)]
    pub at: Option<String>,

    /// pathname of JSON trajectory file
    pub path: String,
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let mut config: PlaybackConfig = if let Some(path) = &args.config { load_config( path)? } else { PlaybackConfig::default() };
    if let Some(window) = args.window { config.window = window; }
    if let Some(step) = args.step { config.step = step; }

    let tracks = load_track_collection( &args.path)?;
    let (start, end) = tracks.time_range()?;
    info!("replaying {} .. {} with window {:?}", start, end, config.window);

    let mut monitor = WindowMonitor::from_config( &config)?;

    if let Some(at) = &args.at {
        let time = parse_timestamp( at)?;
        if let Some(report) = monitor.update( &tracks, time)? {
            print!("{report}");
        }
    } else {
        for time in PlaybackClock::new( start, end, config.step_delta()?)? {
            if let Some(report) = monitor.update( &tracks, time)? {
                print!("{report}");
            }
        }
    }

    Ok(())
}
