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

//! temporal queries over recorded aircraft tracks.
//!
//! A [`TrackCollection`] is built once from a complete batch of [`Track`]s (usually through the
//! [`io`] functions) and is read-only afterwards. The central query is
//! [`TrackCollection::latest_per_aircraft_within_window`], which returns the most recent position of
//! each aircraft within a time window that ends at the current playback time.

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::error!( $( $e ),* ) }
}

pub mod errors;
pub use errors::{OdinTrajectoryError,Result};

pub mod aircraft;
pub use aircraft::AircraftIdentity;

pub mod position;
pub use position::{PositionSample,ApproachSegment};

pub mod track;
pub use track::Track;

pub mod collection;
pub use collection::{TrackCollection,AircraftFix};

pub mod config;
pub use config::{PlaybackConfig,load_config};

pub mod playback;
pub use playback::{WindowMonitor,WindowReport,PlaybackClock};

pub mod io;
pub use io::{load_track_collection,track_collection_from_json};
