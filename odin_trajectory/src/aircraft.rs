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

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize};

/// the identity of an aircraft as it was observed on a track. This combines the fixed attributes
/// of the aircraft (physical id, category) with operational ones (callsign).
///
/// The physical id (the ICAO 24bit transponder address for ADS-B sources) is the key that
/// associates different tracks of the same aircraft. We keep it in an Arc so that identities
/// and query results can be cloned without heap allocation
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct AircraftIdentity {
    physical_id: Arc<str>,
    callsign: Option<String>,
    category: Option<String>,
}

impl AircraftIdentity {
    pub fn new (physical_id: impl Into<Arc<str>>, callsign: Option<String>, category: Option<String>)->Self {
        AircraftIdentity { physical_id: physical_id.into(), callsign, category }
    }

    pub fn from_physical_id (physical_id: impl Into<Arc<str>>)->Self {
        AircraftIdentity::new( physical_id, None, None)
    }

    pub fn physical_id (&self)->&str { &self.physical_id }
    pub fn shared_physical_id (&self)->Arc<str> { self.physical_id.clone() }
    pub fn callsign (&self)->Option<&str> { self.callsign.as_deref() }
    pub fn category (&self)->Option<&str> { self.category.as_deref() }
}

impl fmt::Display for AircraftIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( id: {}", self.physical_id)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{cs}\"")?; }
        if let Some(cat) = &self.category { write!( f, ", cat: {cat}")?; }
        write!( f, ")")
    }
}
