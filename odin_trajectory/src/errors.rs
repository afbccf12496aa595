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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinTrajectoryError>;

#[derive(Error,Debug)]
pub enum OdinTrajectoryError {

    #[error("invalid input {0}")]
    InvalidInput(String),

    #[error("invalid argument {0}")]
    InvalidArgument(String),

    #[error("empty track collection")]
    EmptyCollection,

    #[error("parse error {0}")]
    ParseError(String),

    #[error("chrono parse error {0}")]
    ChronoParseError( #[from] chrono::ParseError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! invalid_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::InvalidInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_input;

macro_rules! invalid_argument {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::InvalidArgument( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_argument;

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinTrajectoryError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
