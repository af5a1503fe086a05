// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Recoverable errors
//!
//! Almost every failure inside the simulation is a broken contract (a full
//! entity table, a bad player index, a missing bitmap) and panics. The
//! errors here are the exceptions: configuration input that comes from a
//! file and can be corrected by whoever wrote it.

use thiserror::Error;

/// Errors surfaced at the configuration boundary
#[derive(Debug, Error)]
pub enum SimError {
    /// The RON document could not be parsed
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The `version` field is not a valid semantic version
    #[error("invalid config version '{version}': {source}")]
    InvalidVersion {
        /// Version string as written in the file
        version: String,
        /// Underlying semver error
        #[source]
        source: semver::Error,
    },

    /// The config was written for an incompatible format version
    #[error("config version {found} is incompatible with supported version {supported}")]
    IncompatibleVersion {
        /// Version found in the file
        found: String,
        /// Version this build understands
        supported: &'static str,
    },

    /// A tuning value is out of range
    #[error("invalid tuning value for {field}: {value}")]
    InvalidTuning {
        /// Name of the offending field
        field: &'static str,
        /// Value that failed validation
        value: f32,
    },

    /// A timestep is outside the range the integrator handles well
    #[error("suspicious timestep {0}")]
    SuspiciousTimestep(f32),
}
