// Copyright 2025 The Interlink Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use interlink_error::{Error, ResultExt};
use serde::Deserialize;

use crate::serde_utils::convert_string_with_shellexpand;

/// Contract alias table applied to a registry at startup.
///
/// **Example JSON5 Manifest:**
/// ```json5
/// {
///   contracts: [
///     {
///       contract: "@interlink/clock;1",
///       component: "system_clock",
///       interface: "interlink.clock",
///     },
///   ],
/// }
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    /// Contract entries to publish into the registry.
    #[serde(default)]
    pub contracts: Vec<ContractEntry>,
}

/// A single contract alias: a location independent name under which a
/// (component, interface) pair is published.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContractEntry {
    /// The contract identifier, eg `@interlink/clock;1`.
    pub contract: String,

    /// Name of the registered component the contract points at.
    /// Supports env expansion so deployments can swap implementations,
    /// eg `${CLOCK_IMPL}`.
    #[serde(deserialize_with = "convert_string_with_shellexpand")]
    pub component: String,

    /// Interface identifier resolved on the component.
    pub interface: String,
}

impl ManifestConfig {
    /// # Errors
    ///
    /// Will return `Err` if we can't load or parse the file.
    pub fn try_from_json5_file(config_file: &str) -> Result<Self, Error> {
        let json_contents = std::fs::read_to_string(config_file)
            .err_tip(|| format!("Could not open manifest file {config_file}"))?;
        Ok(serde_json5::from_str(&json_contents)?)
    }
}
