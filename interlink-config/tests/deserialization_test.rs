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

use interlink_config::manifest::{ContractEntry, ManifestConfig};
use pretty_assertions::assert_eq;

#[test]
fn parses_manifest_with_comments() {
    let config: ManifestConfig = serde_json5::from_str(
        r#"{
            // Contracts published at startup.
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "system_clock",
                    interface: "interlink.clock",
                },
            ],
        }"#,
    )
    .expect("Manifest should parse");
    assert_eq!(
        config,
        ManifestConfig {
            contracts: vec![ContractEntry {
                contract: "@interlink/clock;1".to_string(),
                component: "system_clock".to_string(),
                interface: "interlink.clock".to_string(),
            }],
        }
    );
}

#[test]
fn missing_contracts_defaults_to_empty() {
    let config: ManifestConfig = serde_json5::from_str("{}").expect("Manifest should parse");
    assert_eq!(config, ManifestConfig { contracts: vec![] });
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<ManifestConfig, _> = serde_json5::from_str(
        r#"{
            contracts: [],
            servers: [],
        }"#,
    );
    assert!(result.is_err(), "Unknown field should be rejected");
}

#[test]
fn component_field_expands_env_vars() {
    // SAFETY: Env mutation is process global, but the variable name is
    // unique to this test so no other thread reads it.
    unsafe {
        std::env::set_var("INTERLINK_TEST_CLOCK_IMPL", "fast_clock");
    }
    let config: ManifestConfig = serde_json5::from_str(
        r#"{
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "${INTERLINK_TEST_CLOCK_IMPL}",
                    interface: "interlink.clock",
                },
            ],
        }"#,
    )
    .expect("Manifest should parse");
    assert_eq!(config.contracts[0].component, "fast_clock");
}

#[test]
fn unset_env_var_fails_parsing() {
    let result: Result<ManifestConfig, _> = serde_json5::from_str(
        r#"{
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "${INTERLINK_TEST_UNSET_VAR}",
                    interface: "interlink.clock",
                },
            ],
        }"#,
    );
    assert!(result.is_err(), "Unset env var should fail expansion");
}
