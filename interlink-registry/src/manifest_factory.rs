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

use std::sync::Arc;

use interlink_config::manifest::ManifestConfig;
use interlink_error::{Error, ResultExt};
use tracing::{Level, event};

use crate::contract_id::ContractId;
use crate::interface_id::InterfaceId;
use crate::registry::ComponentRegistry;

/// Applies a parsed manifest to a registry: every contract entry is validated
/// and published. Components and interfaces referenced by the manifest must
/// already be registered in code; the manifest only wires the aliases.
///
/// Fails on the first bad entry, leaving earlier entries applied. Manifests
/// are applied at startup, so a partial application is a startup failure.
pub fn apply_manifest(
    config: &ManifestConfig,
    registry: &Arc<ComponentRegistry>,
) -> Result<(), Error> {
    for entry in &config.contracts {
        let contract = ContractId::new(entry.contract.clone())
            .err_tip(|| format!("While parsing contract id '{}'", entry.contract))?;
        let iid = InterfaceId::new(entry.interface.clone())
            .err_tip(|| format!("While parsing interface id '{}'", entry.interface))?;
        registry
            .register_contract(contract, &entry.component, iid)
            .err_tip(|| format!("While applying manifest entry for component '{}'", entry.component))?;
    }
    event!(
        Level::INFO,
        contracts = config.contracts.len(),
        "Applied manifest to registry"
    );
    Ok(())
}
