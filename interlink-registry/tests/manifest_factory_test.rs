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

use core::any::Any;
use std::sync::Arc;

use interlink_config::manifest::ManifestConfig;
use interlink_error::{Code, Error, make_input_err};
use interlink_registry::component::Component;
use interlink_registry::contract_id::ContractId;
use interlink_registry::interface_id::InterfaceId;
use interlink_registry::manifest_factory::apply_manifest;
use interlink_registry::registry::ComponentRegistry;
use pretty_assertions::assert_eq;

trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

struct FixedClock {
    millis: u64,
}

impl Component for FixedClock {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync + 'static> {
        self
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis
    }
}

fn clock_iid() -> InterfaceId {
    InterfaceId::new("interlink.test.clock").unwrap()
}

fn setup_registry() -> Result<Arc<ComponentRegistry>, Error> {
    let registry = Arc::new(ComponentRegistry::new());
    registry.register_interface::<FixedClock, dyn Clock>(clock_iid(), |c| c)?;
    registry.register_component("system_clock", Arc::new(FixedClock { millis: 42 }))?;
    Ok(registry)
}

#[test]
fn apply_manifest_publishes_contracts() -> Result<(), Error> {
    let registry = setup_registry()?;
    let config: ManifestConfig = serde_json5::from_str(
        r#"{
            // Wires the clock service to whatever implementation is
            // registered as system_clock.
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "system_clock",
                    interface: "interlink.test.clock",
                },
            ],
        }"#,
    )?;
    apply_manifest(&config, &registry)?;

    let view = registry.get_service(&ContractId::new("@interlink/clock;1")?)?;
    let clock = view
        .downcast_arc::<dyn Clock>()
        .map_err(|_| make_input_err!("View was not a dyn Clock"))?;
    assert_eq!(clock.now_millis(), 42);
    Ok(())
}

#[test]
fn apply_empty_manifest_is_a_noop() -> Result<(), Error> {
    let registry = setup_registry()?;
    let config: ManifestConfig = serde_json5::from_str("{}")?;
    apply_manifest(&config, &registry)?;
    Ok(())
}

#[test]
fn apply_manifest_rejects_bad_interface_id() -> Result<(), Error> {
    let registry = setup_registry()?;
    let config: ManifestConfig = serde_json5::from_str(
        r#"{
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "system_clock",
                    interface: "not a valid id",
                },
            ],
        }"#,
    )?;
    let err = apply_manifest(&config, &registry).unwrap_err();
    assert_eq!(err.code, Code::InvalidArgument);
    Ok(())
}

#[test]
fn apply_manifest_rejects_unknown_component() -> Result<(), Error> {
    let registry = setup_registry()?;
    let config: ManifestConfig = serde_json5::from_str(
        r#"{
            contracts: [
                {
                    contract: "@interlink/clock;1",
                    component: "no_such_component",
                    interface: "interlink.test.clock",
                },
            ],
        }"#,
    )?;
    let err = apply_manifest(&config, &registry).unwrap_err();
    assert_eq!(err.code, Code::NotFound);
    Ok(())
}
