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

use core::any::{Any, TypeId};
use core::fmt;
use std::collections::HashMap;
use std::sync::Arc;

use interlink_error::{Code, Error, ResultExt, make_err};
use parking_lot::RwLock;
use tracing::{Level, event};

use crate::component::Component;
use crate::contract_id::ContractId;
use crate::handle::ComponentHandle;
use crate::interface_id::InterfaceId;
use crate::interface_ref::InterfaceRef;

/// Reinterprets a type erased component as a type erased interface view.
/// Registered per (concrete component type, interface id) pair.
type CastFn =
    Box<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

struct ContractTarget {
    component: String,
    interface: InterfaceId,
}

/// The resolution runtime: named component instances, the interface casters
/// keyed by concrete type, and the contract alias table.
///
/// The registry is an explicit dependency of everything that queries
/// interfaces. There is no ambient global instance; callers share one via
/// `Arc`.
pub struct ComponentRegistry {
    components: RwLock<HashMap<String, Arc<dyn Component>>>,
    casters: RwLock<HashMap<TypeId, HashMap<InterfaceId, CastFn>>>,
    contracts: RwLock<HashMap<ContractId, ContractTarget>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            components: RwLock::new(HashMap::new()),
            casters: RwLock::new(HashMap::new()),
            contracts: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a component instance under a unique name.
    pub fn register_component(
        &self,
        name: &str,
        component: Arc<dyn Component>,
    ) -> Result<(), Error> {
        let mut components = self.components.write();
        if components.contains_key(name) {
            return Err(make_err!(
                Code::AlreadyExists,
                "Component '{name}' is already registered"
            ));
        }
        event!(
            Level::DEBUG,
            component = name,
            type_name = component.type_name(),
            "Registered component"
        );
        components.insert(name.to_string(), component);
        Ok(())
    }

    /// Removes a component. Contracts pointing at it are left in place and
    /// will fail resolution with `NotFound` until a component is registered
    /// under the same name again.
    pub fn unregister_component(&self, name: &str) -> Result<(), Error> {
        self.components
            .write()
            .remove(name)
            .err_tip_with_code(|_| (Code::NotFound, format!("Component '{name}' is not registered")))?;
        event!(Level::DEBUG, component = name, "Unregistered component");
        Ok(())
    }

    pub fn get_component(&self, name: &str) -> Option<Arc<dyn Component>> {
        let components = self.components.read();
        if let Some(component) = components.get(name) {
            return Some(component.clone());
        }
        None
    }

    /// Pairs the named component with this registry so callers can query it
    /// without carrying the registry around separately.
    pub fn get_handle(self: &Arc<Self>, name: &str) -> Option<ComponentHandle> {
        let component = self.get_component(name)?;
        Some(ComponentHandle::new(component, self.clone()))
    }

    /// Declares that components of concrete type `C` expose interface `iid`,
    /// with `cast` producing the trait object view. The cast is a plain `fn`
    /// so registration stays data, not behavior.
    pub fn register_interface<C, I>(
        &self,
        iid: InterfaceId,
        cast: fn(Arc<C>) -> Arc<I>,
    ) -> Result<(), Error>
    where
        C: Component,
        I: ?Sized + Send + Sync + 'static,
    {
        let mut casters = self.casters.write();
        let by_iid = casters.entry(TypeId::of::<C>()).or_default();
        if by_iid.contains_key(&iid) {
            return Err(make_err!(
                Code::AlreadyExists,
                "Interface '{iid}' is already registered for {}",
                core::any::type_name::<C>()
            ));
        }
        by_iid.insert(
            iid,
            Box::new(move |any: Arc<dyn Any + Send + Sync>| {
                // Keyed by TypeId, so the downcast only fails if a component
                // lies in its as_any_arc impl.
                let concrete = any.downcast::<C>().ok()?;
                Some(Box::new(cast(concrete)) as Box<dyn Any + Send + Sync>)
            }),
        );
        Ok(())
    }

    /// The single registry lookup: find the caster registered for the
    /// component's concrete type under `iid` and apply it. `None` means the
    /// component does not support the interface.
    pub fn resolve(
        &self,
        component: &Arc<dyn Component>,
        iid: &InterfaceId,
    ) -> Option<InterfaceRef> {
        let type_id = component.as_any().type_id();
        let casters = self.casters.read();
        let cast = casters.get(&type_id)?.get(iid)?;
        let view = cast(component.clone().as_any_arc())?;
        Some(InterfaceRef::new(iid.clone(), view))
    }

    /// The interface ids registered for the component's concrete type, in
    /// sorted order.
    pub fn interfaces_of(&self, component: &Arc<dyn Component>) -> Vec<InterfaceId> {
        let type_id = component.as_any().type_id();
        let casters = self.casters.read();
        let Some(by_iid) = casters.get(&type_id) else {
            return Vec::new();
        };
        let mut ids: Vec<InterfaceId> = by_iid.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Publishes a contract alias. The named component must already be
    /// registered; the interface is only checked at resolution time, like
    /// the rest of the query path.
    pub fn register_contract(
        &self,
        contract: ContractId,
        component_name: &str,
        iid: InterfaceId,
    ) -> Result<(), Error> {
        self.get_component(component_name).err_tip_with_code(|_| {
            (
                Code::NotFound,
                format!("Component '{component_name}' must be registered before contract '{contract}'"),
            )
        })?;
        let mut contracts = self.contracts.write();
        if contracts.contains_key(&contract) {
            return Err(make_err!(
                Code::AlreadyExists,
                "Contract '{contract}' is already registered"
            ));
        }
        event!(
            Level::DEBUG,
            contract = %contract,
            component = component_name,
            interface = %iid,
            "Registered contract"
        );
        contracts.insert(
            contract,
            ContractTarget {
                component: component_name.to_string(),
                interface: iid,
            },
        );
        Ok(())
    }

    /// Resolves a contract to an interface view. Unlike `resolve`, a miss
    /// here is an error: a published contract is a promise that something
    /// answers to it.
    pub fn get_service(self: &Arc<Self>, contract: &ContractId) -> Result<InterfaceRef, Error> {
        let (component_name, iid) = {
            let contracts = self.contracts.read();
            let target = contracts.get(contract).err_tip_with_code(|_| {
                (
                    Code::NotFound,
                    format!("Contract '{contract}' is not registered"),
                )
            })?;
            (target.component.clone(), target.interface.clone())
        };
        let handle = self.get_handle(&component_name).err_tip_with_code(|_| {
            (
                Code::NotFound,
                format!("Component '{component_name}' for contract '{contract}' is gone"),
            )
        })?;
        handle.query_interface(&iid).err_tip_with_code(|_| {
            (
                Code::Unimplemented,
                format!(
                    "Component '{component_name}' does not support interface '{iid}' for contract '{contract}'"
                ),
            )
        })
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.components.read().len())
            .field("contracts", &self.contracts.read().len())
            .finish_non_exhaustive()
    }
}
