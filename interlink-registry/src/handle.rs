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

use core::fmt;
use std::sync::Arc;

use crate::component::Component;
use crate::interface_id::InterfaceId;
use crate::interface_ref::InterfaceRef;
use crate::registry::ComponentRegistry;

/// Pairs a component with the registry that resolves its interface views.
#[derive(Clone)]
pub struct ComponentHandle {
    component: Arc<dyn Component>,
    registry: Arc<ComponentRegistry>,
}

impl ComponentHandle {
    pub fn new(component: Arc<dyn Component>, registry: Arc<ComponentRegistry>) -> Self {
        Self {
            component,
            registry,
        }
    }

    /// Asks the component for a view of itself under `iid`.
    ///
    /// Forwards both to the registry untouched; the result is exactly what
    /// `ComponentRegistry::resolve` returns for this component and id.
    pub fn query_interface(&self, iid: &InterfaceId) -> Option<InterfaceRef> {
        self.registry.resolve(&self.component, iid)
    }

    /// Typed convenience over `query_interface`. `None` if the interface is
    /// not supported or is registered under a different trait type.
    pub fn query_as<I: ?Sized + Send + Sync + 'static>(
        &self,
        iid: &InterfaceId,
    ) -> Option<Arc<I>> {
        self.query_interface(iid)
            .and_then(|view| view.downcast_arc::<I>().ok())
    }

    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }

    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("type_name", &self.component.type_name())
            .finish_non_exhaustive()
    }
}
