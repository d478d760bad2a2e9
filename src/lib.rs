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

//! Interlink is a small component framework: objects register with a
//! `ComponentRegistry` and can then be asked for a differently-typed
//! interface view of themselves by string interface identifier. Resolution
//! is a single registry lookup; an unsupported interface is `None`, never an
//! error. The registry is an explicit dependency everywhere, there is no
//! ambient global instance.
//!
//! ```
//! use std::sync::Arc;
//!
//! use interlink::{Component, ComponentRegistry, Error, InterfaceId};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Component for EnglishGreeter {
//!     fn as_any(&self) -> &(dyn core::any::Any + Send + Sync + 'static) {
//!         self
//!     }
//!
//!     fn as_any_arc(self: Arc<Self>) -> Arc<dyn core::any::Any + Send + Sync + 'static> {
//!         self
//!     }
//! }
//!
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! fn main() -> Result<(), Error> {
//!     let registry = Arc::new(ComponentRegistry::new());
//!     let greeter_iid = InterfaceId::new("interlink.greeter")?;
//!     registry.register_interface::<EnglishGreeter, dyn Greeter>(greeter_iid.clone(), |c| c)?;
//!     registry.register_component("greeter", Arc::new(EnglishGreeter))?;
//!
//!     let handle = registry.get_handle("greeter").expect("registered above");
//!     let greeter = handle
//!         .query_as::<dyn Greeter>(&greeter_iid)
//!         .expect("registered above");
//!     assert_eq!(greeter.greet(), "hello");
//!     Ok(())
//! }
//! ```

pub use interlink_config::manifest::{ContractEntry, ManifestConfig};
pub use interlink_error::{Code, Error, ResultExt, error_if, make_err, make_input_err};
pub use interlink_registry::component::Component;
pub use interlink_registry::contract_id::ContractId;
pub use interlink_registry::handle::ComponentHandle;
pub use interlink_registry::interface_id::InterfaceId;
pub use interlink_registry::interface_ref::InterfaceRef;
pub use interlink_registry::manifest_factory::apply_manifest;
pub use interlink_registry::registry::ComponentRegistry;
