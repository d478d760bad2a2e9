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

/// An object whose interface views are managed by a `ComponentRegistry`.
///
/// Implementors only provide the `Any` accessors; the registry uses them to
/// recover the concrete type when dispatching a registered caster. The
/// interface traits a component exposes are ordinary Rust traits and stay
/// entirely under the implementor's control.
pub trait Component: Send + Sync + 'static {
    /// Returns the name of the struct implementing the trait.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns an Any variation of whatever Self is.
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync + 'static>;
}
