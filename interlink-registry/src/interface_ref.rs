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
use core::fmt;
use std::sync::Arc;

use crate::interface_id::InterfaceId;

/// A type erased interface view of a component.
///
/// The view holds an `Arc` of the interface trait object, so it keeps the
/// component allocation alive and shares its identity. It is not a copy of
/// the component.
pub struct InterfaceRef {
    iid: InterfaceId,
    view: Box<dyn Any + Send + Sync>,
}

impl InterfaceRef {
    pub(crate) fn new(iid: InterfaceId, view: Box<dyn Any + Send + Sync>) -> Self {
        Self { iid, view }
    }

    /// The interface id this view was resolved under.
    pub fn interface_id(&self) -> &InterfaceId {
        &self.iid
    }

    /// True if the view holds an `Arc<I>`.
    pub fn is<I: ?Sized + Send + Sync + 'static>(&self) -> bool {
        self.view.is::<Arc<I>>()
    }

    /// Recovers the typed `Arc<I>` view. Returns `self` back on a type
    /// mismatch so the caller can keep probing with other interface types.
    pub fn downcast_arc<I: ?Sized + Send + Sync + 'static>(self) -> Result<Arc<I>, Self> {
        match self.view.downcast::<Arc<I>>() {
            Ok(arc) => Ok(*arc),
            Err(view) => Err(Self {
                iid: self.iid,
                view,
            }),
        }
    }
}

impl fmt::Debug for InterfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceRef")
            .field("interface_id", &self.iid)
            .finish_non_exhaustive()
    }
}
