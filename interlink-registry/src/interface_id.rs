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
use std::borrow::Cow;

use interlink_error::{Error, error_if};
use serde::{Deserialize, Serialize};

/// Validation shared by the identifier newtypes. Identifiers are rejected at
/// construction so query paths never need to re-check them.
pub(crate) fn validate_identifier(kind: &str, id: &str) -> Result<(), Error> {
    error_if!(id.is_empty(), "{kind} must not be empty");
    error_if!(
        id.chars().any(|c| c.is_whitespace() || c.is_control()),
        "{kind} '{id}' must not contain whitespace or control characters"
    );
    Ok(())
}

/// Identifier naming an interface a component may expose, eg
/// `interlink.clock`. A component either supports an interface id or it does
/// not; there is no partial match or wildcard semantic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct InterfaceId(Cow<'static, str>);

impl InterfaceId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Result<Self, Error> {
        let id = id.into();
        validate_identifier("Interface id", &id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for InterfaceId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for InterfaceId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}
