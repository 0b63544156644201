// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error details recorded against a transfer job
//!
//! These are stored underneath the job record and surfaced to the user, so
//! the serialized form is a fixed contract: exactly the keys `Id`, `Title`
//! and `Exception`, all strings. Unknown keys are ignored on read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A builder was finalized without all required fields
#[derive(Debug, Error, PartialEq, Eq)]
#[error("error detail is missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// An immutable error record attached to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Title")]
    title: String,
    /// Fully rendered error/trace text, not a structured cause chain
    #[serde(rename = "Exception")]
    exception: String,
}

impl ErrorDetail {
    pub fn builder() -> ErrorDetailBuilder {
        ErrorDetailBuilder::default()
    }

    /// Build a detail from a live error, rendering its full source chain
    pub fn from_error(
        id: impl Into<String>,
        title: impl Into<String>,
        error: &(dyn std::error::Error + 'static),
    ) -> Self {
        let mut rendered = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            rendered.push_str("\ncaused by: ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            id: id.into(),
            title: title.into(),
            exception: rendered,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn exception(&self) -> &str {
        &self.exception
    }

    /// Fixed three-key map form for persistence and display
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Id".to_string(), self.id.clone()),
            ("Title".to_string(), self.title.clone()),
            ("Exception".to_string(), self.exception.clone()),
        ])
    }
}

/// Builder for [`ErrorDetail`]; all three fields are required
#[derive(Debug, Default, Clone)]
pub struct ErrorDetailBuilder {
    id: Option<String>,
    title: Option<String>,
    exception: Option<String>,
}

impl ErrorDetailBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    pub fn build(self) -> Result<ErrorDetail, MissingField> {
        Ok(ErrorDetail {
            id: self.id.ok_or(MissingField("id"))?,
            title: self.title.ok_or(MissingField("title"))?,
            exception: self.exception.ok_or(MissingField("exception"))?,
        })
    }
}

#[cfg(test)]
#[path = "error_detail_tests.rs"]
mod tests;
