//! Cascading Select State
//!
//! Option list of one dependent select, kept in step with its parent select.
//!
//! Every parent change clears the list and issues a lookup tagged with a
//! per-control sequence number. Only the completion carrying the latest tag
//! is applied; earlier ones are dropped, so the list always reflects the
//! most recent parent value no matter which response arrives last.

use crate::error::RequestError;
use crate::models::{LookupResult, SelectOption};

/// Tag of one outgoing lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    /// Parent value the lookup was issued for
    pub value: String,
}

/// What happened to a completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Options replaced with sentinel + entries
    Applied { count: usize },
    /// Request failed; sentinel-only list restored
    Failed(RequestError),
    /// A newer lookup was issued meanwhile; nothing touched
    Stale { seq: u64, latest: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeState {
    placeholder: String,
    options: Vec<SelectOption>,
    latest_seq: u64,
    status: SyncStatus,
    error: Option<String>,
}

impl CascadeState {
    /// Dependent select before any parent change: sentinel only
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self::with_options(placeholder, Vec::new())
    }

    /// Dependent select pre-filled with the unfiltered list: sentinel, then `options`
    pub fn with_options(placeholder: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let placeholder = placeholder.into();
        Self {
            options: std::iter::once(SelectOption::sentinel(&placeholder)).chain(options).collect(),
            placeholder,
            latest_seq: 0,
            status: SyncStatus::Idle,
            error: None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// Message of the last failed lookup, until dismissed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parent changed: clear every option (no sentinel while in flight)
    /// and hand out the tag for the lookup about to be sent.
    pub fn begin(&mut self, value: impl Into<String>) -> LookupTicket {
        self.latest_seq += 1;
        self.options.clear();
        self.status = SyncStatus::Loading;
        self.error = None;
        LookupTicket { seq: self.latest_seq, value: value.into() }
    }

    /// Apply a lookup completion if it is still the latest one
    pub fn complete(&mut self, seq: u64, result: Result<LookupResult, RequestError>) -> SyncOutcome {
        if seq != self.latest_seq {
            return SyncOutcome::Stale { seq, latest: self.latest_seq };
        }

        self.options.clear();
        self.options.push(SelectOption::sentinel(&self.placeholder));
        match result {
            Ok(lookup) => {
                let count = lookup.len();
                self.options.extend(lookup.entries);
                self.status = SyncStatus::Idle;
                SyncOutcome::Applied { count }
            }
            Err(err) => {
                self.status = SyncStatus::Failed;
                self.error = Some(err.to_string());
                SyncOutcome::Failed(err)
            }
        }
    }

    /// Hide the failure message raised by lookup `seq`.
    /// Ignored when another lookup has started since.
    pub fn dismiss_error(&mut self, seq: u64) {
        if seq == self.latest_seq && self.status == SyncStatus::Failed {
            self.status = SyncStatus::Idle;
            self.error = None;
        }
    }
}
