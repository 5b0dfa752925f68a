//! Per-wheel contact tracker.
//!
//! Explicit two-state machine over a single [`ContactSample`]:
//!
//! ```text
//! Uninitialized ──update──▶ Reacquiring ──hit──▶ Tracking
//!                              ▲  │ miss            │
//!                              │  ▼                 │ cast_ray fails, cap reached,
//!                              └──┴─────────────────┘ or refresh requested
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;
use tread_math::Vec3;
use tread_types::constants::DEFAULT_REACQUIRE_CAP;

use crate::query::ContactQuery;
use crate::sample::ContactSample;

/// How long plane extrapolation may run before a full query is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReacquirePolicy {
    /// Consecutive extrapolations permitted after a full query.
    /// Zero disables extrapolation.
    pub max_run_length: u32,
}

impl Default for ReacquirePolicy {
    fn default() -> Self {
        Self {
            max_run_length: DEFAULT_REACQUIRE_CAP,
        }
    }
}

/// Tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    /// No update has run yet.
    Uninitialized,
    /// Extrapolating along the last contact plane.
    Tracking,
    /// The next update must run a full query.
    Reacquiring,
}

/// What the most recent update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOutcome {
    /// Plane extrapolation succeeded; no query issued.
    Extrapolated,
    /// A full query hit.
    Reacquired,
    /// A full query found nothing.
    Missed,
}

/// Cumulative tracker counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStats {
    /// Full queries issued (hits and misses).
    pub full_queries: u64,
    /// Ticks served by plane extrapolation.
    pub extrapolations: u64,
    /// Full queries that found no contact.
    pub misses: u64,
}

/// Owns one wheel's live contact sample.
#[derive(Debug, Clone)]
pub struct ContactTracker {
    sample: ContactSample,
    state: TrackerState,
    run_length: u32,
    policy: ReacquirePolicy,
    refresh_requested: bool,
    last_outcome: Option<UpdateOutcome>,
    stats: TrackerStats,
}

impl ContactTracker {
    /// Creates an uninitialized tracker.
    pub fn new(policy: ReacquirePolicy) -> Self {
        Self {
            sample: ContactSample::default(),
            state: TrackerState::Uninitialized,
            run_length: 0,
            policy,
            refresh_requested: false,
            last_outcome: None,
            stats: TrackerStats::default(),
        }
    }

    /// Advances the tracker for this tick's wheel ray and returns the
    /// resulting sample. Never fails: no contact is a valid sample.
    pub fn update<Q>(&mut self, query: &Q, origin: Vec3, direction: Vec3, length: f32) -> &ContactSample
    where
        Q: ContactQuery + ?Sized,
    {
        if self.state == TrackerState::Tracking
            && !self.refresh_requested
            && self.run_length < self.policy.max_run_length
            && self.sample.cast_ray(origin, direction, length)
        {
            self.run_length += 1;
            self.stats.extrapolations += 1;
            self.last_outcome = Some(UpdateOutcome::Extrapolated);
            return &self.sample;
        }

        self.refresh_requested = false;
        self.run_length = 0;
        self.stats.full_queries += 1;

        match query.query(origin, direction, length) {
            Some(hit) => {
                self.sample = ContactSample::from(&hit);
                self.state = TrackerState::Tracking;
                self.last_outcome = Some(UpdateOutcome::Reacquired);
            }
            None => {
                trace!(source = query.name(), "full query found no contact");
                self.sample = ContactSample::no_contact(origin, direction, length);
                self.state = TrackerState::Reacquiring;
                self.stats.misses += 1;
                self.last_outcome = Some(UpdateOutcome::Missed);
            }
        }
        &self.sample
    }

    /// The most recent sample, for the tire model to poll after a tick.
    pub fn current(&self) -> &ContactSample {
        &self.sample
    }

    /// Forces a full query on the next update (after a teleport or reset).
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Returns true if a refresh is pending.
    pub fn refresh_requested(&self) -> bool {
        self.refresh_requested
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Consecutive extrapolations since the last full query.
    pub fn run_length(&self) -> u32 {
        self.run_length
    }

    pub fn policy(&self) -> ReacquirePolicy {
        self.policy
    }

    /// Replaces the reacquisition policy. Takes effect on the next update.
    pub fn set_policy(&mut self, policy: ReacquirePolicy) {
        self.policy = policy;
    }

    /// Outcome of the most recent update, `None` before the first.
    pub fn last_outcome(&self) -> Option<UpdateOutcome> {
        self.last_outcome
    }

    pub fn stats(&self) -> TrackerStats {
        self.stats
    }
}

impl Default for ContactTracker {
    fn default() -> Self {
        Self::new(ReacquirePolicy::default())
    }
}
