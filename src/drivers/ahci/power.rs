// NØNOS Operating System
// Copyright (C) 2025 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//! Link power state time accounting.
//!
//! Each observation charges the time since the previous observation to the
//! state the link was in over that interval, then records the new state.
//! There is no timer behind this: observations come from PhyRdy-change
//! interrupts and from reads of the accounting endpoints, so the counters
//! are exact at every read without any background work.

use super::types::LinkPowerState;

/// Cumulative time-in-state record for one port's link.
///
/// Invariant: between two observations with no intervening no-link, the sum
/// of the three counters grows by exactly the elapsed time. Observing
/// no-link zeroes all counters; a link that dropped has no history worth
/// keeping.
#[derive(Debug, Clone, Copy)]
pub struct LinkPowerAccounting {
    active_ms: u64,
    partial_ms: u64,
    slumber_ms: u64,
    previous_state: LinkPowerState,
    previous_timestamp: u64,
    accounting_enabled: bool,
}

impl LinkPowerAccounting {
    pub const fn new() -> Self {
        Self {
            active_ms: 0,
            partial_ms: 0,
            slumber_ms: 0,
            previous_state: LinkPowerState::NoLink,
            previous_timestamp: 0,
            accounting_enabled: false,
        }
    }

    /// Attribute the time since the last observation to the state the link
    /// was in, then record the new observation.
    pub fn record(&mut self, current: LinkPowerState, now_ms: u64) {
        // A non-monotonic clock reading must never underflow the delta.
        let delta = now_ms.saturating_sub(self.previous_timestamp);

        match self.previous_state {
            // No prior state to charge; the interval is discarded.
            LinkPowerState::NoLink => self.reset_counters(),
            LinkPowerState::Active => self.active_ms += delta,
            LinkPowerState::Partial => self.partial_ms += delta,
            LinkPowerState::Slumber => self.slumber_ms += delta,
        }

        if current == LinkPowerState::NoLink {
            self.reset_counters();
        }

        self.previous_state = current;
        self.previous_timestamp = now_ms;
    }

    fn reset_counters(&mut self) {
        self.active_ms = 0;
        self.partial_ms = 0;
        self.slumber_ms = 0;
    }

    /// Total milliseconds spent active since the link last came up.
    pub const fn active_ms(&self) -> u64 {
        self.active_ms
    }

    /// Total milliseconds spent in partial since the link last came up.
    pub const fn partial_ms(&self) -> u64 {
        self.partial_ms
    }

    /// Total milliseconds spent in slumber since the link last came up.
    pub const fn slumber_ms(&self) -> u64 {
        self.slumber_ms
    }

    /// The state charged for time up to the last observation.
    pub const fn previous_state(&self) -> LinkPowerState {
        self.previous_state
    }

    pub const fn accounting_enabled(&self) -> bool {
        self.accounting_enabled
    }

    pub fn set_accounting_enabled(&mut self, enabled: bool) {
        self.accounting_enabled = enabled;
    }
}
