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
//! Point-in-time snapshots of link power accounting for monitoring.

use super::types::LinkPowerState;

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkPowerStats {
    /// Milliseconds spent active since the link last came up
    pub active_ms: u64,
    /// Milliseconds spent in partial since the link last came up
    pub partial_ms: u64,
    /// Milliseconds spent in slumber since the link last came up
    pub slumber_ms: u64,
    /// Link state as of the snapshot
    pub state: LinkPowerState,
    /// Whether accounting keeps the PhyRdy-change interrupt unmasked
    pub accounting_enabled: bool,
    /// PhyRdy-change interrupts handled controller-wide
    pub phyrdy_events: u64,
}
