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
//! Link power management data types.

use super::constants::IE_PRCE;
use super::power::LinkPowerAccounting;

/// Last observed power state of a port's SATA link.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LinkPowerState {
    /// No device, or Phy communication not established
    #[default]
    NoLink,
    /// Interface fully powered
    Active,
    /// Low power with fast resume
    Partial,
    /// Lowest power with slow resume
    Slumber,
}

impl LinkPowerState {
    /// Returns the state name as a string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoLink => "no link",
            Self::Active => "active",
            Self::Partial => "partial",
            Self::Slumber => "slumber",
        }
    }

    /// Decodes the PxSSTS interface power management substate.
    ///
    /// Fixed table per Serial ATA 3.0: 1 = active, 2 = partial, 6 = slumber.
    /// Every other value, including 0 (device absent), maps to no-link.
    pub const fn from_ipm(ipm: u32) -> Self {
        match ipm {
            0x1 => Self::Active,
            0x2 => Self::Partial,
            0x6 => Self::Slumber,
            _ => Self::NoLink,
        }
    }
}

/// Link power management aggressiveness for one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpmPolicy {
    /// No automatic transitions; link stays active
    MaxPerformance,
    /// Aggressive transitions to partial
    MediumPower,
    /// Aggressive transitions to slumber
    MinPower,
}

impl LpmPolicy {
    /// Returns the policy name as a string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MaxPerformance => "max_performance",
            Self::MediumPower => "medium_power",
            Self::MinPower => "min_power",
        }
    }

    /// Whether the policy allows the link to leave full power.
    pub const fn is_low_power(&self) -> bool {
        !matches!(self, Self::MaxPerformance)
    }
}

/// Driver-private state for one monitored port.
///
/// Lives in the controller's port map and is only reached while holding the
/// port-map lock; that lock is the exclusive-access scope for the accounting
/// record and the interrupt mask shadow alike.
#[derive(Debug)]
pub struct PortLinkState {
    /// Port number (0-31)
    pub port: u32,
    /// Currently applied link power management policy
    pub policy: LpmPolicy,
    /// Shadow of the PxIE register; written through on every change
    pub irq_mask: u32,
    /// Cumulative time-in-state record
    pub accounting: LinkPowerAccounting,
}

impl PortLinkState {
    pub const fn new(port: u32) -> Self {
        Self {
            port,
            policy: LpmPolicy::MaxPerformance,
            irq_mask: IE_PRCE,
            accounting: LinkPowerAccounting::new(),
        }
    }
}
