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
//! AHCI register offsets and bit definitions per AHCI 1.3.1 specification.

// ============================================================================
// HBA Register Offsets (AHCI 1.3.1 Spec Section 3.1)
// ============================================================================

/// Host Capabilities register offset
pub const HBA_CAP: u32 = 0x00;
/// Global Host Control register offset
pub const HBA_GHC: u32 = 0x04;
/// Interrupt Status register offset
pub const HBA_IS: u32 = 0x08;
/// Ports Implemented register offset
pub const HBA_PI: u32 = 0x0C;
/// AHCI Version register offset
pub const HBA_VS: u32 = 0x10;

// ============================================================================
// GHC Register Bits (AHCI 1.3.1 Spec Section 3.1.2)
// ============================================================================

/// AHCI Enable
pub const GHC_AE: u32 = 1 << 31;
/// Interrupt Enable
pub const GHC_IE: u32 = 1 << 1;

// ============================================================================
// Per-Port Register Offsets (AHCI 1.3.1 Spec Section 3.3)
// ============================================================================

/// Port Interrupt Status
pub const PORT_IS: u32 = 0x10;
/// Port Interrupt Enable
pub const PORT_IE: u32 = 0x14;
/// Port Command and Status
pub const PORT_CMD: u32 = 0x18;
/// Port SATA Status (SCR0: SStatus)
pub const PORT_SSTS: u32 = 0x28;
/// Port SATA Control (SCR2: SControl)
pub const PORT_SCTL: u32 = 0x2C;
/// Port SATA Error (SCR1: SError)
pub const PORT_SERR: u32 = 0x30;

/// Start of the per-port register blocks within the HBA window
pub const PORT_REGS_BASE: u32 = 0x100;
/// Size of one per-port register block
pub const PORT_REGS_STRIDE: u32 = 0x80;

/// Number of port register blocks an HBA can implement
pub const MAX_PORTS: u32 = 32;

// ============================================================================
// PxIS / PxIE Register Bits (AHCI 1.3.1 Spec Sections 3.3.5, 3.3.6)
// ============================================================================

/// PhyRdy Change Status: link power state transition latched
pub const IS_PRCS: u32 = 1 << 22;
/// PhyRdy Change Interrupt Enable
pub const IE_PRCE: u32 = 1 << 22;

// ============================================================================
// PxCMD Register Bits (AHCI 1.3.1 Spec Section 3.3.7)
// ============================================================================

/// Aggressive Link Power Management Enable
pub const CMD_ALPE: u32 = 1 << 26;
/// Aggressive Slumber / Partial: slumber instead of partial when idle
pub const CMD_ASP: u32 = 1 << 27;

// ============================================================================
// PxSSTS Register Fields (Serial ATA Revision 3.0 Spec)
// ============================================================================

/// Device Detection field mask
pub const SSTS_DET_MASK: u32 = 0xF;
/// Device present and Phy communication established
pub const SSTS_DET_ESTABLISHED: u32 = 0x3;
/// Interface Power Management substate shift
pub const SSTS_IPM_SHIFT: u32 = 8;
/// Interface Power Management substate mask (3-bit value after shift)
pub const SSTS_IPM_MASK: u32 = 0x7;

// ============================================================================
// PxSCTL Register Fields (Serial ATA Revision 3.0 Spec)
// ============================================================================

/// Interface Power Management Transitions Allowed field shift
pub const SCTL_IPM_SHIFT: u32 = 8;
/// Interface Power Management Transitions Allowed field mask
pub const SCTL_IPM_MASK: u32 = 0xF;
/// Transition to Partial disabled
pub const SCTL_IPM_NO_PARTIAL: u32 = 0x1;
/// Transition to Slumber disabled
pub const SCTL_IPM_NO_SLUMBER: u32 = 0x2;

// ============================================================================
// PxSERR Register Bits (AHCI 1.3.1 Spec Section 3.3.8)
// ============================================================================

/// Diagnostics: PhyRdy signal changed state (write 1 to clear)
pub const SERR_DIAG_N: u32 = 1 << 16;
