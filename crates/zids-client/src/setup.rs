// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Step-0 parameter setup.
//!
//! The client fixes the group and the security knobs, derives the
//! fixed encoding widths, samples a per-session domain-separation
//! salt, and publishes the bundle the server needs. No network and no
//! OT happens here.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use zids_odfa::SecurityParams;
use zids_ot::{DdhGroup, OtExtConfig};
use zids_rand::EntropySource;

use crate::error::ClientError;

/// Length of the per-session salt.
pub const SID_LEN: usize = 16;

/// Which base-OT role the client takes in the extension setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseOtRole {
    /// Client acts as base-OT sender.
    Sender,
    /// Client acts as base-OT receiver (the OT-256 default).
    #[default]
    Receiver,
}

/// The public bundle sent to the server in Step-0.
///
/// Group integers travel as lowercase hex: arbitrary-precision
/// integers are not portable JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParams {
    /// Modulus p, lowercase hex.
    pub p_hex: String,
    /// Subgroup order q, lowercase hex.
    pub q_hex: String,
    /// Generator g, lowercase hex.
    pub g_hex: String,
    /// Pad-seed length in bits.
    pub k_bits: usize,
    /// Group-key length in bits.
    pub kprime_bits: usize,
    /// Statistical security parameter.
    pub kappa: usize,
    /// Alphabet size.
    pub alphabet_size: usize,
    /// Fixed encoding width for Z_q values.
    pub q_bytes: usize,
}

impl PublicParams {
    /// Reconstructs the validated group from the published integers.
    pub fn group(&self) -> Result<DdhGroup, ClientError> {
        let parse = |hex: &str, what: &'static str| -> Result<BigUint, ClientError> {
            BigUint::parse_bytes(hex.as_bytes(), 16)
                .ok_or_else(|| ClientError::BadResponse(format!("{what} is not valid hex")))
        };
        let p = parse(&self.p_hex, "p_hex")?;
        let q = parse(&self.q_hex, "q_hex")?;
        let g = parse(&self.g_hex, "g_hex")?;
        Ok(DdhGroup::new(p, q, g)?)
    }
}

/// Client-kept private state from Step-0.
pub struct ClientOfflineState {
    /// The agreed group.
    pub group: DdhGroup,
    /// The agreed security knobs.
    pub sec: SecurityParams,
    /// Per-session domain-separation salt.
    pub sid: [u8; SID_LEN],
    /// Base-OT role for the extension setup.
    pub base_ot_role: BaseOtRole,
    /// Extension precomputation, filled once an extension engine runs
    /// its setup.
    pub ext: Option<OtExtConfig>,
}

/// Fixes parameters and produces the public bundle plus the private
/// client state.
///
/// # Errors
///
/// [`ClientError::Params`] on invalid security knobs,
/// [`ClientError::Entropy`] if salt sampling fails. The group is
/// validated by construction.
pub fn client_param_setup<E: EntropySource + ?Sized>(
    group: &DdhGroup,
    sec: &SecurityParams,
    base_ot_role: BaseOtRole,
    entropy: &E,
) -> Result<(PublicParams, ClientOfflineState), ClientError> {
    sec.validate()?;

    let params = PublicParams {
        p_hex: group.modulus().to_str_radix(16),
        q_hex: group.order().to_str_radix(16),
        g_hex: group.generator().to_str_radix(16),
        k_bits: sec.k_bits,
        kprime_bits: sec.kprime_bits,
        kappa: sec.kappa,
        alphabet_size: sec.alphabet_size,
        q_bytes: group.q_bytes(),
    };

    let mut sid = [0u8; SID_LEN];
    entropy.fill_bytes(&mut sid)?;

    let state = ClientOfflineState {
        group: group.clone(),
        sec: *sec,
        sid,
        base_ot_role,
        ext: None,
    };
    Ok((params, state))
}
