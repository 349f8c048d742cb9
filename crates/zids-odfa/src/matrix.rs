// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The sparse ODFA: rows of bounded out-degree over state ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::OdfaError;

/// Group id marking a dummy (padding) edge.
pub const DUMMY_GROUP_ID: i32 = -1;

/// One transition: symbols in group `group_id` move to `next_state`,
/// emitting `attack_id` (0 = no attack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdfaEdge {
    /// Symbol-group id within the row; -1 for dummy padding.
    pub group_id: i32,
    /// Destination state, in `[0, num_states)`.
    pub next_state: u32,
    /// Attack id emitted on this transition; 0 means none.
    pub attack_id: u32,
}

impl OdfaEdge {
    /// The dummy edge used to pad short rows to `outmax`.
    pub const fn dummy() -> Self {
        Self {
            group_id: DUMMY_GROUP_ID,
            next_state: 0,
            attack_id: 0,
        }
    }
}

/// One state's outgoing edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdfaRow {
    /// The edges, at most `outmax` of them.
    pub edges: Vec<OdfaEdge>,
}

/// A sparsified DFA ready for garbling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odfa {
    /// Number of states; ids are `[0, num_states)`.
    pub num_states: u32,
    /// The initial state.
    pub start_state: u32,
    /// Accepting map: state -> attack id (0 entries are meaningless
    /// and rejected).
    pub accepting: BTreeMap<u32, u32>,
    /// Per-state edge rows, indexed by state id.
    pub rows: Vec<OdfaRow>,
}

impl Odfa {
    /// Structural validation against the sparsity bound.
    ///
    /// # Errors
    ///
    /// [`OdfaError::MalformedOdfa`] describing the first violation.
    pub fn validate(&self, outmax: usize) -> Result<(), OdfaError> {
        if self.num_states == 0 {
            return Err(OdfaError::MalformedOdfa("num_states must be positive".into()));
        }
        if self.rows.len() != self.num_states as usize {
            return Err(OdfaError::MalformedOdfa(format!(
                "expected {} rows, found {}",
                self.num_states,
                self.rows.len()
            )));
        }
        if self.start_state >= self.num_states {
            return Err(OdfaError::MalformedOdfa(format!(
                "start_state {} out of range [0, {})",
                self.start_state, self.num_states
            )));
        }
        for (state, row) in self.rows.iter().enumerate() {
            if row.edges.len() > outmax {
                return Err(OdfaError::MalformedOdfa(format!(
                    "row {} has {} edges, outmax is {}",
                    state,
                    row.edges.len(),
                    outmax
                )));
            }
            for (i, edge) in row.edges.iter().enumerate() {
                if edge.next_state >= self.num_states {
                    return Err(OdfaError::MalformedOdfa(format!(
                        "row {state} edge {i}: next_state {} out of range",
                        edge.next_state
                    )));
                }
            }
        }
        for (&state, &aid) in &self.accepting {
            if state >= self.num_states {
                return Err(OdfaError::MalformedOdfa(format!(
                    "accepting state {state} out of range"
                )));
            }
            if aid == 0 {
                return Err(OdfaError::MalformedOdfa(format!(
                    "accepting state {state} maps to attack id 0"
                )));
            }
        }
        Ok(())
    }

    /// The edges of `state`, padded with dummy edges to exactly
    /// `outmax` entries.
    pub fn padded_edges(&self, state: u32, outmax: usize) -> Vec<OdfaEdge> {
        let mut edges = self.rows[state as usize].edges.clone();
        edges.resize(outmax, OdfaEdge::dummy());
        edges
    }
}
