// Copyright 2022 Aztec
// Copyright 2025 Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0 or MIT

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use alloc::{vec, vec::Vec};

use crate::{
    codec::WireElement,
    constants::{
        NUM_LOOKUP_COMMITMENTS, NUM_LOOKUP_EVALUATIONS, NUM_NAMED_CHALLENGES,
        NUM_PERMUTATION_CHUNK_EVALUATIONS, NUM_VANISHING_COMMITMENTS, NUM_VANISHING_EVALUATIONS,
    },
    errors::ShapeError,
    proof::Proof,
};

/// Sizes of the per-circuit sequences of a proof, as fixed by the circuit's
/// verifying key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircuitShape {
    pub num_advice_columns: usize,
    pub num_instance_queries: usize,
    pub num_advice_queries: usize,
    pub num_lookups: usize,
    pub num_permutation_chunks: usize,
}

impl CircuitShape {
    fn num_scalars(&self) -> Option<usize> {
        // Every chunk but the final one also carries its last-row eval.
        let permutation_evals = NUM_PERMUTATION_CHUNK_EVALUATIONS
            .checked_mul(self.num_permutation_chunks)?
            .checked_add(self.num_permutation_chunks.saturating_sub(1))?;

        self.num_instance_queries
            .checked_add(self.num_advice_queries)?
            .checked_add(permutation_evals)?
            .checked_add(NUM_LOOKUP_EVALUATIONS.checked_mul(self.num_lookups)?)
    }

    fn num_commitments(&self) -> Option<usize> {
        self.num_advice_columns
            .checked_add(NUM_LOOKUP_COMMITMENTS.checked_mul(self.num_lookups)?)?
            .checked_add(self.num_permutation_chunks)
    }
}

/// The expected sizes of every sequence of a proof.
///
/// The codec has no length prefixes, so decoding needs one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProofShape {
    pub num_challenges: usize,
    pub num_fixed_queries: usize,
    pub num_permutation_columns: usize,
    pub num_h_pieces: usize,
    pub circuits: Vec<CircuitShape>,
}

impl ProofShape {
    /// Shape of a batch of `num_circuits` proofs for the same circuit.
    pub fn uniform(
        num_circuits: usize,
        circuit: CircuitShape,
        num_challenges: usize,
        num_fixed_queries: usize,
        num_permutation_columns: usize,
        num_h_pieces: usize,
    ) -> Self {
        Self {
            num_challenges,
            num_fixed_queries,
            num_permutation_columns,
            num_h_pieces,
            circuits: vec![circuit; num_circuits],
        }
    }

    /// Reads the shape off an already validated proof.
    pub fn of<F, C>(proof: &Proof<F, C>) -> Self {
        let circuits = (0..proof.num_circuits())
            .map(|i| CircuitShape {
                num_advice_columns: proof.advices_commitments_vec[i].len(),
                num_instance_queries: proof.instance_evals_vec[i].len(),
                num_advice_queries: proof.advice_evals_vec[i].len(),
                num_lookups: proof.lookup_permuted_commitments_vec[i].len(),
                num_permutation_chunks: proof.permutation_product_commitments_vec[i].len(),
            })
            .collect();

        Self {
            num_challenges: proof.challenges.len(),
            num_fixed_queries: proof.fixed_evals.len(),
            num_permutation_columns: proof.common_permutation_evals.len(),
            num_h_pieces: proof.vanishing_h_poly_commitments.len(),
            circuits,
        }
    }

    pub fn num_circuits(&self) -> usize {
        self.circuits.len()
    }

    /// Checks that `proof` has exactly this shape.
    pub fn validate<F, C>(&self, proof: &Proof<F, C>) -> Result<(), ShapeError> {
        if proof.num_circuits() != self.num_circuits() {
            return Err(ShapeError::NumCircuits {
                field: "advices_commitments_vec",
                expected: self.num_circuits(),
                actual: proof.num_circuits(),
            });
        }

        let lengths = [
            ("challenges", self.num_challenges, proof.challenges.len()),
            ("fixed_evals", self.num_fixed_queries, proof.fixed_evals.len()),
            (
                "common_permutation_evals",
                self.num_permutation_columns,
                proof.common_permutation_evals.len(),
            ),
            (
                "vanishing_h_poly_commitments",
                self.num_h_pieces,
                proof.vanishing_h_poly_commitments.len(),
            ),
        ];
        for (field, expected, actual) in lengths {
            if expected != actual {
                return Err(ShapeError::Length {
                    field,
                    expected,
                    actual,
                });
            }
        }

        // The proof's own invariants tie every other sequence to these.
        for (circuit, shape) in self.circuits.iter().enumerate() {
            let lengths = [
                (
                    "advices_commitments_vec",
                    shape.num_advice_columns,
                    proof.advices_commitments_vec[circuit].len(),
                ),
                (
                    "instance_evals_vec",
                    shape.num_instance_queries,
                    proof.instance_evals_vec[circuit].len(),
                ),
                (
                    "advice_evals_vec",
                    shape.num_advice_queries,
                    proof.advice_evals_vec[circuit].len(),
                ),
                (
                    "lookup_permuted_commitments_vec",
                    shape.num_lookups,
                    proof.lookup_permuted_commitments_vec[circuit].len(),
                ),
                (
                    "permutation_product_commitments_vec",
                    shape.num_permutation_chunks,
                    proof.permutation_product_commitments_vec[circuit].len(),
                ),
            ];
            for (field, expected, actual) in lengths {
                if expected != actual {
                    return Err(ShapeError::PerCircuitLength {
                        circuit,
                        field,
                        expected,
                        actual,
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of scalars on the wire, or `None` if it does not fit a `usize`.
    /// The auxiliary evaluation points are derived, not sent.
    pub fn num_scalars(&self) -> Option<usize> {
        let fixed = [
            self.num_challenges,
            NUM_NAMED_CHALLENGES,
            self.num_fixed_queries,
            NUM_VANISHING_EVALUATIONS,
            self.num_permutation_columns,
        ];
        let per_circuit = self.circuits.iter().map(CircuitShape::num_scalars);
        checked_sum(fixed.into_iter().map(Some).chain(per_circuit))
    }

    /// Number of commitments on the wire, or `None` if it does not fit a `usize`.
    pub fn num_commitments(&self) -> Option<usize> {
        let fixed = [NUM_VANISHING_COMMITMENTS, self.num_h_pieces];
        let per_circuit = self.circuits.iter().map(CircuitShape::num_commitments);
        checked_sum(fixed.into_iter().map(Some).chain(per_circuit))
    }

    // Size of the encoded proof in bytes, `None` on overflow.
    pub fn byte_size<F: WireElement, C: WireElement>(&self) -> Option<usize> {
        self.num_scalars()?
            .checked_mul(F::BYTE_SIZE)?
            .checked_add(self.num_commitments()?.checked_mul(C::BYTE_SIZE)?)
    }
}

fn checked_sum(mut terms: impl Iterator<Item = Option<usize>>) -> Option<usize> {
    terms.try_fold(0usize, |acc, term| acc.checked_add(term?))
}
