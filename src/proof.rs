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

use alloc::vec::Vec;
use core::ops::Deref;
use tracing::{debug, warn};

use crate::{
    errors::{ProjectionError, ShapeError},
    lookup::LookupVerificationData,
    permutation::PermutationVerificationData,
    points::EvaluationPoints,
    vanishing::VanishingVerificationData,
};

/// Commitments to the permuted input and permuted table columns of one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupPair<C> {
    pub input: C,
    pub table: C,
}

/// The raw data of a proof, as read from a prover transcript.
///
/// Outer `Vec`s of the `*_vec` fields are indexed by circuit; lookup fields are
/// further indexed by lookup and permutation fields by product chunk.
/// Turn it into a [`Proof`] to check its shape.
#[derive(Debug, Clone)]
pub struct ProofParts<F, C> {
    pub advices_commitments_vec: Vec<Vec<C>>,
    pub challenges: Vec<F>,
    pub lookup_permuted_commitments_vec: Vec<Vec<LookupPair<C>>>,
    pub permutation_product_commitments_vec: Vec<Vec<C>>,
    pub lookup_product_commitments_vec: Vec<Vec<C>>,
    pub vanishing_random_poly_commitment: C,
    pub vanishing_h_poly_commitments: Vec<C>,
    pub instance_evals_vec: Vec<Vec<F>>,
    pub advice_evals_vec: Vec<Vec<F>>,
    pub fixed_evals: Vec<F>,
    pub vanishing_random_eval: F,
    pub common_permutation_evals: Vec<F>,
    pub permutation_product_evals_vec: Vec<Vec<F>>,
    pub permutation_product_next_evals_vec: Vec<Vec<F>>,
    // `None` exactly on the final chunk of each circuit
    pub permutation_product_last_evals_vec: Vec<Vec<Option<F>>>,
    pub lookup_product_evals_vec: Vec<Vec<F>>,
    pub lookup_product_next_evals_vec: Vec<Vec<F>>,
    pub lookup_permuted_input_evals_vec: Vec<Vec<F>>,
    pub lookup_permuted_input_inv_evals_vec: Vec<Vec<F>>,
    pub lookup_permuted_table_evals_vec: Vec<Vec<F>>,
    // theta, beta, gamma, y, x and the auxiliary values derived from x
    pub points: EvaluationPoints<F>,
}

// Compared in transcript order, the evaluation-point bundle last.
impl<F: PartialEq, C: PartialEq> PartialEq for ProofParts<F, C> {
    fn eq(&self, other: &Self) -> bool {
        self.advices_commitments_vec == other.advices_commitments_vec
            && self.challenges == other.challenges
            && self.points.theta == other.points.theta
            && self.lookup_permuted_commitments_vec == other.lookup_permuted_commitments_vec
            && self.points.beta == other.points.beta
            && self.points.gamma == other.points.gamma
            && self.permutation_product_commitments_vec
                == other.permutation_product_commitments_vec
            && self.lookup_product_commitments_vec == other.lookup_product_commitments_vec
            && self.vanishing_random_poly_commitment == other.vanishing_random_poly_commitment
            && self.points.y == other.points.y
            && self.vanishing_h_poly_commitments == other.vanishing_h_poly_commitments
            && self.points.x == other.points.x
            && self.instance_evals_vec == other.instance_evals_vec
            && self.advice_evals_vec == other.advice_evals_vec
            && self.fixed_evals == other.fixed_evals
            && self.vanishing_random_eval == other.vanishing_random_eval
            && self.common_permutation_evals == other.common_permutation_evals
            && self.permutation_product_evals_vec == other.permutation_product_evals_vec
            && self.permutation_product_next_evals_vec == other.permutation_product_next_evals_vec
            && self.permutation_product_last_evals_vec == other.permutation_product_last_evals_vec
            && self.lookup_product_evals_vec == other.lookup_product_evals_vec
            && self.lookup_product_next_evals_vec == other.lookup_product_next_evals_vec
            && self.lookup_permuted_input_evals_vec == other.lookup_permuted_input_evals_vec
            && self.lookup_permuted_input_inv_evals_vec
                == other.lookup_permuted_input_inv_evals_vec
            && self.lookup_permuted_table_evals_vec == other.lookup_permuted_table_evals_vec
            && self.points == other.points
    }
}

impl<F: Eq, C: Eq> Eq for ProofParts<F, C> {}

/// A shape-checked, immutable proof.
///
/// Dereferences to its [`ProofParts`] for read access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<F, C> {
    parts: ProofParts<F, C>,
}

impl<F, C> Deref for Proof<F, C> {
    type Target = ProofParts<F, C>;

    fn deref(&self) -> &Self::Target {
        &self.parts
    }
}

impl<F, C> TryFrom<ProofParts<F, C>> for Proof<F, C> {
    type Error = ShapeError;

    fn try_from(parts: ProofParts<F, C>) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl<F, C> Proof<F, C> {
    /// Checks the nesting invariants of `parts` and wraps them.
    pub fn new(parts: ProofParts<F, C>) -> Result<Self, ShapeError> {
        if let Err(err) = check_shape(&parts) {
            warn!(%err, "rejecting malformed proof");
            return Err(err);
        }
        debug!(
            num_circuits = parts.advices_commitments_vec.len(),
            "accepted proof shape"
        );
        Ok(Self { parts })
    }

    // For parts sized from a `ProofShape`, which satisfy every invariant by
    // construction.
    pub(crate) fn from_well_shaped(parts: ProofParts<F, C>) -> Self {
        debug_assert_eq!(check_shape(&parts), Ok(()));
        Self { parts }
    }

    pub fn into_parts(self) -> ProofParts<F, C> {
        self.parts
    }

    pub fn num_circuits(&self) -> usize {
        self.parts.advices_commitments_vec.len()
    }

    pub fn num_lookups(&self, circuit: usize) -> Result<usize, ProjectionError> {
        self.check_circuit(circuit)?;
        Ok(self.parts.lookup_permuted_commitments_vec[circuit].len())
    }

    pub fn num_permutation_chunks(&self, circuit: usize) -> Result<usize, ProjectionError> {
        self.check_circuit(circuit)?;
        Ok(self.parts.permutation_product_commitments_vec[circuit].len())
    }

    pub fn points(&self) -> &EvaluationPoints<F> {
        &self.parts.points
    }

    /// Data needed to check the quotient identity of circuit `i`.
    pub fn vanishing_verification_data(
        &self,
        i: usize,
    ) -> Result<VanishingVerificationData<'_, F>, ProjectionError> {
        self.check_circuit(i)?;
        let p = &self.parts;
        Ok(VanishingVerificationData {
            fixed_evals: &p.fixed_evals,
            advice_evals: &p.advice_evals_vec[i],
            instance_evals: &p.instance_evals_vec[i],
            challenges: &p.challenges,
        })
    }

    /// Data needed to check the permutation grand product of circuit `i`.
    pub fn permutation_verification_data(
        &self,
        i: usize,
    ) -> Result<PermutationVerificationData<'_, F, C>, ProjectionError> {
        self.check_circuit(i)?;
        let p = &self.parts;
        Ok(PermutationVerificationData {
            fixed_evals: &p.fixed_evals,
            advice_evals: &p.advice_evals_vec[i],
            instance_evals: &p.instance_evals_vec[i],
            challenges: &p.challenges,
            product_commitments: &p.permutation_product_commitments_vec[i],
            common_evals: &p.common_permutation_evals,
            product_evals: &p.permutation_product_evals_vec[i],
            product_next_evals: &p.permutation_product_next_evals_vec[i],
            product_last_evals: &p.permutation_product_last_evals_vec[i],
            points: &p.points,
        })
    }

    /// Data needed to check lookup `j` of circuit `i`.
    pub fn lookup_verification_data(
        &self,
        i: usize,
        j: usize,
    ) -> Result<LookupVerificationData<'_, F, C>, ProjectionError> {
        let num_lookups = self.num_lookups(i)?;
        if j >= num_lookups {
            return Err(ProjectionError::LookupIndexOutOfBounds {
                circuit: i,
                index: j,
                num_lookups,
            });
        }
        let p = &self.parts;
        Ok(LookupVerificationData {
            fixed_evals: &p.fixed_evals,
            advice_evals: &p.advice_evals_vec[i],
            instance_evals: &p.instance_evals_vec[i],
            challenges: &p.challenges,
            permuted_commitment: &p.lookup_permuted_commitments_vec[i][j],
            product_commitment: &p.lookup_product_commitments_vec[i][j],
            product_eval: &p.lookup_product_evals_vec[i][j],
            product_next_eval: &p.lookup_product_next_evals_vec[i][j],
            permuted_input_eval: &p.lookup_permuted_input_evals_vec[i][j],
            permuted_input_inv_eval: &p.lookup_permuted_input_inv_evals_vec[i][j],
            permuted_table_eval: &p.lookup_permuted_table_evals_vec[i][j],
            points: &p.points,
        })
    }

    fn check_circuit(&self, i: usize) -> Result<(), ProjectionError> {
        let num_circuits = self.num_circuits();
        if i >= num_circuits {
            return Err(ProjectionError::CircuitIndexOutOfBounds {
                index: i,
                num_circuits,
            });
        }
        Ok(())
    }
}

fn check_len(
    circuit: usize,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ShapeError> {
    if expected != actual {
        return Err(ShapeError::PerCircuitLength {
            circuit,
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_shape<F, C>(p: &ProofParts<F, C>) -> Result<(), ShapeError> {
    let num_circuits = p.advices_commitments_vec.len();
    let per_circuit = [
        ("instance_evals_vec", p.instance_evals_vec.len()),
        ("advice_evals_vec", p.advice_evals_vec.len()),
        (
            "lookup_permuted_commitments_vec",
            p.lookup_permuted_commitments_vec.len(),
        ),
        (
            "lookup_product_commitments_vec",
            p.lookup_product_commitments_vec.len(),
        ),
        ("lookup_product_evals_vec", p.lookup_product_evals_vec.len()),
        (
            "lookup_product_next_evals_vec",
            p.lookup_product_next_evals_vec.len(),
        ),
        (
            "lookup_permuted_input_evals_vec",
            p.lookup_permuted_input_evals_vec.len(),
        ),
        (
            "lookup_permuted_input_inv_evals_vec",
            p.lookup_permuted_input_inv_evals_vec.len(),
        ),
        (
            "lookup_permuted_table_evals_vec",
            p.lookup_permuted_table_evals_vec.len(),
        ),
        (
            "permutation_product_commitments_vec",
            p.permutation_product_commitments_vec.len(),
        ),
        (
            "permutation_product_evals_vec",
            p.permutation_product_evals_vec.len(),
        ),
        (
            "permutation_product_next_evals_vec",
            p.permutation_product_next_evals_vec.len(),
        ),
        (
            "permutation_product_last_evals_vec",
            p.permutation_product_last_evals_vec.len(),
        ),
    ];
    for (field, actual) in per_circuit {
        if actual != num_circuits {
            return Err(ShapeError::NumCircuits {
                field,
                expected: num_circuits,
                actual,
            });
        }
    }

    for i in 0..num_circuits {
        let num_lookups = p.lookup_permuted_commitments_vec[i].len();
        check_len(
            i,
            "lookup_product_commitments_vec",
            num_lookups,
            p.lookup_product_commitments_vec[i].len(),
        )?;
        check_len(
            i,
            "lookup_product_evals_vec",
            num_lookups,
            p.lookup_product_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "lookup_product_next_evals_vec",
            num_lookups,
            p.lookup_product_next_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "lookup_permuted_input_evals_vec",
            num_lookups,
            p.lookup_permuted_input_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "lookup_permuted_input_inv_evals_vec",
            num_lookups,
            p.lookup_permuted_input_inv_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "lookup_permuted_table_evals_vec",
            num_lookups,
            p.lookup_permuted_table_evals_vec[i].len(),
        )?;

        let num_chunks = p.permutation_product_commitments_vec[i].len();
        check_len(
            i,
            "permutation_product_evals_vec",
            num_chunks,
            p.permutation_product_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "permutation_product_next_evals_vec",
            num_chunks,
            p.permutation_product_next_evals_vec[i].len(),
        )?;
        check_len(
            i,
            "permutation_product_last_evals_vec",
            num_chunks,
            p.permutation_product_last_evals_vec[i].len(),
        )?;

        for (chunk, last_eval) in p.permutation_product_last_evals_vec[i].iter().enumerate() {
            let is_final = chunk + 1 == num_chunks;
            match (is_final, last_eval) {
                (true, Some(_)) => {
                    return Err(ShapeError::UnexpectedLastEval { circuit: i, chunk })
                }
                (false, None) => return Err(ShapeError::MissingLastEval { circuit: i, chunk }),
                _ => {}
            }
        }
    }

    Ok(())
}


#[cfg(test)]
mod should {
    use super::{fixtures::*, *};
    use crate::{Fr, G1};
    use ark_ff::{AdditiveGroup, Field};
    use rstest::{fixture, rstest};
    use tracing_test::traced_test;

    #[fixture]
    fn parts() -> ProofParts<Fr, G1> {
        proof_parts(&[circuit(2, 3), circuit(1, 2)])
    }

    #[rstest]
    fn accept_a_well_shaped_proof(parts: ProofParts<Fr, G1>) {
        let proof = Proof::new(parts.clone()).unwrap();
        assert_eq!(proof.num_circuits(), 2);
        assert_eq!(proof.num_lookups(0), Ok(2));
        assert_eq!(proof.num_lookups(1), Ok(1));
        assert_eq!(proof.num_permutation_chunks(0), Ok(3));
        assert_eq!(proof.into_parts(), parts);
    }

    #[rstest]
    fn accept_a_proof_without_circuits(parts: ProofParts<Fr, G1>) {
        let empty = proof_parts(&[]);
        let proof = Proof::new(empty).unwrap();
        assert_eq!(proof.num_circuits(), 0);
        assert_eq!(
            proof.vanishing_verification_data(0).unwrap_err(),
            ProjectionError::CircuitIndexOutOfBounds {
                index: 0,
                num_circuits: 0
            }
        );
        // Shared fields don't depend on the circuit count.
        assert_eq!(proof.common_permutation_evals.len(), parts.common_permutation_evals.len());
    }

    #[test]
    fn omit_the_last_eval_only_on_the_final_chunk() {
        let proof = Proof::new(single_circuit(0, 3)).unwrap();
        let last_evals = &proof.permutation_product_last_evals_vec[0];
        assert_eq!(last_evals.len(), 3);
        assert!(last_evals[0].is_some());
        assert!(last_evals[1].is_some());
        assert!(last_evals[2].is_none());
    }

    #[test]
    fn expose_one_lookup_entry_per_lookup() {
        let proof = Proof::new(single_circuit(4, 1)).unwrap();
        assert_eq!(proof.lookup_product_evals_vec[0].len(), 4);
        assert_eq!(proof.lookup_permuted_input_evals_vec[0].len(), 4);
        assert_eq!(proof.lookup_permuted_table_evals_vec[0].len(), 4);
    }

    #[rstest]
    fn compare_proofs_structurally(parts: ProofParts<Fr, G1>) {
        let proof = Proof::new(parts.clone()).unwrap();
        assert_eq!(proof, Proof::new(parts.clone()).unwrap());

        let mut other = parts.clone();
        other.fixed_evals.reverse();
        assert_ne!(proof, Proof::new(other).unwrap());

        let mut other = parts.clone();
        other.points.l_blind += Fr::ONE;
        assert_ne!(proof, Proof::new(other).unwrap());

        let mut other = parts;
        other.permutation_product_last_evals_vec[1][0] = Some(Fr::ZERO);
        assert_ne!(proof, Proof::new(other).unwrap());
    }

    mod reject {
        use super::*;

        #[test]
        #[traced_test]
        fn a_proof_with_a_missing_circuit_entry() {
            let mut invalid = proof_parts(&[circuit(2, 3), circuit(1, 2)]);
            invalid.advice_evals_vec.pop();
            assert_eq!(
                Proof::new(invalid).unwrap_err(),
                ShapeError::NumCircuits {
                    field: "advice_evals_vec",
                    expected: 2,
                    actual: 1
                }
            );
            assert!(logs_contain("rejecting malformed proof"));
        }

        #[rstest]
        fn a_proof_with_a_lookup_sequence_of_the_wrong_length(parts: ProofParts<Fr, G1>) {
            let mut invalid = parts;
            invalid.lookup_permuted_input_inv_evals_vec[1].push(Fr::ONE);
            assert_eq!(
                Proof::try_from(invalid).unwrap_err(),
                ShapeError::PerCircuitLength {
                    circuit: 1,
                    field: "lookup_permuted_input_inv_evals_vec",
                    expected: 1,
                    actual: 2
                }
            );
        }

        #[rstest]
        fn a_proof_with_a_chunk_count_mismatch(parts: ProofParts<Fr, G1>) {
            let mut invalid = parts;
            invalid.permutation_product_next_evals_vec[0].pop();
            assert_eq!(
                Proof::new(invalid).unwrap_err(),
                ShapeError::PerCircuitLength {
                    circuit: 0,
                    field: "permutation_product_next_evals_vec",
                    expected: 3,
                    actual: 2
                }
            );
        }

        #[rstest]
        fn a_proof_missing_a_last_eval_before_the_final_chunk(parts: ProofParts<Fr, G1>) {
            let mut invalid = parts;
            invalid.permutation_product_last_evals_vec[0][1] = None;
            assert_eq!(
                Proof::new(invalid).unwrap_err(),
                ShapeError::MissingLastEval {
                    circuit: 0,
                    chunk: 1
                }
            );
        }

        #[rstest]
        fn a_proof_with_a_last_eval_on_the_final_chunk(parts: ProofParts<Fr, G1>) {
            let mut invalid = parts;
            invalid.permutation_product_last_evals_vec[1][1] = Some(Fr::ZERO);
            assert_eq!(
                Proof::new(invalid).unwrap_err(),
                ShapeError::UnexpectedLastEval {
                    circuit: 1,
                    chunk: 1
                }
            );
        }

        #[rstest]
        fn lookup_queries_on_a_circuit_that_does_not_exist(parts: ProofParts<Fr, G1>) {
            let proof = Proof::new(parts).unwrap();
            assert_eq!(
                proof.num_lookups(2),
                Err(ProjectionError::CircuitIndexOutOfBounds {
                    index: 2,
                    num_circuits: 2
                })
            );
            assert_eq!(
                proof.num_permutation_chunks(5),
                Err(ProjectionError::CircuitIndexOutOfBounds {
                    index: 5,
                    num_circuits: 2
                })
            );
        }
    }
}
