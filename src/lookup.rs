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

use crate::{points::EvaluationPoints, proof::LookupPair};

/// Operands of one lookup argument of one circuit.
///
/// The permuted input is opened at `x` and `x_prev`, the permuted table at
/// `x` and the grand product at `x` and `x_next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupVerificationData<'a, F, C> {
    pub fixed_evals: &'a [F],
    pub advice_evals: &'a [F],
    pub instance_evals: &'a [F],
    pub challenges: &'a [F],
    pub permuted_commitment: &'a LookupPair<C>,
    pub product_commitment: &'a C,
    pub product_eval: &'a F,
    pub product_next_eval: &'a F,
    pub permuted_input_eval: &'a F,
    pub permuted_input_inv_eval: &'a F,
    pub permuted_table_eval: &'a F,
    pub(crate) points: &'a EvaluationPoints<F>,
}

impl<'a, F, C> LookupVerificationData<'a, F, C> {
    pub fn theta(&self) -> &'a F {
        &self.points.theta
    }

    pub fn beta(&self) -> &'a F {
        &self.points.beta
    }

    pub fn gamma(&self) -> &'a F {
        &self.points.gamma
    }

    pub fn x(&self) -> &'a F {
        &self.points.x
    }

    pub fn x_next(&self) -> &'a F {
        &self.points.x_next
    }

    pub fn x_prev(&self) -> &'a F {
        &self.points.x_prev
    }

    pub fn l_first(&self) -> &'a F {
        &self.points.l_first
    }

    pub fn l_blind(&self) -> &'a F {
        &self.points.l_blind
    }

    pub fn l_last(&self) -> &'a F {
        &self.points.l_last
    }
}

#[cfg(test)]
mod should {
    use crate::{
        errors::ProjectionError,
        proof::{
            fixtures::{circuit, proof_parts},
            Proof,
        },
        Fr, G1,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn proof() -> Proof<Fr, G1> {
        Proof::new(proof_parts(&[circuit(2, 1), circuit(3, 2)])).unwrap()
    }

    #[rstest]
    fn cross_index_every_lookup_field(proof: Proof<Fr, G1>) {
        for i in 0..proof.num_circuits() {
            for j in 0..proof.num_lookups(i).unwrap() {
                let data = proof.lookup_verification_data(i, j).unwrap();
                assert_eq!(
                    data.permuted_commitment,
                    &proof.lookup_permuted_commitments_vec[i][j]
                );
                assert_eq!(
                    data.product_commitment,
                    &proof.lookup_product_commitments_vec[i][j]
                );
                assert_eq!(data.product_eval, &proof.lookup_product_evals_vec[i][j]);
                assert_eq!(
                    data.product_next_eval,
                    &proof.lookup_product_next_evals_vec[i][j]
                );
                assert_eq!(
                    data.permuted_input_eval,
                    &proof.lookup_permuted_input_evals_vec[i][j]
                );
                assert_eq!(
                    data.permuted_input_inv_eval,
                    &proof.lookup_permuted_input_inv_evals_vec[i][j]
                );
                assert_eq!(
                    data.permuted_table_eval,
                    &proof.lookup_permuted_table_evals_vec[i][j]
                );
                assert_eq!(data.advice_evals, &proof.advice_evals_vec[i][..]);
                assert_eq!(data.instance_evals, &proof.instance_evals_vec[i][..]);
            }
        }
    }

    #[rstest]
    fn reference_the_shared_evaluation_points(proof: Proof<Fr, G1>) {
        let data = proof.lookup_verification_data(1, 2).unwrap();
        let points = proof.points();
        assert!(core::ptr::eq(data.theta(), &points.theta));
        assert!(core::ptr::eq(data.x_prev(), &points.x_prev));
        assert_eq!(data.beta(), &points.beta);
        assert_eq!(data.gamma(), &points.gamma);
        assert_eq!(data.x(), &points.x);
        assert_eq!(data.x_next(), &points.x_next);
        assert_eq!(data.l_first(), &points.l_first);
        assert_eq!(data.l_blind(), &points.l_blind);
        assert_eq!(data.l_last(), &points.l_last);
    }

    mod reject {
        use super::*;

        #[rstest]
        fn a_lookup_index_past_the_end_of_its_circuit(proof: Proof<Fr, G1>) {
            assert_eq!(
                proof.lookup_verification_data(0, 2).unwrap_err(),
                ProjectionError::LookupIndexOutOfBounds {
                    circuit: 0,
                    index: 2,
                    num_lookups: 2
                }
            );
            // Circuit 1 has a third lookup, circuit 0 doesn't.
            assert!(proof.lookup_verification_data(1, 2).is_ok());
        }

        #[rstest]
        fn a_circuit_index_past_the_end(proof: Proof<Fr, G1>) {
            assert_eq!(
                proof.lookup_verification_data(2, 0).unwrap_err(),
                ProjectionError::CircuitIndexOutOfBounds {
                    index: 2,
                    num_circuits: 2
                }
            );
        }
    }
}
