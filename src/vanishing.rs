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

/// Column evaluations of one circuit, as needed by the quotient identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VanishingVerificationData<'a, F> {
    pub fixed_evals: &'a [F],
    pub advice_evals: &'a [F],
    pub instance_evals: &'a [F],
    pub challenges: &'a [F],
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
        Proof::new(proof_parts(&[circuit(1, 2), circuit(0, 1), circuit(3, 1)])).unwrap()
    }

    #[rstest]
    fn borrow_the_evals_of_the_requested_circuit(proof: Proof<Fr, G1>) {
        for i in 0..proof.num_circuits() {
            let data = proof.vanishing_verification_data(i).unwrap();
            assert_eq!(data.advice_evals, &proof.advice_evals_vec[i][..]);
            assert_eq!(data.instance_evals, &proof.instance_evals_vec[i][..]);
            assert!(core::ptr::eq(data.advice_evals, &proof.advice_evals_vec[i][..]));
        }
    }

    #[rstest]
    fn share_the_circuit_independent_evals(proof: Proof<Fr, G1>) {
        let first = proof.vanishing_verification_data(0).unwrap();
        let last = proof.vanishing_verification_data(2).unwrap();
        assert!(core::ptr::eq(first.fixed_evals, last.fixed_evals));
        assert!(core::ptr::eq(first.challenges, &proof.challenges[..]));
    }

    #[rstest]
    fn reject_a_circuit_index_past_the_end(proof: Proof<Fr, G1>) {
        assert_eq!(
            proof.vanishing_verification_data(3),
            Err(ProjectionError::CircuitIndexOutOfBounds {
                index: 3,
                num_circuits: 3
            })
        );
    }
}
