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

use crate::{
    proof::fixtures::{circuit, domain, proof_parts},
    Fr, Proof, ProjectionError, ProofShape, G1,
};
use alloc::vec::Vec;
use rstest::{fixture, rstest};

// Circuit 0 has one lookup and two permutation chunks, circuit 1 has no
// lookups and a single chunk.
#[fixture]
fn proof() -> Proof<Fr, G1> {
    Proof::new(proof_parts(&[circuit(1, 2), circuit(0, 1)])).unwrap()
}

#[rstest]
fn expose_every_sub_argument_of_a_two_circuit_proof(proof: Proof<Fr, G1>) {
    assert_eq!(proof.num_circuits(), 2);

    for i in 0..proof.num_circuits() {
        let vanishing = proof.vanishing_verification_data(i).unwrap();
        assert_eq!(vanishing.advice_evals, &proof.advice_evals_vec[i][..]);
    }

    let permutation = proof.permutation_verification_data(0).unwrap();
    assert_eq!(permutation.num_chunks(), 2);
    assert_eq!(
        permutation
            .product_last_evals
            .iter()
            .map(Option::is_some)
            .collect::<Vec<_>>(),
        [true, false]
    );

    let permutation = proof.permutation_verification_data(1).unwrap();
    assert_eq!(permutation.product_last_evals.len(), 1);
    assert_eq!(permutation.product_last_evals[0], None);

    let lookup = proof.lookup_verification_data(0, 0).unwrap();
    assert_eq!(
        lookup.permuted_commitment,
        &proof.lookup_permuted_commitments_vec[0][0]
    );
    assert_eq!(lookup.x_prev(), &proof.points().x_prev);

    assert_eq!(
        proof.lookup_verification_data(1, 0).unwrap_err(),
        ProjectionError::LookupIndexOutOfBounds {
            circuit: 1,
            index: 0,
            num_lookups: 0
        }
    );
}

#[rstest]
fn survive_an_encoding_round_trip(proof: Proof<Fr, G1>) {
    let shape = ProofShape::of(&proof);
    let decoded = Proof::<Fr, G1>::from_bytes(&proof.to_bytes(), &shape, &domain()).unwrap();
    assert_eq!(decoded, proof);

    let lookup = decoded.lookup_verification_data(0, 0).unwrap();
    assert_eq!(lookup, proof.lookup_verification_data(0, 0).unwrap());
}

#[rstest]
fn share_one_set_of_evaluation_points_across_views(proof: Proof<Fr, G1>) {
    let permutation = proof.permutation_verification_data(0).unwrap();
    let lookup = proof.lookup_verification_data(0, 0).unwrap();
    assert!(core::ptr::eq(permutation.beta(), lookup.beta()));
    assert!(core::ptr::eq(permutation.l_first(), lookup.l_first()));
}
