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
use ark_ec::AffineRepr;
use ark_ff::{AdditiveGroup, FftField, PrimeField};
use core::fmt;
use snafu::Snafu;
use tracing::{debug, instrument};

use crate::{
    constants::{FIELD_ELEMENT_SIZE, GROUP_ELEMENT_SIZE},
    domain::EvaluationDomain,
    errors::{ConversionError, DomainError, ElementError, FieldError, GroupError},
    points::Challenges,
    proof::{LookupPair, Proof, ProofParts},
    shape::ProofShape,
    utils::{read_u256, IntoBEBytes32},
    Fq, Fr, G1,
};

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ProofError {
    #[snafu(display("Incorrect buffer size. Expected: {expected_size}; Got: {actual_size}",))]
    IncorrectBufferSize {
        expected_size: usize,
        actual_size: usize,
    },
    #[snafu(display("Element conversion error: {conv_error}"))]
    ElementConversionError { conv_error: ConversionError },
    #[snafu(display("Proof shape is too large to encode"))]
    ShapeTooLarge,
    #[snafu(display("Cannot derive evaluation points: {domain_error}"))]
    InvalidDomain { domain_error: DomainError },
}

/// Location of an element in the encoded proof.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ProofField {
    AdviceCommitment { circuit: usize, column: usize },
    Challenge(usize),
    Theta,
    LookupPermutedInputCommitment { circuit: usize, lookup: usize },
    LookupPermutedTableCommitment { circuit: usize, lookup: usize },
    Beta,
    Gamma,
    PermutationProductCommitment { circuit: usize, chunk: usize },
    LookupProductCommitment { circuit: usize, lookup: usize },
    VanishingRandomPolyCommitment,
    Y,
    VanishingHPolyCommitment(usize),
    X,
    InstanceEval { circuit: usize, query: usize },
    AdviceEval { circuit: usize, query: usize },
    FixedEval(usize),
    VanishingRandomEval,
    CommonPermutationEval(usize),
    PermutationProductEval { circuit: usize, chunk: usize },
    PermutationProductNextEval { circuit: usize, chunk: usize },
    PermutationProductLastEval { circuit: usize, chunk: usize },
    LookupProductEval { circuit: usize, lookup: usize },
    LookupProductNextEval { circuit: usize, lookup: usize },
    LookupPermutedInputEval { circuit: usize, lookup: usize },
    LookupPermutedInputInvEval { circuit: usize, lookup: usize },
    LookupPermutedTableEval { circuit: usize, lookup: usize },
}

impl fmt::Display for ProofField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofField::AdviceCommitment { circuit, column } => {
                write!(f, "ADVICE_COMMITMENT[{circuit}][{column}]")
            }
            ProofField::Challenge(i) => write!(f, "CHALLENGE[{i}]"),
            ProofField::Theta => write!(f, "THETA"),
            ProofField::LookupPermutedInputCommitment { circuit, lookup } => {
                write!(f, "LOOKUP_PERMUTED_INPUT_COMMITMENT[{circuit}][{lookup}]")
            }
            ProofField::LookupPermutedTableCommitment { circuit, lookup } => {
                write!(f, "LOOKUP_PERMUTED_TABLE_COMMITMENT[{circuit}][{lookup}]")
            }
            ProofField::Beta => write!(f, "BETA"),
            ProofField::Gamma => write!(f, "GAMMA"),
            ProofField::PermutationProductCommitment { circuit, chunk } => {
                write!(f, "PERMUTATION_PRODUCT_COMMITMENT[{circuit}][{chunk}]")
            }
            ProofField::LookupProductCommitment { circuit, lookup } => {
                write!(f, "LOOKUP_PRODUCT_COMMITMENT[{circuit}][{lookup}]")
            }
            ProofField::VanishingRandomPolyCommitment => {
                write!(f, "VANISHING_RANDOM_POLY_COMMITMENT")
            }
            ProofField::Y => write!(f, "Y"),
            ProofField::VanishingHPolyCommitment(i) => {
                write!(f, "VANISHING_H_POLY_COMMITMENT[{i}]")
            }
            ProofField::X => write!(f, "X"),
            ProofField::InstanceEval { circuit, query } => {
                write!(f, "INSTANCE_EVAL[{circuit}][{query}]")
            }
            ProofField::AdviceEval { circuit, query } => {
                write!(f, "ADVICE_EVAL[{circuit}][{query}]")
            }
            ProofField::FixedEval(i) => write!(f, "FIXED_EVAL[{i}]"),
            ProofField::VanishingRandomEval => write!(f, "VANISHING_RANDOM_EVAL"),
            ProofField::CommonPermutationEval(i) => write!(f, "COMMON_PERMUTATION_EVAL[{i}]"),
            ProofField::PermutationProductEval { circuit, chunk } => {
                write!(f, "PERMUTATION_PRODUCT_EVAL[{circuit}][{chunk}]")
            }
            ProofField::PermutationProductNextEval { circuit, chunk } => {
                write!(f, "PERMUTATION_PRODUCT_NEXT_EVAL[{circuit}][{chunk}]")
            }
            ProofField::PermutationProductLastEval { circuit, chunk } => {
                write!(f, "PERMUTATION_PRODUCT_LAST_EVAL[{circuit}][{chunk}]")
            }
            ProofField::LookupProductEval { circuit, lookup } => {
                write!(f, "LOOKUP_PRODUCT_EVAL[{circuit}][{lookup}]")
            }
            ProofField::LookupProductNextEval { circuit, lookup } => {
                write!(f, "LOOKUP_PRODUCT_NEXT_EVAL[{circuit}][{lookup}]")
            }
            ProofField::LookupPermutedInputEval { circuit, lookup } => {
                write!(f, "LOOKUP_PERMUTED_INPUT_EVAL[{circuit}][{lookup}]")
            }
            ProofField::LookupPermutedInputInvEval { circuit, lookup } => {
                write!(f, "LOOKUP_PERMUTED_INPUT_INV_EVAL[{circuit}][{lookup}]")
            }
            ProofField::LookupPermutedTableEval { circuit, lookup } => {
                write!(f, "LOOKUP_PERMUTED_TABLE_EVAL[{circuit}][{lookup}]")
            }
        }
    }
}

/// A proof element with a fixed-size byte encoding.
pub trait WireElement: Sized {
    const BYTE_SIZE: usize;

    fn write_to(&self, out: &mut Vec<u8>);

    /// Reads one element off the front of `data`.
    fn read_from(data: &mut &[u8]) -> Result<Self, ElementError>;
}

// Big-endian, canonical representatives only.
impl WireElement for Fr {
    const BYTE_SIZE: usize = FIELD_ELEMENT_SIZE;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.into_be_bytes32());
    }

    fn read_from(data: &mut &[u8]) -> Result<Self, ElementError> {
        let value = read_u256(data).ok_or(FieldError::InvalidSliceLength {
            actual_length: data.len(),
            expected_length: FIELD_ELEMENT_SIZE,
        })?;

        Fr::from_bigint(value).ok_or(FieldError::NotMember.into())
    }
}

// Big-endian x || y. The point at infinity is encoded as (0, 0).
impl WireElement for G1 {
    const BYTE_SIZE: usize = GROUP_ELEMENT_SIZE;

    fn write_to(&self, out: &mut Vec<u8>) {
        if self.infinity {
            out.extend_from_slice(&[0u8; GROUP_ELEMENT_SIZE]);
            return;
        }
        out.extend_from_slice(&self.x.into_be_bytes32());
        out.extend_from_slice(&self.y.into_be_bytes32());
    }

    fn read_from(data: &mut &[u8]) -> Result<Self, ElementError> {
        if data.len() < GROUP_ELEMENT_SIZE {
            return Err(GroupError::InvalidSliceLength {
                actual_length: data.len(),
                expected_length: GROUP_ELEMENT_SIZE,
            }
            .into());
        }

        let x = read_coordinate(data)?;
        let y = read_coordinate(data)?;

        if x == Fq::ZERO && y == Fq::ZERO {
            return Ok(G1::zero());
        }

        let point = G1::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(GroupError::NotOnCurve.into());
        }
        // Every point on the BN254 G1 curve is in the prime-order subgroup.
        debug_assert!(point.is_in_correct_subgroup_assuming_on_curve());

        Ok(point)
    }
}

fn read_coordinate(data: &mut &[u8]) -> Result<Fq, GroupError> {
    let value = read_u256(data).ok_or(GroupError::InvalidSliceLength {
        actual_length: data.len(),
        expected_length: FIELD_ELEMENT_SIZE,
    })?;

    Fq::from_bigint(value).ok_or(GroupError::CoordinateExceedsModulus {
        coordinate_value: value,
        modulus: Fq::MODULUS,
    })
}

fn read<T: WireElement>(data: &mut &[u8], field: ProofField) -> Result<T, ProofError> {
    T::read_from(data).map_err(|cause| ProofError::ElementConversionError {
        conv_error: ConversionError { cause, field },
    })
}

fn read_many<T: WireElement>(
    data: &mut &[u8],
    len: usize,
    field: impl Fn(usize) -> ProofField,
) -> Result<Vec<T>, ProofError> {
    (0..len).map(|i| read(data, field(i))).collect()
}

fn write_all<T: WireElement>(out: &mut Vec<u8>, elements: &[T]) {
    for element in elements {
        element.write_to(out);
    }
}

impl<F: WireElement, C: WireElement> Proof<F, C> {
    /// Encodes the proof in transcript order. Derived evaluation points are
    /// left out.
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = ProofShape::of(self).byte_size::<F, C>().unwrap_or_default();
        let mut out = Vec::with_capacity(capacity);
        let points = self.points();

        for commitments in &self.advices_commitments_vec {
            write_all(&mut out, commitments);
        }
        write_all(&mut out, &self.challenges);
        points.theta.write_to(&mut out);
        for pairs in &self.lookup_permuted_commitments_vec {
            for pair in pairs {
                pair.input.write_to(&mut out);
                pair.table.write_to(&mut out);
            }
        }
        points.beta.write_to(&mut out);
        points.gamma.write_to(&mut out);
        for commitments in &self.permutation_product_commitments_vec {
            write_all(&mut out, commitments);
        }
        for commitments in &self.lookup_product_commitments_vec {
            write_all(&mut out, commitments);
        }
        self.vanishing_random_poly_commitment.write_to(&mut out);
        points.y.write_to(&mut out);
        write_all(&mut out, &self.vanishing_h_poly_commitments);
        points.x.write_to(&mut out);

        for evals in &self.instance_evals_vec {
            write_all(&mut out, evals);
        }
        for evals in &self.advice_evals_vec {
            write_all(&mut out, evals);
        }
        write_all(&mut out, &self.fixed_evals);
        self.vanishing_random_eval.write_to(&mut out);
        write_all(&mut out, &self.common_permutation_evals);

        for i in 0..self.num_circuits() {
            for (chunk, eval) in self.permutation_product_evals_vec[i].iter().enumerate() {
                eval.write_to(&mut out);
                self.permutation_product_next_evals_vec[i][chunk].write_to(&mut out);
                if let Some(last_eval) = &self.permutation_product_last_evals_vec[i][chunk] {
                    last_eval.write_to(&mut out);
                }
            }
        }
        for i in 0..self.num_circuits() {
            for (lookup, eval) in self.lookup_product_evals_vec[i].iter().enumerate() {
                eval.write_to(&mut out);
                self.lookup_product_next_evals_vec[i][lookup].write_to(&mut out);
                self.lookup_permuted_input_evals_vec[i][lookup].write_to(&mut out);
                self.lookup_permuted_input_inv_evals_vec[i][lookup].write_to(&mut out);
                self.lookup_permuted_table_evals_vec[i][lookup].write_to(&mut out);
            }
        }

        out
    }
}

impl<F: WireElement + FftField, C: WireElement> Proof<F, C> {
    /// Decodes a proof of the given shape and derives its evaluation points
    /// over `domain`.
    #[instrument(skip_all, fields(num_circuits = shape.num_circuits()))]
    pub fn from_bytes(
        mut proof_bytes: &[u8],
        shape: &ProofShape,
        domain: &EvaluationDomain<F>,
    ) -> Result<Self, ProofError> {
        let expected_size = shape.byte_size::<F, C>().ok_or(ProofError::ShapeTooLarge)?;
        if proof_bytes.len() != expected_size {
            return Err(ProofError::IncorrectBufferSize {
                expected_size,
                actual_size: proof_bytes.len(),
            });
        }
        let data = &mut proof_bytes;
        let circuits = &shape.circuits;

        let advices_commitments_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                read_many(data, s.num_advice_columns, |column| {
                    ProofField::AdviceCommitment { circuit, column }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let challenges = read_many(data, shape.num_challenges, ProofField::Challenge)?;
        let theta = read(data, ProofField::Theta)?;
        let lookup_permuted_commitments_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                (0..s.num_lookups)
                    .map(|lookup| {
                        Ok::<_, ProofError>(LookupPair {
                            input: read(
                                data,
                                ProofField::LookupPermutedInputCommitment { circuit, lookup },
                            )?,
                            table: read(
                                data,
                                ProofField::LookupPermutedTableCommitment { circuit, lookup },
                            )?,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let beta = read(data, ProofField::Beta)?;
        let gamma = read(data, ProofField::Gamma)?;
        let permutation_product_commitments_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                read_many(data, s.num_permutation_chunks, |chunk| {
                    ProofField::PermutationProductCommitment { circuit, chunk }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let lookup_product_commitments_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                read_many(data, s.num_lookups, |lookup| {
                    ProofField::LookupProductCommitment { circuit, lookup }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let vanishing_random_poly_commitment =
            read(data, ProofField::VanishingRandomPolyCommitment)?;
        let y = read(data, ProofField::Y)?;
        let vanishing_h_poly_commitments =
            read_many(data, shape.num_h_pieces, ProofField::VanishingHPolyCommitment)?;
        let x = read(data, ProofField::X)?;

        let instance_evals_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                read_many(data, s.num_instance_queries, |query| {
                    ProofField::InstanceEval { circuit, query }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let advice_evals_vec = circuits
            .iter()
            .enumerate()
            .map(|(circuit, s)| {
                read_many(data, s.num_advice_queries, |query| {
                    ProofField::AdviceEval { circuit, query }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let fixed_evals = read_many(data, shape.num_fixed_queries, ProofField::FixedEval)?;
        let vanishing_random_eval = read(data, ProofField::VanishingRandomEval)?;
        let common_permutation_evals = read_many(
            data,
            shape.num_permutation_columns,
            ProofField::CommonPermutationEval,
        )?;

        let mut permutation_product_evals_vec = Vec::with_capacity(circuits.len());
        let mut permutation_product_next_evals_vec = Vec::with_capacity(circuits.len());
        let mut permutation_product_last_evals_vec = Vec::with_capacity(circuits.len());
        for (circuit, s) in circuits.iter().enumerate() {
            let num_chunks = s.num_permutation_chunks;
            let mut evals = Vec::with_capacity(num_chunks);
            let mut next_evals = Vec::with_capacity(num_chunks);
            let mut last_evals = Vec::with_capacity(num_chunks);
            for chunk in 0..num_chunks {
                evals.push(read(
                    data,
                    ProofField::PermutationProductEval { circuit, chunk },
                )?);
                next_evals.push(read(
                    data,
                    ProofField::PermutationProductNextEval { circuit, chunk },
                )?);
                let last_eval = if chunk + 1 < num_chunks {
                    Some(read(
                        data,
                        ProofField::PermutationProductLastEval { circuit, chunk },
                    )?)
                } else {
                    None
                };
                last_evals.push(last_eval);
            }
            permutation_product_evals_vec.push(evals);
            permutation_product_next_evals_vec.push(next_evals);
            permutation_product_last_evals_vec.push(last_evals);
        }

        let mut lookup_product_evals_vec = Vec::with_capacity(circuits.len());
        let mut lookup_product_next_evals_vec = Vec::with_capacity(circuits.len());
        let mut lookup_permuted_input_evals_vec = Vec::with_capacity(circuits.len());
        let mut lookup_permuted_input_inv_evals_vec = Vec::with_capacity(circuits.len());
        let mut lookup_permuted_table_evals_vec = Vec::with_capacity(circuits.len());
        for (circuit, s) in circuits.iter().enumerate() {
            let mut product_evals = Vec::with_capacity(s.num_lookups);
            let mut product_next_evals = Vec::with_capacity(s.num_lookups);
            let mut permuted_input_evals = Vec::with_capacity(s.num_lookups);
            let mut permuted_input_inv_evals = Vec::with_capacity(s.num_lookups);
            let mut permuted_table_evals = Vec::with_capacity(s.num_lookups);
            for lookup in 0..s.num_lookups {
                product_evals.push(read(data, ProofField::LookupProductEval { circuit, lookup })?);
                product_next_evals.push(read(
                    data,
                    ProofField::LookupProductNextEval { circuit, lookup },
                )?);
                permuted_input_evals.push(read(
                    data,
                    ProofField::LookupPermutedInputEval { circuit, lookup },
                )?);
                permuted_input_inv_evals.push(read(
                    data,
                    ProofField::LookupPermutedInputInvEval { circuit, lookup },
                )?);
                permuted_table_evals.push(read(
                    data,
                    ProofField::LookupPermutedTableEval { circuit, lookup },
                )?);
            }
            lookup_product_evals_vec.push(product_evals);
            lookup_product_next_evals_vec.push(product_next_evals);
            lookup_permuted_input_evals_vec.push(permuted_input_evals);
            lookup_permuted_input_inv_evals_vec.push(permuted_input_inv_evals);
            lookup_permuted_table_evals_vec.push(permuted_table_evals);
        }

        let points = domain
            .evaluation_points(Challenges {
                theta,
                beta,
                gamma,
                y,
                x,
            })
            .map_err(|domain_error| ProofError::InvalidDomain { domain_error })?;
        debug!(num_bytes = expected_size, k = domain.k(), "decoded proof");

        // Every sequence was sized from `shape`, so the parts are well-shaped.
        Ok(Proof::from_well_shaped(ProofParts {
            advices_commitments_vec,
            challenges,
            lookup_permuted_commitments_vec,
            permutation_product_commitments_vec,
            lookup_product_commitments_vec,
            vanishing_random_poly_commitment,
            vanishing_h_poly_commitments,
            instance_evals_vec,
            advice_evals_vec,
            fixed_evals,
            vanishing_random_eval,
            common_permutation_evals,
            permutation_product_evals_vec,
            permutation_product_next_evals_vec,
            permutation_product_last_evals_vec,
            lookup_product_evals_vec,
            lookup_product_next_evals_vec,
            lookup_permuted_input_evals_vec,
            lookup_permuted_input_inv_evals_vec,
            lookup_permuted_table_evals_vec,
            points,
        }))
    }
}
