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

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;
extern crate core;

pub mod codec;
mod constants;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod permutation;
pub mod points;
pub mod proof;
pub mod shape;
mod utils;
pub mod vanishing;

#[cfg(test)]
mod should;

pub use codec::{ProofError, ProofField, WireElement};
pub use domain::EvaluationDomain;
pub use errors::{DomainError, ProjectionError, ShapeError};
pub use lookup::LookupVerificationData;
pub use permutation::{PermutationChunk, PermutationVerificationData};
pub use points::{Challenges, EvaluationPoints};
pub use proof::{LookupPair, Proof, ProofParts};
pub use shape::{CircuitShape, ProofShape};
pub use vanishing::VanishingVerificationData;

/// Scalar field of BN254, the field proof evaluations live in.
pub type Fr = ark_bn254::Fr;
/// Base field of BN254.
pub type Fq = ark_bn254::Fq;
/// Commitments are BN254 G1 points in affine form.
pub type G1 = ark_bn254::G1Affine;
pub type U256 = ark_ff::BigInt<4>;
