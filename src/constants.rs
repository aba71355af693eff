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

// Scalar size (in bytes)
pub const FIELD_ELEMENT_SIZE: usize = 32;
// G1 Point Size (in bytes)
pub const GROUP_ELEMENT_SIZE: usize = 64;

// theta, beta, gamma, y and x
pub const NUM_NAMED_CHALLENGES: usize = 5;

// Permuted input, permuted table and grand product commitments
pub const NUM_LOOKUP_COMMITMENTS: usize = 3;
// Product, product next, permuted input, permuted input inv and permuted table evals
pub const NUM_LOOKUP_EVALUATIONS: usize = 5;

// Product and product next evals (the last eval is absent on the final chunk)
pub const NUM_PERMUTATION_CHUNK_EVALUATIONS: usize = 2;

// vanishing_random_poly_commitment
pub const NUM_VANISHING_COMMITMENTS: usize = 1;
// vanishing_random_eval
pub const NUM_VANISHING_EVALUATIONS: usize = 1;
