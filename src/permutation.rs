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

use crate::points::EvaluationPoints;

/// Operands of the permutation grand-product identity of one circuit.
///
/// The product polynomial is split into chunks; each chunk has a commitment,
/// its eval at `x` and at `x_next`, and, on every chunk but the final one, its
/// eval at `x_last` which links it to the next chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationVerificationData<'a, F, C> {
    pub fixed_evals: &'a [F],
    pub advice_evals: &'a [F],
    pub instance_evals: &'a [F],
    pub challenges: &'a [F],
    pub product_commitments: &'a [C],
    pub common_evals: &'a [F],
    pub product_evals: &'a [F],
    pub product_next_evals: &'a [F],
    pub product_last_evals: &'a [Option<F>],
    pub(crate) points: &'a EvaluationPoints<F>,
}

/// One chunk of the permutation grand product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationChunk<'a, F, C> {
    pub index: usize,
    pub commitment: &'a C,
    pub eval: &'a F,
    pub next_eval: &'a F,
    // None on the final chunk
    pub last_eval: Option<&'a F>,
}

impl<'a, F, C> PermutationChunk<'a, F, C> {
    pub fn is_final(&self) -> bool {
        self.last_eval.is_none()
    }
}

impl<'a, F, C> PermutationVerificationData<'a, F, C> {
    pub fn num_chunks(&self) -> usize {
        self.product_commitments.len()
    }

    /// Iterates over the chunks in order, pairing each commitment with its evals.
    pub fn chunks(&self) -> impl Iterator<Item = PermutationChunk<'a, F, C>> + 'a {
        self.product_commitments
            .iter()
            .zip(self.product_evals)
            .zip(self.product_next_evals)
            .zip(self.product_last_evals)
            .enumerate()
            .map(
                |(index, (((commitment, eval), next_eval), last_eval))| PermutationChunk {
                    index,
                    commitment,
                    eval,
                    next_eval,
                    last_eval: last_eval.as_ref(),
                },
            )
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

    pub fn x_last(&self) -> &'a F {
        &self.points.x_last
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
