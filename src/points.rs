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

/// The Fiat-Shamir challenges of a proof together with the rotations of `x`
/// and the Lagrange boundary evaluations derived from it.
///
/// A proof owns exactly one bundle and every verification-data view borrows
/// it, so all sub-arguments observe the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationPoints<F> {
    // Challenges
    pub theta: F,
    pub beta: F,
    pub gamma: F,
    pub y: F,
    pub x: F,
    // Lagrange basis evaluations at x
    pub l_first: F,
    pub l_blind: F,
    pub l_last: F,
    // Rotations of x
    pub x_next: F,
    pub x_prev: F,
    pub x_last: F,
    pub x_n: F,
}

/// The squeezed challenges a bundle is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenges<F> {
    pub theta: F,
    pub beta: F,
    pub gamma: F,
    pub y: F,
    pub x: F,
}

impl<F: Copy> EvaluationPoints<F> {
    pub fn challenges(&self) -> Challenges<F> {
        Challenges {
            theta: self.theta,
            beta: self.beta,
            gamma: self.gamma,
            y: self.y,
            x: self.x,
        }
    }
}
