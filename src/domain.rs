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
use ark_ff::{batch_inversion, FftField};

use crate::{
    errors::DomainError,
    points::{Challenges, EvaluationPoints},
};

/// The multiplicative subgroup of size `2^k` the circuit rows are interpolated over.
///
/// The last `blinding_factors` rows hold random values; the row right before
/// them is the last usable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationDomain<F> {
    k: u32,
    n: u64,
    blinding_factors: usize,
    omega: F,
    omega_inv: F,
}

impl<F: FftField> EvaluationDomain<F> {
    pub fn new(k: u32, blinding_factors: usize) -> Result<Self, DomainError> {
        if k == 0 || k > F::TWO_ADICITY || k >= u64::BITS {
            return Err(DomainError::UnsupportedSize {
                k,
                max_k: F::TWO_ADICITY,
            });
        }
        let n = 1u64 << k;
        if blinding_factors as u64 >= n - 1 {
            return Err(DomainError::TooManyBlindingFactors { blinding_factors, n });
        }

        let omega = F::get_root_of_unity(n).ok_or(DomainError::UnsupportedSize {
            k,
            max_k: F::TWO_ADICITY,
        })?;
        // omega has order n >= 2, so it is never zero.
        let omega_inv = omega.inverse().ok_or(DomainError::UnsupportedSize {
            k,
            max_k: F::TWO_ADICITY,
        })?;

        Ok(Self {
            k,
            n,
            blinding_factors,
            omega,
            omega_inv,
        })
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn blinding_factors(&self) -> usize {
        self.blinding_factors
    }

    pub fn omega(&self) -> F {
        self.omega
    }

    // Index of the last row not reserved for blinding.
    pub fn last_usable_row(&self) -> u64 {
        self.n - self.blinding_factors as u64 - 1
    }

    /// Derives the full evaluation-point bundle for `challenges.x`.
    pub fn evaluation_points(
        &self,
        challenges: Challenges<F>,
    ) -> Result<EvaluationPoints<F>, DomainError> {
        let x = challenges.x;
        let x_n = x.pow([self.n]);

        // Rows: first, last usable, then the blinding rows.
        let last_usable_row = self.last_usable_row();
        let rows: Vec<u64> = core::iter::once(0).chain(last_usable_row..self.n).collect();
        let lagrange_evals = self.lagrange_evals_with_x_n(x, x_n, &rows)?;

        let l_first = lagrange_evals[0];
        let l_last = lagrange_evals[1];
        let l_blind = lagrange_evals[2..]
            .iter()
            .fold(F::ZERO, |acc, eval| acc + eval);

        Ok(EvaluationPoints {
            theta: challenges.theta,
            beta: challenges.beta,
            gamma: challenges.gamma,
            y: challenges.y,
            x,
            l_first,
            l_blind,
            l_last,
            x_next: x * self.omega,
            x_prev: x * self.omega_inv,
            x_last: x * self.omega_inv.pow([self.blinding_factors as u64 + 1]),
            x_n,
        })
    }

    /// Evaluates the Lagrange basis polynomials of `rows` at `x`.
    pub fn lagrange_evals(&self, x: F, rows: &[u64]) -> Result<Vec<F>, DomainError> {
        self.lagrange_evals_with_x_n(x, x.pow([self.n]), rows)
    }

    // L_r(x) = ω^r (x^n - 1) / (n (x - ω^r))
    fn lagrange_evals_with_x_n(&self, x: F, x_n: F, rows: &[u64]) -> Result<Vec<F>, DomainError> {
        let numerator = x_n - F::ONE;
        if numerator == F::ZERO {
            return Err(DomainError::PointInDomain);
        }

        let n = F::from(self.n);
        let omega_powers: Vec<F> = rows.iter().map(|row| self.omega.pow([*row])).collect();
        // x is not an n-th root of unity, so none of these is zero.
        let mut denominators: Vec<F> = omega_powers
            .iter()
            .map(|omega_power| n * (x - omega_power))
            .collect();
        batch_inversion(&mut denominators);

        Ok(omega_powers
            .into_iter()
            .zip(denominators)
            .map(|(omega_power, inv_denominator)| omega_power * numerator * inv_denominator)
            .collect())
    }
}
