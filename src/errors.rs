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

use core::fmt;
use snafu::Snafu;

use crate::{
    codec::ProofField,
    utils::{to_hex_string, IntoBEBytes32},
    U256,
};

/// A proof whose sequences violate a length or nesting invariant.
///
/// Verifiers must treat this as a malformed proof and reject it.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ShapeError {
    /// A per-circuit sequence does not have one entry per circuit.
    #[snafu(display(
        "Field '{field}' has {actual} circuit entries. Expected: {expected}"
    ))]
    NumCircuits {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// An inner sequence of circuit `circuit` has the wrong length.
    #[snafu(display(
        "Field '{field}' of circuit {circuit} has length {actual}. Expected: {expected}"
    ))]
    PerCircuitLength {
        circuit: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A circuit-independent sequence has the wrong length.
    #[snafu(display("Field '{field}' has length {actual}. Expected: {expected}"))]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A non-final permutation chunk has no last-row evaluation.
    #[snafu(display(
        "Missing permutation product last eval for chunk {chunk} of circuit {circuit}"
    ))]
    MissingLastEval { circuit: usize, chunk: usize },
    /// The final permutation chunk carries a last-row evaluation.
    #[snafu(display(
        "Unexpected permutation product last eval on final chunk {chunk} of circuit {circuit}"
    ))]
    UnexpectedLastEval { circuit: usize, chunk: usize },
}

/// A verification-data view was requested for an index the proof does not have.
///
/// This is always a caller defect, never a property of the proof.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ProjectionError {
    #[snafu(display("Circuit index {index} out of bounds. Number of circuits: {num_circuits}"))]
    CircuitIndexOutOfBounds { index: usize, num_circuits: usize },
    #[snafu(display(
        "Lookup index {index} out of bounds for circuit {circuit}. Number of lookups: {num_lookups}"
    ))]
    LookupIndexOutOfBounds {
        circuit: usize,
        index: usize,
        num_lookups: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum DomainError {
    #[snafu(display("Unsupported domain size 2^{k}. Maximum: 2^{max_k}"))]
    UnsupportedSize { k: u32, max_k: u32 },
    #[snafu(display("{blinding_factors} blinding factors leave no usable rows in a domain of size {n}"))]
    TooManyBlindingFactors { blinding_factors: usize, n: u64 },
    #[snafu(display("Evaluation point lies in the evaluation domain"))]
    PointInDomain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    InvalidSliceLength {
        actual_length: usize,
        expected_length: usize,
    },
    NotOnCurve,
    CoordinateExceedsModulus {
        coordinate_value: U256,
        modulus: U256,
    },
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::InvalidSliceLength {
                actual_length,
                expected_length,
            } => {
                write!(
                    f,
                    "Invalid Slice Length. Actual length: {actual_length}, Expected length: {expected_length}",
                )
            }
            GroupError::NotOnCurve => {
                write!(f, "Point not on curve")
            }
            GroupError::CoordinateExceedsModulus {
                coordinate_value,
                modulus,
            } => {
                write!(
                    f,
                    "Coordinate value {} exceeds base field modulus {}",
                    to_hex_string(&coordinate_value.into_be_bytes32()),
                    to_hex_string(&modulus.into_be_bytes32())
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidSliceLength {
        actual_length: usize,
        expected_length: usize,
    },
    NotMember,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidSliceLength {
                actual_length,
                expected_length,
            } => {
                write!(
                    f,
                    "Invalid Slice Length. Actual length: {actual_length}, Expected length: {expected_length}",
                )
            }
            FieldError::NotMember => {
                write!(f, "Value is not a canonical field element")
            }
        }
    }
}

/// Failure to read a single scalar or commitment from its byte encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    Group(GroupError),
    Field(FieldError),
}

impl From<GroupError> for ElementError {
    fn from(e: GroupError) -> Self {
        ElementError::Group(e)
    }
}

impl From<FieldError> for ElementError {
    fn from(e: FieldError) -> Self {
        ElementError::Field(e)
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementError::Group(e) => write!(f, "{e}"),
            ElementError::Field(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub cause: ElementError,
    pub field: ProofField,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            ElementError::Group(_) => write!(
                f,
                "Failed to convert data into an EC point for field \"{}\". Cause: {}",
                self.field, self.cause
            ),
            ElementError::Field(_) => write!(
                f,
                "Failed to convert data into a field element for field \"{}\". Cause: {}",
                self.field, self.cause
            ),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use alloc::string::ToString;
    use ark_bn254::Fq;
    use ark_ff::PrimeField;

    #[test]
    fn name_the_failing_index_when_a_lookup_is_out_of_bounds() {
        let err = ProjectionError::LookupIndexOutOfBounds {
            circuit: 1,
            index: 0,
            num_lookups: 0,
        };
        assert_eq!(
            err.to_string(),
            "Lookup index 0 out of bounds for circuit 1. Number of lookups: 0"
        );
    }

    #[test]
    fn name_the_offending_field_in_shape_errors() {
        let err = ShapeError::PerCircuitLength {
            circuit: 0,
            field: "lookup_product_evals_vec",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Field 'lookup_product_evals_vec' of circuit 0 has length 1. Expected: 2"
        );
    }

    #[test]
    fn render_coordinates_as_hex() {
        let err = GroupError::CoordinateExceedsModulus {
            coordinate_value: U256::from(1u64),
            modulus: Fq::MODULUS,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate value 0x0000000000000000000000000000000000000000000000000000000000000001 \
             exceeds base field modulus \
             0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
        );
    }

    #[test]
    fn describe_conversion_failures_with_their_location() {
        let err = ConversionError {
            cause: ElementError::Group(GroupError::NotOnCurve),
            field: ProofField::AdviceCommitment {
                circuit: 1,
                column: 2,
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to convert data into an EC point for field \"ADVICE_COMMITMENT[1][2]\". \
             Cause: Point not on curve"
        );
    }
}
