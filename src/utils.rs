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

use alloc::{format, string::String};

use crate::{Fq, Fr, U256};
use ark_ff::PrimeField;

pub(crate) trait IntoU256 {
    fn into_u256(self) -> U256;
}

impl IntoU256 for &[u8; 32] {
    fn into_u256(self) -> U256 {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(self.rchunks_exact(8)) {
            let mut be = [0u8; 8];
            be.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(be);
        }

        U256::new(limbs)
    }
}

impl IntoU256 for [u8; 32] {
    fn into_u256(self) -> U256 {
        (&self).into_u256()
    }
}

/// Trait for returning a big-endian representation of some object as a `[u8; 32]`.
pub(crate) trait IntoBEBytes32 {
    fn into_be_bytes32(self) -> [u8; 32];
}

impl IntoBEBytes32 for U256 {
    fn into_be_bytes32(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.rchunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }
}

impl IntoBEBytes32 for Fr {
    fn into_be_bytes32(self) -> [u8; 32] {
        self.into_bigint().into_be_bytes32()
    }
}

impl IntoBEBytes32 for Fq {
    fn into_be_bytes32(self) -> [u8; 32] {
        self.into_bigint().into_be_bytes32()
    }
}

pub(crate) fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Splits `len` bytes off the front of `data`, or returns `None` leaving `data` untouched.
pub(crate) fn take_bytes<'a>(data: &mut &'a [u8], len: usize) -> Option<&'a [u8]> {
    if data.len() < len {
        return None;
    }
    let (head, tail) = data.split_at(len);
    *data = tail;
    Some(head)
}

/// Reads a 32-byte big-endian word from the front of `data`.
pub(crate) fn read_u256(data: &mut &[u8]) -> Option<U256> {
    let chunk = take_bytes(data, 32)?;
    let mut word = [0u8; 32];
    word.copy_from_slice(chunk);
    Some(word.into_u256())
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn convert_big_endian_words_to_u256_and_back() {
        let word = hex_literal::hex!(
            "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
        );
        let value = word.into_u256();
        assert_eq!(value.0[0], 0x191a1b1c1d1e1f20);
        assert_eq!(value.0[3], 0x0102030405060708);
        assert_eq!(value.into_be_bytes32(), word);
    }

    #[test]
    fn take_bytes_only_when_enough_are_left() {
        let buffer = [1u8, 2, 3];
        let mut data = &buffer[..];
        assert_eq!(take_bytes(&mut data, 2), Some(&[1u8, 2][..]));
        assert_eq!(take_bytes(&mut data, 2), None);
        assert_eq!(data, &[3u8][..]);
    }
}
