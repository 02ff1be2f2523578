/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "fuzz")]
#[test]
fn test_roundtrip_harness() {
    use adaptive_huffman::fuzz::roundtrip::*;
    use arbitrary::Arbitrary;
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    let mut rng = SmallRng::seed_from_u64(0);
    for len in (0..200).chain([1000, 10_000]) {
        let bytes: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        let mut unstructured = arbitrary::Unstructured::new(&bytes);
        if let Ok(case) = FuzzCase::arbitrary(&mut unstructured) {
            harness(case);
        }
    }
}
