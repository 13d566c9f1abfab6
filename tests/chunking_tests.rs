#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use simd_r_checksum::{
        Algorithm, ChecksumBackend, ChecksumConfig, ChecksumError, IncrementalChecksum,
        MAX_CHUNK_SIZE,
    };
    use std::cell::RefCell;
    use std::io;

    /// Delegates to a real algorithm and records the length of every call.
    struct RecordingBackend {
        algorithm: Algorithm,
        calls: RefCell<Vec<usize>>,
    }

    impl RecordingBackend {
        fn new(algorithm: Algorithm) -> Self {
            Self {
                algorithm,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChecksumBackend for RecordingBackend {
        fn compute(&self, bytes: &[u8], previous: u32) -> u32 {
            self.calls.borrow_mut().push(bytes.len());
            self.algorithm.compute(bytes, previous)
        }
    }

    /// Never reads the bytes, so multi-hundred-MiB zeroed buffers stay untouched.
    #[derive(Default)]
    struct LengthOnlyBackend {
        calls: RefCell<Vec<usize>>,
    }

    impl ChecksumBackend for LengthOnlyBackend {
        fn compute(&self, bytes: &[u8], previous: u32) -> u32 {
            self.calls.borrow_mut().push(bytes.len());
            previous.wrapping_mul(31).wrapping_add(bytes.len() as u32)
        }
    }

    fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);
        data
    }

    /// Feeds `data` in consecutive pieces of `piece` bytes.
    fn checksum_in_pieces(
        algorithm: Algorithm,
        chunk_size: usize,
        data: &[u8],
        piece: usize,
    ) -> u32 {
        let mut crc = IncrementalChecksum::with_backend(algorithm, chunk_size).unwrap();
        let mut offset = 0;

        while offset < data.len() {
            let length = piece.min(data.len() - offset);
            crc.update(data, offset, length).unwrap();
            offset += length;
        }

        crc.value()
    }

    #[test]
    fn test_partition_invariance() {
        const CHUNK: usize = 64;
        let data = random_bytes(1000, 7);

        for algorithm in Algorithm::ALL {
            // Reference: one backend call over the whole input
            let reference = algorithm.checksum(&data);

            let pieces = [1, 7, CHUNK - 1, CHUNK, CHUNK + 1, 2 * CHUNK, 200, 999, 1000];
            for piece in pieces.into_iter().chain([5000]) {
                assert_eq!(
                    checksum_in_pieces(algorithm, CHUNK, &data, piece),
                    reference,
                    "{} with {} byte pieces",
                    algorithm,
                    piece
                );
            }
        }
    }

    #[test]
    fn test_random_partitions_match_single_update() {
        let data = random_bytes(4096, 11);
        let mut rng = StdRng::seed_from_u64(99);

        for algorithm in Algorithm::ALL {
            let mut single = IncrementalChecksum::with_backend(algorithm, 100).unwrap();
            single.update_slice(&data);

            for _ in 0..20 {
                let mut crc = IncrementalChecksum::with_backend(algorithm, 100).unwrap();
                let mut offset = 0;

                while offset < data.len() {
                    let length = rng.random_range(0..=300).min(data.len() - offset);
                    crc.update(&data, offset, length).unwrap();
                    offset += length;
                }

                assert_eq!(crc.value(), single.value());
                assert_eq!(crc.value(), algorithm.checksum(&data));
            }
        }
    }

    #[test]
    fn test_chunk_boundaries_terminate_and_cover_all_bytes() {
        const CHUNK: usize = 256;

        for (len, expected_calls) in [
            (CHUNK, vec![CHUNK]),
            (CHUNK + 1, vec![CHUNK, 1]),
            (2 * CHUNK, vec![CHUNK, CHUNK]),
            (3 * CHUNK - 1, vec![CHUNK, CHUNK, CHUNK - 1]),
        ] {
            let data = random_bytes(len, len as u64);
            let mut crc =
                IncrementalChecksum::with_backend(RecordingBackend::new(Algorithm::Crc32c), CHUNK)
                    .unwrap();
            crc.update(&data, 0, len).unwrap();

            let calls = crc.backend().calls.borrow().clone();
            assert_eq!(calls, expected_calls, "len={}", len);

            let expected = Algorithm::Crc32c.checksum(&data);
            assert_eq!(crc.value(), expected, "len={}", len);
        }
    }

    #[test]
    fn test_default_chunk_size_boundaries() {
        // One extra chunk of headroom for the `2 * MAX + 1` case
        let data = vec![0u8; 2 * MAX_CHUNK_SIZE + 1];

        for (len, expected_calls) in [
            (MAX_CHUNK_SIZE, vec![MAX_CHUNK_SIZE]),
            (MAX_CHUNK_SIZE + 1, vec![MAX_CHUNK_SIZE, 1]),
            (2 * MAX_CHUNK_SIZE, vec![MAX_CHUNK_SIZE, MAX_CHUNK_SIZE]),
            (2 * MAX_CHUNK_SIZE + 1, vec![MAX_CHUNK_SIZE, MAX_CHUNK_SIZE, 1]),
        ] {
            let mut crc =
                IncrementalChecksum::with_backend(LengthOnlyBackend::default(), MAX_CHUNK_SIZE)
                    .unwrap();
            crc.update(&data, 0, len).unwrap();

            let calls = crc.backend().calls.borrow();
            assert_eq!(*calls, expected_calls, "len={}", len);
            assert!(calls.iter().all(|&n| n > 0 && n <= MAX_CHUNK_SIZE));
        }
    }

    #[test]
    fn test_default_config_uses_max_chunk_size() {
        let crc = IncrementalChecksum::new(Algorithm::Crc32).unwrap();
        assert_eq!(crc.chunk_size(), MAX_CHUNK_SIZE);

        let config = ChecksumConfig::new().with_chunk_size(4096);
        let crc = IncrementalChecksum::with_config(Algorithm::Crc32c, &config).unwrap();
        assert_eq!(crc.chunk_size(), 4096);
        assert_eq!(crc.algorithm(), Algorithm::Crc32c);
    }

    #[test]
    fn test_zero_length_update_is_noop() {
        let data = random_bytes(64, 3);
        let mut crc =
            IncrementalChecksum::with_backend(RecordingBackend::new(Algorithm::Crc32), 16).unwrap();

        crc.update(&data, 0, 0).unwrap();
        crc.update(&data, 64, 0).unwrap();
        crc.update_slice(&[]);
        assert_eq!(crc.value(), 0);

        crc.update(&data, 10, 20).unwrap();
        let before = crc.value();
        let calls_before = crc.backend().calls.borrow().len();

        crc.update(&data, 30, 0).unwrap();
        assert_eq!(crc.value(), before);
        assert_eq!(crc.backend().calls.borrow().len(), calls_before);
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let data = random_bytes(300, 5);

        for algorithm in Algorithm::ALL {
            let mut reused = IncrementalChecksum::with_backend(algorithm, 32).unwrap();
            reused.update_slice(b"stale state from earlier input");
            reused.reset();
            assert_eq!(reused.value(), 0);
            reused.update_slice(&data);

            let mut fresh = IncrementalChecksum::with_backend(algorithm, 32).unwrap();
            fresh.update_slice(&data);

            assert_eq!(reused.value(), fresh.value());
            assert_eq!(reused.chunk_size(), 32);
        }
    }

    #[test]
    fn test_invalid_ranges_are_rejected_without_state_change() {
        let data = random_bytes(16, 1);
        let mut crc = IncrementalChecksum::new(Algorithm::Crc32c).unwrap();
        crc.update(&data, 0, 8).unwrap();
        let before = crc.value();

        assert_eq!(
            crc.update(&data, 10, 7),
            Err(ChecksumError::InvalidRange {
                offset: 10,
                length: 7,
                available: 16
            })
        );
        assert!(crc.update(&data, 17, 0).is_err());
        assert!(crc.update(&data, usize::MAX, 2).is_err());
        assert_eq!(crc.value(), before);

        // The instance is still usable afterwards
        crc.update(&data, 8, 8).unwrap();
        assert_eq!(crc.value(), Algorithm::Crc32c.checksum(&data));
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        assert_eq!(
            IncrementalChecksum::with_backend(Algorithm::Crc32, 0).err(),
            Some(ChecksumError::InvalidChunkSize(0))
        );

        let config = ChecksumConfig::new().with_chunk_size(0);
        let result = IncrementalChecksum::with_config(Algorithm::Crc32, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_reader_and_writer_paths() {
        let data = random_bytes(200_000, 21);

        for algorithm in Algorithm::ALL {
            let mut from_reader = IncrementalChecksum::with_backend(algorithm, 1000).unwrap();
            let consumed = from_reader.update_reader(&mut &data[..]).unwrap();
            assert_eq!(consumed, data.len() as u64);

            let mut from_copy = IncrementalChecksum::with_backend(algorithm, 1000).unwrap();
            io::copy(&mut &data[..], &mut from_copy).unwrap();

            assert_eq!(from_reader.value(), algorithm.checksum(&data));
            assert_eq!(from_copy.value(), algorithm.checksum(&data));
        }
    }

    #[test]
    fn test_independent_instances_across_threads() {
        let data = random_bytes(50_000, 8);
        let expected = Algorithm::Crc32c.checksum(&data);

        std::thread::scope(|scope| {
            for piece in [17usize, 512, 4096, 50_000] {
                let data = &data;
                scope.spawn(move || {
                    let value = checksum_in_pieces(Algorithm::Crc32c, 1024, data, piece);
                    assert_eq!(value, expected);
                });
            }
        });
    }
}
