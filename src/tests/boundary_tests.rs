#[cfg(test)]
mod tests {
    use crate::tests::test_utils::manual_clock;
    use crate::*;

    #[test]
    fn test_invalid_worker_id() {
        match Generator::new(DEFAULT_EPOCH, 1024) {
            Err(SnowflakeError::InvalidWorkerId { worker_id, max }) => {
                assert_eq!(worker_id, 1024);
                assert_eq!(max, 1023);
            }
            _ => panic!("Expected InvalidWorkerId error"),
        }
        assert!(SharedGenerator::new(DEFAULT_EPOCH, u16::MAX).is_err());
    }

    #[test]
    fn test_worker_id_boundaries() {
        for worker_id in [0, 1, 512, MAX_WORKER_ID] {
            let (_, clock) = manual_clock(1_700_000_000);
            let mut generator =
                Generator::with_clock(worker_id, GeneratorConfig::default(), clock).unwrap();
            let id = generator.next().unwrap();
            assert_eq!(id.worker(), worker_id);
            assert_eq!(id.sequence(), 0);
        }
    }

    #[test]
    fn test_component_max_values() {
        let id = Snowflake::new(MAX_TIMESTAMP, MAX_WORKER_ID, MAX_SEQUENCE);
        assert_eq!(id.timestamp(), MAX_TIMESTAMP);
        assert_eq!(id.worker(), MAX_WORKER_ID);
        assert_eq!(id.sequence(), MAX_SEQUENCE);
        assert_eq!(id.to_string(), "2199023255551-1023-4095");
        assert_eq!(id.as_u64(), i64::MAX as u64);
    }

    #[test]
    fn test_zero_id() {
        let id = Snowflake::new(0, 0, 0);
        assert_eq!(id, Snowflake::default());
        assert_eq!(id.to_string(), "0-0-0");
    }
}
