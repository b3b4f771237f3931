use proptest::test_runner::Config;

/// Configuration for proptest tests.
///
/// Codec cases are cheap, so run more of them than the default. Disable FS I/O in Miri.
pub(crate) fn proptest_cfg() -> Config {
    #[cfg(miri)]
    {
        Config {
            failure_persistence: None,
            cases: 5,
            ..Config::default()
        }
    }
    #[cfg(not(miri))]
    {
        Config {
            cases: 1024,
            ..Config::default()
        }
    }
}
