
/// Routes `log` output through the test harness. Run with e.g.
/// `RUST_LOG=bintree=trace` to see it.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
