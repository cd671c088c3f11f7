use code_collector::logger::initialize_logger;

#[test]
fn second_initialization_is_harmless() {
    initialize_logger(false, true);
    initialize_logger(true, true);
    tracing::warn!("still logging after re-initialization");
}
