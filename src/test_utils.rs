#![allow(missing_docs)]

use std::path::PathBuf;

use axum_test::TestServer;

use crate::{AppState, TransactionStore, build_router};

/// Build a test server over the full router with `store` as its only state.
///
/// Uses UTC as the local timezone and the crate's `static` directory.
pub(crate) fn get_test_server(store: TransactionStore) -> TestServer {
    let state = AppState::new(store, "Etc/UTC").expect("Could not create app state.");
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

    TestServer::try_new(build_router(state, static_dir)).expect("Could not create test server.")
}
