//! Concurrent selection: exactly one caller wins and every reader sees the
//! winner's fully built parameters.

use std::sync::{Arc, Barrier};
use std::thread;

use fedchain_consensus::{params, select_params, ChainParamsError};
use fedchain_core::types::Network;
use fedchain_testkit::{concat_pubkeys, TestContext};

#[test]
fn only_one_concurrent_selection_succeeds() {
    let mut ctx = TestContext::new(0xc0c0);
    let configs: Vec<String> = ctx
        .federation_keys(8)
        .chunks(1)
        .map(concat_pubkeys)
        .collect();

    let barrier = Arc::new(Barrier::new(configs.len()));
    let handles: Vec<_> = configs
        .into_iter()
        .map(|config| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                select_params(Network::Regtest, &config, None).map(|p| p.aggregate_pubkey().to_hex())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners: Vec<&String> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);

    for result in &results {
        if let Err(err) = result {
            assert!(matches!(err, ChainParamsError::AlreadySelected { .. }));
        }
    }

    let installed = params().unwrap();
    assert_eq!(&installed.aggregate_pubkey().to_hex(), winners[0]);
}
