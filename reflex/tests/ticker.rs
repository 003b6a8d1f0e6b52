//! Tests for the periodic ticker.

use std::time::Duration;

use reflex::ticker::Ticker;

#[tokio::test]
async fn test_ticker_updates_state() {
    let ticker = Ticker::start(Duration::from_millis(10));
    let clock = ticker.state();
    let before = clock.revision();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(clock.revision() > before, "clock never ticked");
    assert!(clock.is_dirty());
}

#[tokio::test]
async fn test_stop_cancels_updates() {
    let ticker = Ticker::start(Duration::from_millis(10));
    let clock = ticker.state();

    tokio::time::sleep(Duration::from_millis(50)).await;
    ticker.stop();
    // Give any in-flight tick time to land before sampling.
    tokio::time::sleep(Duration::from_millis(20)).await;
    let frozen = clock.revision();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(clock.revision(), frozen, "ticker kept running after stop");
}

#[tokio::test]
async fn test_drop_cancels_updates() {
    let ticker = Ticker::start(Duration::from_millis(10));
    let clock = ticker.state();
    drop(ticker);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let frozen = clock.revision();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(clock.revision(), frozen, "ticker kept running after drop");
}
