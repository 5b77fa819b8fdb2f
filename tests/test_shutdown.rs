use counterflow::shutdown::ShutdownCoordinator;
use std::time::Duration;

#[tokio::test]
async fn test_coordinator_starts_running() {
    let coordinator = ShutdownCoordinator::new();
    assert!(!coordinator.is_shutting_down());
    assert!(!coordinator.handle().is_shutting_down());
}

#[tokio::test]
async fn test_wait_returns_immediately_when_already_signaled() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.signal();

    let handle = coordinator.handle();
    tokio::time::timeout(Duration::from_millis(100), handle.wait())
        .await
        .expect("wait should not block after signal");
}

#[tokio::test]
async fn test_handle_signal_wakes_waiters() {
    let coordinator = ShutdownCoordinator::new();
    let waiter = coordinator.handle();
    let task = tokio::spawn(async move { waiter.wait().await });

    tokio::task::yield_now().await;
    coordinator.handle().signal();

    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("waiter not woken")
        .unwrap();
    assert!(coordinator.is_shutting_down());
}

#[tokio::test]
async fn test_signal_is_idempotent() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.signal();
    coordinator.signal();
    assert!(coordinator.is_shutting_down());
}
