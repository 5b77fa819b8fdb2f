//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use ratatui::buffer::Buffer;
use std::path::PathBuf;
use tempfile::TempDir;

/// Let spawned tasks run after virtual time moved.
pub async fn flush() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused clock by `ms` and let woken tasks run. Pending
/// tasks are flushed first so freshly spawned timers are registered
/// before the clock moves.
pub async fn advance_ms(ms: u64) {
    flush().await;
    tokio::time::advance(std::time::Duration::from_millis(ms)).await;
    flush().await;
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Render a buffer as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
