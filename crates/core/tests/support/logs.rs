#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Subscriber writing plain-text lines into this buffer.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_target(true)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || sink.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Lines emitted under `target`.
    pub fn lines_for(&self, target: &str) -> Vec<String> {
        self.contents().lines().filter(|line| line.contains(target)).map(str::to_string).collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
