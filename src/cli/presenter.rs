//! Injectable presentation driver for the scripted walkthrough.
//!
//! The walkthrough narrates through this trait so the routing logic
//! and the demo script stay testable without a terminal or real
//! timing. The console implementation types narration out with a
//! per-character delay and pauses for Enter between sections; both
//! effects are cosmetic and can be disabled.

use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Presentation driver: narration output and section pacing
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Emit a line of narration with the typed-output effect
    async fn announce(&self, text: &str);

    /// Emit a line instantly (banners, rendered records)
    async fn show(&self, text: &str);

    /// Block until the user continues (Enter or EOF)
    async fn wait_for_continue(&self, prompt: &str);
}

/// Presenter writing to the terminal with optional pacing
pub struct ConsolePresenter {
    typing_delay: Duration,
    pause: bool,
}

impl ConsolePresenter {
    pub fn new(typing_delay_ms: u64, pause: bool) -> Self {
        Self {
            typing_delay: Duration::from_millis(typing_delay_ms),
            pause,
        }
    }

    /// Instant output, no pauses
    pub fn fast() -> Self {
        Self::new(0, false)
    }
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn announce(&self, text: &str) {
        if self.typing_delay.is_zero() {
            println!("{text}");
            return;
        }

        let mut stdout = std::io::stdout();
        for ch in text.chars() {
            print!("{ch}");
            let _ = stdout.flush();
            tokio::time::sleep(self.typing_delay).await;
        }
        println!();
    }

    async fn show(&self, text: &str) {
        println!("{text}");
    }

    async fn wait_for_continue(&self, prompt: &str) {
        if !self.pause {
            return;
        }

        use crate::cli::output::colors;
        print!("{}", colors::label(prompt));
        let _ = std::io::stdout().flush();

        // Any input continues; EOF counts as continue too.
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        let _ = reader.read_line(&mut line).await;
        println!();
    }
}

/// Presenter that records announcements, for tests
#[derive(Default)]
pub struct RecordingPresenter {
    announcements: std::sync::Mutex<Vec<String>>,
    pauses: std::sync::atomic::AtomicUsize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far
    pub fn announcements(&self) -> Vec<String> {
        self.announcements.lock().expect("lock poisoned").clone()
    }

    /// All announcements joined with newlines
    pub fn transcript(&self) -> String {
        self.announcements().join("\n")
    }

    /// Number of continue pauses requested
    pub fn pause_count(&self) -> usize {
        self.pauses.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn announce(&self, text: &str) {
        self.announcements
            .lock()
            .expect("lock poisoned")
            .push(text.to_string());
    }

    async fn show(&self, text: &str) {
        self.announcements
            .lock()
            .expect("lock poisoned")
            .push(text.to_string());
    }

    async fn wait_for_continue(&self, _prompt: &str) {
        self.pauses
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
