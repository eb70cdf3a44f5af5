// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log output on stderr that can be held back while the picker owns the
//! terminal.
//!
//! Anything logged while held is buffered and written out once the terminal
//! is restored.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing_subscriber::fmt::writer::{EitherWriter, MakeWriter};
use tracing_subscriber::EnvFilter;

static HELD: AtomicBool = AtomicBool::new(false);
static BACKLOG: Mutex<Vec<u8>> = Mutex::new(Vec::new());

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env("NGFIND_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Stderr)
        .with_target(false)
        .init();
}

/// Hold log output until the returned guard is dropped.
pub fn hold() -> HoldGuard {
    HELD.store(true, Ordering::SeqCst);
    HoldGuard { _private: () }
}

pub struct HoldGuard {
    _private: (),
}

impl Drop for HoldGuard {
    fn drop(&mut self) {
        HELD.store(false, Ordering::SeqCst);
        let backlog = std::mem::take(&mut *lock_backlog());
        if !backlog.is_empty() {
            let _ = io::stderr().write_all(&backlog);
        }
    }
}

fn lock_backlog() -> std::sync::MutexGuard<'static, Vec<u8>> {
    BACKLOG.lock().unwrap_or_else(PoisonError::into_inner)
}

fn is_held() -> bool {
    HELD.load(Ordering::SeqCst)
}

/// `MakeWriter` that picks stderr or the backlog per event.
struct Stderr;

impl<'a> MakeWriter<'a> for Stderr {
    type Writer = EitherWriter<io::Stderr, Backlog>;

    fn make_writer(&'a self) -> Self::Writer {
        if is_held() {
            EitherWriter::B(Backlog)
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

struct Backlog;

impl Write for Backlog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock_backlog().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
