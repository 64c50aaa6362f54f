//! `tracing` output to the browser console.
//!
//! Each formatted event is buffered and emitted as one console call when the
//! writer is dropped, routed by level so DevTools filtering works.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Hands out one [`ConsoleLine`] per event.
pub struct ConsoleWriter;

/// Buffer for one formatted event.
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => web_sys::console::error_1(&JsValue::from_str(line)),
            Level::WARN => web_sys::console::warn_1(&JsValue::from_str(line)),
            level => web_sys::console::log_2(
                &JsValue::from_str(&format!("%c{line}")),
                &JsValue::from_str(style_for(level)),
            ),
        }
    }
}

/// Console CSS for the levels that go through `console.log`.
fn style_for(level: Level) -> &'static str {
    match level {
        Level::INFO => "color: #00d4ff;",
        Level::DEBUG => "color: #888;",
        _ => "color: #555; font-size: 10px;",
    }
}
