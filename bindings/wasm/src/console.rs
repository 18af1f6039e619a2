use std::io;

use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[derive(Default)]
pub(crate) struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}
