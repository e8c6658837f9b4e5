use tracing::debug;

/// Splits a server-sent-events byte stream into `data:` payloads.
///
/// Bytes are buffered until a full line is available, so lines and UTF-8
/// sequences may be split across network chunks. Blank lines, `:` comments
/// and non-`data` fields produce nothing.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending_bytes: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending_bytes.extend_from_slice(bytes);

        let mut out = Vec::new();
        while let Some(pos) = self.pending_bytes.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending_bytes.drain(..=pos).collect();
            if let Some(data) = data_payload(&line[..pos]) {
                out.push(data);
            }
        }
        out
    }

    /// Flush a final line the server did not terminate with a newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending_bytes.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending_bytes);
        data_payload(&rest)
    }
}

fn data_payload(line: &[u8]) -> Option<String> {
    let line = match std::str::from_utf8(line) {
        Ok(l) => l.trim(),
        Err(e) => {
            debug!("Skipping non UTF-8 stream line: {}", e);
            return None;
        }
    };
    if line.is_empty() || line.starts_with(':') {
        return None;
    }
    debug!("raw streaming response: {:?}", line);
    let data = line.strip_prefix("data:")?;
    Some(data.strip_prefix(' ').unwrap_or(data).to_string())
}
