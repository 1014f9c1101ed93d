//! Quit signals polled once per driver iteration.

use std::io::Read;
use std::thread;

use crossbeam_channel::{Receiver, unbounded};
use tracing::debug;

pub trait QuitSignal {
    /// Returns the next pending key press without blocking.
    fn poll_key(&mut self) -> Option<u8>;
}

/// Never produces a key; the loop only ends when its source does.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    fn poll_key(&mut self) -> Option<u8> {
        None
    }
}

/// Key presses read from stdin on a background thread.
///
/// A terminal in canonical mode delivers bytes once Enter is pressed, so
/// typing `q` followed by Enter stops the loop.
pub struct StdinQuit {
    keys: Receiver<u8>,
}

impl StdinQuit {
    pub fn spawn() -> Self {
        Self::from_reader(std::io::stdin())
    }

    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = unbounded();
        thread::spawn(move || {
            for byte in reader.bytes() {
                let Ok(byte) = byte else { break };
                if tx.send(byte).is_err() {
                    break;
                }
            }
            debug!("Key reader finished");
        });
        Self { keys: rx }
    }
}

impl QuitSignal for StdinQuit {
    fn poll_key(&mut self) -> Option<u8> {
        self.keys.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn stdin_keys_are_forwarded_in_order() {
        let mut quit = StdinQuit::from_reader(Cursor::new(b"xq".to_vec()));

        let mut seen = Vec::new();
        for _ in 0..200 {
            if let Some(key) = quit.poll_key() {
                seen.push(key);
            }
            if seen.len() == 2 {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(seen, b"xq");
    }

    #[test]
    fn never_quit_stays_silent() {
        assert_eq!(NeverQuit.poll_key(), None);
    }
}
