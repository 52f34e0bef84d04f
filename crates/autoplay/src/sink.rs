use std::io::{self, Write};

/// Destination for rendered frames.
pub trait FrameSink {
    fn frame(&mut self, frame: &str) -> io::Result<()>;
}

/// Collects frames in memory.
impl FrameSink for Vec<String> {
    fn frame(&mut self, frame: &str) -> io::Result<()> {
        self.push(frame.to_owned());
        Ok(())
    }
}

/// Writes frames to any `io::Write`, optionally clearing an ANSI terminal
/// before each one.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    clear_screen: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clear_screen: false,
        }
    }

    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for WriterSink<W> {
    fn frame(&mut self, frame: &str) -> io::Result<()> {
        if self.clear_screen {
            self.writer.write_all(b"\x1b[2J\x1b[H")?;
        }
        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()
    }
}
