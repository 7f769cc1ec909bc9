use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The append-only log file owned by one session.
///
/// Each `write_block` is a single buffered write followed by a flush, so a
/// turn reaches the file whole or not at all from this process's side.
pub struct LogSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl LogSink {
    /// Start a new log, truncating anything already at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_file(path, file))
    }

    /// Reopen an existing log for appending.
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self::from_file(path, file))
    }

    fn from_file(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    pub fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.write_all(block.as_bytes())?;
        self.flush()
    }

    /// Flush and release the file. Closing twice is harmless.
    pub fn close(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        Ok(())
    }

    fn closed_error() -> io::Error {
        io::Error::new(io::ErrorKind::BrokenPipe, "log already closed")
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(writer) => writer.write(buf),
            None => Err(Self::closed_error()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Err(Self::closed_error()),
        }
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
