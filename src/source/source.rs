use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    rc::Rc,
};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Owned source text followed by a single `0x00` terminator.
///
/// The terminator is always present, whether the buffer was read from a file
/// or built from a string.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    file: Rc<String>,
}

impl SourceBuffer {
    /// Builds a buffer from in-memory source. Unnamed sources are called `shell`.
    pub fn new(source: impl Into<Vec<u8>>, file: Option<String>) -> SourceBuffer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut buf = source.into();
        buf.push(0);

        SourceBuffer {
            buf,
            file: file_name,
        }
    }

    /// Source bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Source bytes, followed by the terminator. Always `len() + 1` long.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// The source as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

/// Largest source a [`SourceBuffer`] may hold, so that every offset fits in `u32`.
pub const MAX_SOURCE_LEN: u64 = u32::MAX as u64;

/// Reads the whole file at `path`.
///
/// A missing file is reported as [`ErrorImpl::FileNotFound`] before any read
/// is attempted. The file is closed on every return path.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SourceBuffer, Error> {
    let path = path.as_ref();
    let name = path.to_string_lossy().into_owned();

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => load_error(ErrorImpl::FileNotFound { path: name.clone() }, &name),
        _ => unreadable(&name, &err),
    })?;

    // The size is only a hint; unsized files are still read to the end.
    let size_hint = file.metadata().map(|meta| meta.len()).unwrap_or(0);
    if size_hint > MAX_SOURCE_LEN {
        return Err(too_large(&name, size_hint));
    }

    read_into(file, name, size_hint as usize)
}

/// Reads `reader` to the end of the stream. `name` labels the buffer and any error.
pub fn load_reader<R: Read>(reader: R, name: &str) -> Result<SourceBuffer, Error> {
    read_into(reader, name.to_string(), 0)
}

fn read_into<R: Read>(reader: R, name: String, size_hint: usize) -> Result<SourceBuffer, Error> {
    let mut buf = Vec::new();
    buf.try_reserve(size_hint.saturating_add(1)).map_err(|err| {
        load_error(
            ErrorImpl::FileUnreadable {
                path: name.clone(),
                reason: err.to_string(),
            },
            &name,
        )
    })?;

    // One byte past the limit is enough to tell an oversized stream apart.
    let read = reader
        .take(MAX_SOURCE_LEN + 1)
        .read_to_end(&mut buf)
        .map_err(|err| unreadable(&name, &err))?;

    if read as u64 > MAX_SOURCE_LEN {
        return Err(too_large(&name, read as u64));
    }

    if read == 0 {
        return Err(load_error(ErrorImpl::EmptyFile { path: name.clone() }, &name));
    }

    debug!("loaded {} bytes from {}", read, name);

    Ok(SourceBuffer::new(buf, Some(name)))
}

fn too_large(name: &str, size: u64) -> Error {
    load_error(
        ErrorImpl::FileTooLarge {
            path: name.to_string(),
            size,
        },
        name,
    )
}

fn unreadable(name: &str, err: &io::Error) -> Error {
    load_error(
        ErrorImpl::FileUnreadable {
            path: name.to_string(),
            reason: err.to_string(),
        },
        name,
    )
}

fn load_error(error_impl: ErrorImpl, name: &str) -> Error {
    Error::new(error_impl, Position(0, Rc::new(name.to_string())))
}
