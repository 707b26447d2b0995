//! Console transport: raw descriptor delivery for the standard streams.
//!
//! Runs flush straight to the file descriptor with no buffering of their
//! own; the engine already delivers whole runs. The boundary has no failure
//! contract, so short writes are retried and hard errors are dropped.

use scrawl_core::fmt::Transport;

/// Which standard stream a console transport feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Stdout,
    Stderr,
}

impl Category {
    const fn fd(self) -> i32 {
        match self {
            Category::Stdout => 1,
            Category::Stderr => 2,
        }
    }
}

/// Transport writing byte runs to a standard file descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleTransport {
    category: Category,
}

impl ConsoleTransport {
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self { category }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }
}

impl Transport for ConsoleTransport {
    fn flush(&mut self, bytes: &[u8]) {
        write_fd(self.category.fd(), bytes);
    }
}

fn write_fd(fd: i32, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: the pointer/length pair comes from a live slice.
        let written = unsafe { libc::write(fd, bytes.as_ptr().cast(), bytes.len()) };
        if written < 0 {
            let interrupted = std::io::Error::last_os_error().raw_os_error()
                == Some(libc::EINTR);
            if interrupted {
                continue;
            }
            return;
        }
        bytes = &bytes[written as usize..];
    }
}
