//! Running an external program with some input on stdin.

use std::{
    io::{self, Write},
    process::{Command, Output, Stdio},
    thread,
};

/// Ways in which piping through a program may fail.
#[derive(Debug)]
pub enum PipeError {
    /// The program could not be started.
    Spawn(io::Error),

    /// The program started, but input or output failed.
    Io(io::Error),
}

/// Runs `program` with `args`, writes `input` to its stdin, and collects its output.
///
/// Input is written from a separate thread while stdout and stderr are drained, so a program which writes as it reads (e.g. `isofilter`, or `cat`) never fills a pipe the caller is not reading.
/// The child is always waited on once spawned.
/// A program which exits without reading all of its input is not an error.
pub fn pipe_through(program: &str, args: &[&str], input: &str) -> Result<Output, PipeError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(PipeError::Spawn)?;

    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.as_bytes().to_vec();
        thread::spawn(move || stdin.write_all(&input))
    });

    let output = child.wait_with_output().map_err(PipeError::Io)?;

    if let Some(writer) = writer {
        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(PipeError::Io(e)),
            Err(_) => return Err(PipeError::Io(io::Error::other("stdin writer panicked"))),
        }
    }

    Ok(output)
}
