//! Sinks for rendered diagrams.
//!
//! A sink accepts a payload of markup and returns nothing, as with a notebook display.
//! Failures of a sink are logged, not returned.

use std::{fs::OpenOptions, io::Write, path::PathBuf};

use crate::misc::log::targets;

pub trait DisplaySink {
    fn display(&mut self, payload: &str);
}

/// Prints each payload on its own line.
#[derive(Default)]
pub struct Stdout;

impl DisplaySink for Stdout {
    fn display(&mut self, payload: &str) {
        println!("{payload}");
    }
}

/// Keeps each payload.
#[derive(Default)]
pub struct Buffer {
    pub payloads: Vec<String>,
}

impl DisplaySink for Buffer {
    fn display(&mut self, payload: &str) {
        self.payloads.push(payload.to_owned());
    }
}

/// Appends each payload to an HTML file, as a paragraph.
///
/// The file is truncated when the sink is made.
pub struct HtmlFile {
    path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: PathBuf) -> Self {
        if let Err(e) = std::fs::write(&path, "<!DOCTYPE html>\n<meta charset=\"utf-8\">\n") {
            log::error!(target: targets::DIAGRAM, "Failed to create {path:?}: {e}");
        }
        HtmlFile { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DisplaySink for HtmlFile {
    fn display(&mut self, payload: &str) {
        let written = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "<p>{payload}</p>"));

        if let Err(e) = written {
            log::error!(target: targets::DIAGRAM, "Failed to write to {:?}: {e}", self.path);
        }
    }
}
