//! Turning DOT text into something which may be displayed.

use crate::{
    misc::{
        log::targets,
        pipe::{pipe_through, PipeError},
    },
    types::err::{self, ErrorKind},
};

/// Layout of a graph given in the DOT language, as an embeddable image.
pub trait Renderer {
    fn render(&mut self, dot: &str) -> Result<String, ErrorKind>;
}

/// Renders through the graphviz `dot` binary, as inline SVG.
pub struct GraphvizRenderer {
    /// Path to the `dot` binary.
    pub dot: String,
}

impl GraphvizRenderer {
    pub fn new(dot: impl Into<String>) -> Self {
        GraphvizRenderer { dot: dot.into() }
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&mut self, dot: &str) -> Result<String, ErrorKind> {
        let output = pipe_through(&self.dot, &["-Tsvg"], dot).map_err(|e| match e {
            PipeError::Spawn(e) => {
                log::error!(target: targets::DIAGRAM, "Failed to run {}: {e}", self.dot);
                err::RenderError::NotFound(self.dot.clone())
            }
            PipeError::Io(e) => err::RenderError::Failed(e.to_string()),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(err::RenderError::Failed(stderr.trim().to_owned()).into());
        }

        let svg = String::from_utf8_lossy(&output.stdout);
        // The xml prolog and doctype are dropped, to allow the image to be inlined.
        match svg.find("<svg") {
            Some(start) => Ok(svg[start..].to_owned()),
            None => Err(err::RenderError::Failed("no svg in output of dot".to_owned()).into()),
        }
    }
}

/// Renders the DOT text itself, for when graphviz is unavailable.
#[derive(Default)]
pub struct DotSource;

impl Renderer for DotSource {
    fn render(&mut self, dot: &str) -> Result<String, ErrorKind> {
        let escaped = dot
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        Ok(format!("<pre>{escaped}</pre>"))
    }
}
