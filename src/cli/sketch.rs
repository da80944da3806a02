use std::path::PathBuf;

use clap::ArgMatches;

use p9_algebra::{
    config::DiagramConfig,
    diagram::{
        display::{HtmlFile, Stdout},
        render::{DotSource, GraphvizRenderer},
        DisplaySink, Renderer, Sketchbook,
    },
    types::err::ErrorKind,
};

/// The renderer chosen on the command line.
pub enum CliRenderer {
    Svg(GraphvizRenderer),
    Source(DotSource),
}

impl Renderer for CliRenderer {
    fn render(&mut self, dot: &str) -> Result<String, ErrorKind> {
        match self {
            Self::Svg(renderer) => renderer.render(dot),
            Self::Source(renderer) => renderer.render(dot),
        }
    }
}

/// The sink chosen on the command line.
pub enum CliSink {
    Html(HtmlFile),
    Stdout(Stdout),
}

impl DisplaySink for CliSink {
    fn display(&mut self, payload: &str) {
        match self {
            Self::Html(sink) => sink.display(payload),
            Self::Stdout(sink) => sink.display(payload),
        }
    }
}

pub type CliSketchbook = Sketchbook<CliRenderer, CliSink>;

/// A sketchbook drawing to the `--html` path if given, and otherwise to stdout.
pub fn sketchbook_from_args(args: &ArgMatches, config: DiagramConfig) -> CliSketchbook {
    let renderer = match args.get_flag("no_svg") {
        true => CliRenderer::Source(DotSource),
        false => CliRenderer::Svg(GraphvizRenderer::new(config.dot.clone())),
    };

    let sink = match args.try_get_one::<PathBuf>("html") {
        Ok(Some(path)) => CliSink::Html(HtmlFile::new(path.clone())),
        _ => CliSink::Stdout(Stdout),
    };

    Sketchbook::new(config, renderer, sink)
}

/// Whether `--html` was given, and so whether anything should be drawn by subcommands which mostly print.
pub fn drawing_requested(args: &ArgMatches) -> bool {
    matches!(args.try_get_one::<PathBuf>("html"), Ok(Some(_)))
}
