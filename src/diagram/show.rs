use crate::{
    config::DiagramConfig,
    misc::log::targets,
    order::{poset2model, PosetInput},
    structures::{FiniteStructure, Operation, Relation},
    types::err::ErrorKind,
};

use super::{
    display::DisplaySink,
    hasse::{hasse_diagram, DiagramTable},
    render::Renderer,
};

const IMAGE_SEPARATOR: &str = "&nbsp; &nbsp; &nbsp; ";
const STRUCTURE_SEPARATOR: &str = " &nbsp; ";

/// A symbol to draw, and whether to draw it dualised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramSymbol {
    pub symbol: String,
    pub dual: bool,
}

impl DiagramSymbol {
    /// Symbols from a space separated list, where a trailing `d` marks a dual symbol.
    ///
    /// ```rust
    /// # use p9_algebra::diagram::DiagramSymbol;
    /// let symbols = DiagramSymbol::parse_list("<=d v");
    /// assert_eq!(symbols[0], DiagramSymbol { symbol: "<=".to_owned(), dual: true });
    /// assert_eq!(symbols[1], DiagramSymbol { symbol: "v".to_owned(), dual: false });
    /// ```
    pub fn parse_list(symbols: &str) -> Vec<DiagramSymbol> {
        symbols
            .split_whitespace()
            .map(|token| match token.strip_suffix('d') {
                Some(symbol) if !symbol.is_empty() => DiagramSymbol {
                    symbol: symbol.to_owned(),
                    dual: true,
                },
                _ => DiagramSymbol {
                    symbol: token.to_owned(),
                    dual: false,
                },
            })
            .collect()
    }
}

/// What may be shown.
#[derive(Clone, Debug)]
pub enum ShowInput<T> {
    /// Structures, drawn by the symbols they define.
    Structures(Vec<FiniteStructure>),

    /// A single ordered family.
    Family(PosetInput<T>),

    /// Many ordered families, each drawn as one structure.
    Families(Vec<PosetInput<T>>),
}

/// The symbols drawn for a structure when none are given.
///
/// In order, each of `<=d`, `^d`, `v`, `+`, and `*d` which the structure defines.
pub fn default_symbols(structure: &FiniteStructure) -> Vec<String> {
    let mut symbols = Vec::default();
    if structure.relation("<=").is_some() {
        symbols.push("<=d".to_owned());
    }
    for (symbol, drawn) in [("^", "^d"), ("v", "v"), ("+", "+"), ("*", "*d")] {
        if structure.operation(symbol).is_some() {
            symbols.push(drawn.to_owned());
        }
    }
    symbols
}

/// Draws structures with a renderer, and hands the drawings to a sink.
pub struct Sketchbook<R: Renderer, S: DisplaySink> {
    pub config: DiagramConfig,
    pub renderer: R,
    pub sink: S,
}

impl<R: Renderer, S: DisplaySink> Sketchbook<R, S> {
    pub fn new(config: DiagramConfig, renderer: R, sink: S) -> Self {
        Sketchbook {
            config,
            renderer,
            sink,
        }
    }

    /// The payload of [m4diag](Sketchbook::m4diag), without display.
    pub fn m4diag_payload(
        &mut self,
        models: &[FiniteStructure],
        symbols: &str,
        unary_relation: Option<&str>,
    ) -> Result<String, ErrorKind> {
        let symbols = DiagramSymbol::parse_list(symbols);
        let mut payload = String::default();

        for (index, model) in models.iter().enumerate() {
            payload.push_str(&index.to_string());

            let highlight = match unary_relation {
                None => Vec::default(),
                Some(name) => match model.relation(name) {
                    Some(Relation::Unary(table)) => table.clone(),
                    _ => {
                        log::warn!(target: targets::DIAGRAM, "Model {index} has no unary relation {name}");
                        Vec::default()
                    }
                },
            };

            for DiagramSymbol { symbol, dual } in &symbols {
                let table = match (model.operation(symbol), model.relation(symbol)) {
                    (Some(Operation::Binary(table)), _) => DiagramTable::Operation(table),
                    (_, Some(Relation::Binary(table))) => DiagramTable::Relation(table),
                    _ => continue,
                };

                let diagram = hasse_diagram(table, *dual, &highlight)?;
                log::debug!(target: targets::DIAGRAM, "Model {index} {symbol}: {:?}", diagram.edges);

                let image = self.renderer.render(&diagram.as_dot(&self.config))?;
                payload.push_str(&image);
                payload.push_str(IMAGE_SEPARATOR);
            }

            payload.push_str(STRUCTURE_SEPARATOR);
        }

        Ok(payload)
    }

    /// Draws each of the `symbols` (a space separated list) of each model, and displays the lot.
    ///
    /// A symbol is drawn if it is a binary operation or binary relation of the model, and otherwise skipped.
    /// If given, the elements of `unary_relation` are highlighted.
    pub fn m4diag(
        &mut self,
        models: &[FiniteStructure],
        symbols: &str,
        unary_relation: Option<&str>,
    ) -> Result<(), ErrorKind> {
        let payload = self.m4diag_payload(models, symbols, unary_relation)?;
        self.sink.display(&payload);
        Ok(())
    }

    /// Shows structures, or ordered families.
    ///
    /// If no `symbols` are given for structures, the [default_symbols] of the first structure are used.
    /// Families are drawn by their order, the right way up.
    pub fn show<T: Ord>(&mut self, input: &ShowInput<T>, symbols: &[String]) -> Result<(), ErrorKind> {
        match input {
            ShowInput::Structures(structures) => {
                let symbols = match (symbols.is_empty(), structures.first()) {
                    (true, Some(first)) => default_symbols(first),
                    _ => symbols.iter().map(|symbol| symbol.trim().to_owned()).collect(),
                };
                self.m4diag(structures, &symbols.join(" "), None)
            }

            ShowInput::Family(family) => self.m4diag(&[poset2model(family)?], "<=d", None),

            ShowInput::Families(families) => {
                let structures = families
                    .iter()
                    .map(poset2model)
                    .collect::<Result<Vec<_>, _>>()?;
                self.m4diag(&structures, "<=d", None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::diagram::{display::Buffer, render::DotSource};

    use super::*;

    fn sketchbook() -> Sketchbook<DotSource, Buffer> {
        Sketchbook::new(DiagramConfig::default(), DotSource, Buffer::default())
    }

    fn lattice() -> FiniteStructure {
        FiniteStructure::new(2)
            .unwrap()
            .with_operation("^", Operation::Binary(vec![vec![0, 0], vec![0, 1]]))
            .unwrap()
            .with_operation("v", Operation::Binary(vec![vec![0, 1], vec![1, 1]]))
            .unwrap()
            .with_operation("'", Operation::Unary(vec![1, 0]))
            .unwrap()
            .with_relation("T", Relation::Unary(vec![false, true]))
            .unwrap()
    }

    #[test]
    fn defaults() {
        assert_eq!(default_symbols(&lattice()), vec!["^d", "v"]);
    }

    #[test]
    fn payload_layout() {
        let mut book = sketchbook();
        let models = vec![lattice(), lattice()];

        // ' is unary, and * is absent, so both are skipped.
        book.m4diag(&models, "^d ' * v", Some("T")).unwrap();

        let payload = &book.sink.payloads[0];
        assert!(payload.starts_with("0<pre>"));
        assert_eq!(payload.matches("<pre>").count(), 4);
        assert_eq!(payload.matches(IMAGE_SEPARATOR).count(), 4);
        assert!(payload.contains(&format!("{STRUCTURE_SEPARATOR}1<pre>")));
        assert!(payload.contains("\"1\" [color=red];"));
        assert!(payload.contains("\"1\" -&gt; \"0\";"));
    }

    #[test]
    fn show_family() {
        let mut book = sketchbook();
        let family: PosetInput<usize> = PosetInput::SubsetFamily(vec![
            BTreeSet::from([1]),
            BTreeSet::default(),
            BTreeSet::from([1, 2]),
        ]);
        book.show(&ShowInput::Family(family), &[]).unwrap();

        let payload = &book.sink.payloads[0];
        assert!(payload.contains("\"0\" -&gt; \"1\";"));
        assert!(payload.contains("\"2\" -&gt; \"0\";"));
        assert!(!payload.contains("\"2\" -&gt; \"1\";"));
    }

    #[test]
    fn show_empty_family() {
        let mut book = sketchbook();
        let family: PosetInput<usize> = PosetInput::Chain(vec![]);
        assert!(book.show(&ShowInput::Family(family), &[]).is_err());
        assert!(book.sink.payloads.is_empty());
    }
}
