//! Reading LADR interpretations, the form in which mace4 and isofilter print models.
//!
//! An interpretation looks like:
//!
//! ```text
//! interpretation( 2, [number=1, seconds=0], [
//!         function(c, [1]),
//!         function('(_), [1, 0]),
//!         function(*(_,_), [
//!                    0, 0,
//!                    0, 1 ]),
//!         relation(<=(_,_), [
//!                    1, 1,
//!                    0, 1 ])
//! ]).
//! ```
//!
//! Tables are given row-major, and relations are given by `0` and `1`.
//! Any text around interpretations (e.g. the rest of the output of mace4) is ignored.

use crate::{
    misc::log::targets,
    structures::{FiniteStructure, Operation, Relation},
    types::err::{self, ErrorKind},
};

const INTERPRETATION: &str = "interpretation(";

/// Every interpretation in `text`, in order.
pub fn parse_interpretations(text: &str) -> Result<Vec<FiniteStructure>, ErrorKind> {
    let mut structures = Vec::default();
    let mut offset = 0;

    while let Some(found) = text[offset..].find(INTERPRETATION) {
        let mut cursor = Cursor {
            text,
            position: offset + found + INTERPRETATION.len(),
        };
        structures.push(cursor.interpretation()?);
        offset = cursor.position;
    }

    log::trace!(target: targets::PARSE, "Read {} interpretations", structures.len());
    Ok(structures)
}

/// Read through an interpretation, one token at a time.
struct Cursor<'t> {
    text: &'t str,
    position: usize,
}

enum Kind {
    Function,
    Relation,
}

impl Cursor<'_> {
    fn error(&self) -> ErrorKind {
        err::ParseError::Interpretation(self.position).into()
    }

    fn rest(&self) -> &str {
        &self.text[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let skipped = self.rest().len() - self.rest().trim_start().len();
        self.position += skipped;
    }

    fn expect(&mut self, token: char) -> Result<(), ErrorKind> {
        self.skip_whitespace();
        match self.rest().starts_with(token) {
            true => {
                self.position += token.len_utf8();
                Ok(())
            }
            false => Err(self.error()),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    fn number(&mut self) -> Result<usize, ErrorKind> {
        self.skip_whitespace();
        let digits = self.rest().chars().take_while(|c| c.is_ascii_digit()).count();
        let number = self.rest()[..digits].parse().map_err(|_| self.error())?;
        self.position += digits;
        Ok(number)
    }

    /// Skips a bracketed list, such as the `[number=1, seconds=0]` of an interpretation.
    fn skip_list(&mut self) -> Result<(), ErrorKind> {
        self.expect('[')?;
        match self.rest().find(']') {
            Some(end) => {
                self.position += end + 1;
                Ok(())
            }
            None => Err(self.error()),
        }
    }

    fn interpretation(&mut self) -> Result<FiniteStructure, ErrorKind> {
        let cardinality = self.number()?;
        self.expect(',')?;
        self.skip_list()?;
        self.expect(',')?;
        self.expect('[')?;

        let mut structure = FiniteStructure::new(cardinality)?;

        if self.peek() == Some(']') {
            self.position += 1;
        } else {
            loop {
                structure = self.entry(structure)?;
                match self.peek() {
                    Some(',') => self.position += 1,
                    Some(']') => {
                        self.position += 1;
                        break;
                    }
                    _ => return Err(self.error()),
                }
            }
        }

        self.expect(')')?;
        Ok(structure)
    }

    /// Reads a `function(...)` or `relation(...)` entry into `structure`.
    fn entry(&mut self, structure: FiniteStructure) -> Result<FiniteStructure, ErrorKind> {
        self.skip_whitespace();
        let kind = if self.rest().starts_with("function") {
            self.position += "function".len();
            Kind::Function
        } else if self.rest().starts_with("relation") {
            self.position += "relation".len();
            Kind::Relation
        } else {
            return Err(self.error());
        };
        self.expect('(')?;

        let (symbol, arity) = self.signature()?;
        self.expect(',')?;
        let values = self.values()?;
        self.expect(')')?;

        let n = structure.cardinality();
        let expected = u32::try_from(arity)
            .ok()
            .and_then(|arity| n.checked_pow(arity))
            .ok_or_else(|| self.error())?;
        if values.len() != expected {
            return Err(self.error());
        }

        match (kind, arity) {
            (Kind::Function, 0) => structure.with_operation(symbol, Operation::Constant(values[0])),

            (Kind::Function, 1) => structure.with_operation(symbol, Operation::Unary(values)),

            (Kind::Function, 2) => {
                let rows = values.chunks(n).map(|row| row.to_vec()).collect();
                structure.with_operation(symbol, Operation::Binary(rows))
            }

            (Kind::Relation, 1) => {
                let table = values.iter().map(|value| *value != 0).collect();
                structure.with_relation(symbol, Relation::Unary(table))
            }

            (Kind::Relation, 2) => {
                let rows = values
                    .chunks(n)
                    .map(|row| row.iter().map(|value| *value != 0).collect())
                    .collect();
                structure.with_relation(symbol, Relation::Binary(rows))
            }

            _ => {
                log::warn!(target: targets::PARSE, "Skipped {symbol} of arity {arity}");
                Ok(structure)
            }
        }
    }

    /// The symbol and arity of a signature such as `*(_,_)` or `c`.
    fn signature(&mut self) -> Result<(String, usize), ErrorKind> {
        self.skip_whitespace();
        let rest = self.rest();

        // A symbol runs to its argument list, or to the comma before its values.
        let symbol_end = match rest.find("(_") {
            Some(arguments) if rest[..arguments].find(',').is_none() => arguments,
            _ => rest.find(',').ok_or_else(|| self.error())?,
        };
        let symbol = rest[..symbol_end].trim().to_owned();
        if symbol.is_empty() {
            return Err(self.error());
        }
        self.position += symbol_end;

        let mut arity = 0;
        if self.rest().starts_with("(_") {
            let close = self.rest().find(')').ok_or_else(|| self.error())?;
            arity = self.rest()[..close].matches('_').count();
            self.position += close + 1;
        }

        Ok((symbol, arity))
    }

    fn values(&mut self) -> Result<Vec<usize>, ErrorKind> {
        self.expect('[')?;
        let mut values = Vec::default();
        if self.peek() == Some(']') {
            self.position += 1;
            return Ok(values);
        }
        loop {
            values.push(self.number()?);
            match self.peek() {
                Some(',') => self.position += 1,
                Some(']') => {
                    self.position += 1;
                    return Ok(values);
                }
                _ => return Err(self.error()),
            }
        }
    }
}
