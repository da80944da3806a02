use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::err::{self, ErrorKind};

use super::symbol::{self, Notation};

/// An element of the domain of a finite structure.
pub type Element = usize;

/// The table of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Operation {
    Constant(Element),
    Unary(Vec<Element>),
    Binary(Vec<Vec<Element>>),
}

impl Operation {
    pub fn arity(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// The table of a relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Relation {
    Unary(Vec<bool>),
    Binary(Vec<Vec<bool>>),
}

impl Relation {
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// A finite domain `0..cardinality` with named operation and relation tables.
///
/// Tables are checked against the cardinality when added, and so every table of a structure has the declared shape and every operation stays within the domain.
///
/// ```rust
/// # use p9_algebra::structures::{FiniteStructure, Operation};
/// let two = FiniteStructure::new(2)
///     .unwrap()
///     .with_operation("^", Operation::Binary(vec![vec![0, 0], vec![0, 1]]))
///     .unwrap();
///
/// assert_eq!(two.cardinality(), 2);
/// assert!(two.diagram("").contains(&"1^1=1".to_owned()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FiniteStructure {
    cardinality: usize,
    operations: BTreeMap<String, Operation>,
    relations: BTreeMap<String, Relation>,
}

impl FiniteStructure {
    /// A structure with the given cardinality and no operations or relations.
    pub fn new(cardinality: usize) -> Result<Self, ErrorKind> {
        if cardinality == 0 {
            return Err(err::StructureError::EmptyDomain.into());
        }
        Ok(FiniteStructure {
            cardinality,
            operations: BTreeMap::default(),
            relations: BTreeMap::default(),
        })
    }

    pub fn with_operation(
        mut self,
        symbol: impl Into<String>,
        operation: Operation,
    ) -> Result<Self, ErrorKind> {
        let symbol = symbol.into();
        self.check_operation(&symbol, &operation)?;
        self.operations.insert(symbol, operation);
        Ok(self)
    }

    pub fn with_relation(
        mut self,
        symbol: impl Into<String>,
        relation: Relation,
    ) -> Result<Self, ErrorKind> {
        let symbol = symbol.into();
        self.check_relation(&symbol, &relation)?;
        self.relations.insert(symbol, relation);
        Ok(self)
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn operations(&self) -> &BTreeMap<String, Operation> {
        &self.operations
    }

    pub fn relations(&self) -> &BTreeMap<String, Relation> {
        &self.relations
    }

    pub fn operation(&self, symbol: &str) -> Option<&Operation> {
        self.operations.get(symbol)
    }

    pub fn relation(&self, symbol: &str) -> Option<&Relation> {
        self.relations.get(symbol)
    }

    fn check_operation(&self, symbol: &str, operation: &Operation) -> Result<(), ErrorKind> {
        let n = self.cardinality;
        let shape_error = || ErrorKind::from(err::StructureError::TableShape(symbol.to_owned()));
        let value_error =
            || ErrorKind::from(err::StructureError::ValueOutOfDomain(symbol.to_owned()));

        match operation {
            Operation::Constant(value) => {
                if *value >= n {
                    return Err(value_error());
                }
            }

            Operation::Unary(table) => {
                if table.len() != n {
                    return Err(shape_error());
                }
                if table.iter().any(|value| *value >= n) {
                    return Err(value_error());
                }
            }

            Operation::Binary(table) => {
                if table.len() != n || table.iter().any(|row| row.len() != n) {
                    return Err(shape_error());
                }
                if table.iter().flatten().any(|value| *value >= n) {
                    return Err(value_error());
                }
            }
        }
        Ok(())
    }

    fn check_relation(&self, symbol: &str, relation: &Relation) -> Result<(), ErrorKind> {
        let n = self.cardinality;
        let fits = match relation {
            Relation::Unary(table) => table.len() == n,
            Relation::Binary(table) => table.len() == n && table.iter().all(|row| row.len() == n),
        };
        match fits {
            true => Ok(()),
            false => Err(err::StructureError::TableShape(symbol.to_owned()).into()),
        }
    }
}

impl FiniteStructure {
    /// The complete fact set of the structure, as LADR formulas.
    ///
    /// Elements are named by `prefix` followed by their index.
    /// With an empty prefix the names are numerals, which LADR reads as constants.
    ///
    /// The facts are:
    /// - Distinctness of each pair of elements.
    /// - The value of each operation at each argument.
    /// - The truth of each relation at each argument, negated when false.
    pub fn diagram(&self, prefix: &str) -> Vec<String> {
        let name = |element: Element| format!("{prefix}{element}");
        let mut facts = Vec::default();

        for i in 0..self.cardinality {
            for j in (i + 1)..self.cardinality {
                facts.push(format!("{}!={}", name(i), name(j)));
            }
        }

        for (symbol, operation) in &self.operations {
            match operation {
                Operation::Constant(value) => {
                    facts.push(format!("{symbol}={}", name(*value)));
                }

                Operation::Unary(table) => {
                    for (x, value) in table.iter().enumerate() {
                        let term = symbol::apply(symbol, &[&name(x)]);
                        facts.push(format!("{term}={}", name(*value)));
                    }
                }

                Operation::Binary(table) => {
                    for (x, row) in table.iter().enumerate() {
                        for (y, value) in row.iter().enumerate() {
                            let term = symbol::apply(symbol, &[&name(x), &name(y)]);
                            facts.push(format!("{term}={}", name(*value)));
                        }
                    }
                }
            }
        }

        for (symbol, relation) in &self.relations {
            match relation {
                Relation::Unary(table) => {
                    for (x, holds) in table.iter().enumerate() {
                        let atom = symbol::apply(symbol, &[&name(x)]);
                        facts.push(literal(atom, *holds, false));
                    }
                }

                Relation::Binary(table) => {
                    let infix = symbol::notation(symbol, 2) == Notation::Infix;
                    for (x, row) in table.iter().enumerate() {
                        for (y, holds) in row.iter().enumerate() {
                            let atom = symbol::apply(symbol, &[&name(x), &name(y)]);
                            facts.push(literal(atom, *holds, infix));
                        }
                    }
                }
            }
        }

        facts
    }

    /// The structure written as a LADR interpretation, as printed by mace4.
    pub fn as_interpretation(&self, number: usize) -> String {
        let mut entries = Vec::default();

        for (symbol, operation) in &self.operations {
            let (arguments, values) = match operation {
                Operation::Constant(value) => (String::default(), vec![*value]),
                Operation::Unary(table) => ("(_)".to_owned(), table.clone()),
                Operation::Binary(table) => ("(_,_)".to_owned(), table.concat()),
            };
            entries.push(format!(
                "function({symbol}{arguments}, [{}])",
                join_values(values.iter())
            ));
        }

        for (symbol, relation) in &self.relations {
            let (arguments, values) = match relation {
                Relation::Unary(table) => ("(_)", table.clone()),
                Relation::Binary(table) => ("(_,_)", table.concat()),
            };
            let values = values.iter().map(|holds| *holds as usize).collect::<Vec<_>>();
            entries.push(format!(
                "relation({symbol}{arguments}, [{}])",
                join_values(values.iter())
            ));
        }

        format!(
            "interpretation( {}, [number={number}, seconds=0], [\n    {}\n]).",
            self.cardinality,
            entries.join(",\n    ")
        )
    }
}

fn literal(atom: String, holds: bool, infix: bool) -> String {
    match (holds, infix) {
        (true, _) => atom,
        (false, true) => format!("-({atom})"),
        (false, false) => format!("-{atom}"),
    }
}

fn join_values<'a>(values: impl Iterator<Item = &'a usize>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chain() -> FiniteStructure {
        FiniteStructure::new(2)
            .unwrap()
            .with_operation("v", Operation::Binary(vec![vec![0, 1], vec![1, 1]]))
            .unwrap()
            .with_operation("'", Operation::Unary(vec![1, 0]))
            .unwrap()
            .with_operation("c", Operation::Constant(1))
            .unwrap()
            .with_relation("<=", Relation::Binary(vec![vec![true, true], vec![false, true]]))
            .unwrap()
            .with_relation("T", Relation::Unary(vec![false, true]))
            .unwrap()
    }

    #[test]
    fn shape_checks() {
        assert_eq!(
            FiniteStructure::new(0),
            Err(ErrorKind::Structure(err::StructureError::EmptyDomain))
        );

        let bad_shape = FiniteStructure::new(2)
            .unwrap()
            .with_operation("*", Operation::Binary(vec![vec![0, 0]]));
        assert_eq!(
            bad_shape,
            Err(ErrorKind::Structure(err::StructureError::TableShape("*".to_owned())))
        );

        let bad_value = FiniteStructure::new(2)
            .unwrap()
            .with_operation("'", Operation::Unary(vec![0, 2]));
        assert_eq!(
            bad_value,
            Err(ErrorKind::Structure(err::StructureError::ValueOutOfDomain(
                "'".to_owned()
            )))
        );

        let bad_relation = FiniteStructure::new(3)
            .unwrap()
            .with_relation("R", Relation::Unary(vec![true]));
        assert!(bad_relation.is_err());
    }

    #[test]
    fn diagram_facts() {
        let facts = two_chain().diagram("");

        assert!(facts.contains(&"0!=1".to_owned()));
        assert!(facts.contains(&"0 v 1=1".to_owned()));
        assert!(facts.contains(&"0'=1".to_owned()));
        assert!(facts.contains(&"c=1".to_owned()));
        assert!(facts.contains(&"0<=1".to_owned()));
        assert!(facts.contains(&"-(1<=0)".to_owned()));
        assert!(facts.contains(&"-T(0)".to_owned()));
        assert!(facts.contains(&"T(1)".to_owned()));

        // 1 distinctness, 4 join, 2 prime, 1 constant, 4 order, 2 unary relation
        assert_eq!(facts.len(), 14);
    }

    #[test]
    fn diagram_prefix() {
        let facts = two_chain().diagram("c");
        assert!(facts.contains(&"c0!=c1".to_owned()));
        assert!(facts.contains(&"c1 v c0=c1".to_owned()));
    }

    #[test]
    fn interpretation_text() {
        let text = two_chain().as_interpretation(3);
        assert!(text.starts_with("interpretation( 2, [number=3"));
        assert!(text.contains("function(v(_,_), [0,1,1,1])"));
        assert!(text.contains("function(c, [1])"));
        assert!(text.contains("relation(<=(_,_), [1,1,0,1])"));
        assert!(text.contains("relation(T(_), [0,1])"));
    }
}
