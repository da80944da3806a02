//! Error types used in the library.
//!
//! - Malformed input (an empty family for an order, a table of the wrong shape) is reported when a structure is built.
//! - Some errors are external --- e.g. a missing `mace4` binary, or output which is not a LADR interpretation.
//! - Timeouts of the LADR tools are *not* errors. A search which ran out of time returns whatever the tool printed, often nothing.
//!
//! Names of the error enums --- for the most part --- overlap with the module they are raised from.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Backend(BackendError),
    Compatibility(CompatibilityError),
    Order(OrderError),
    Parse(ParseError),
    Render(RenderError),
    Structure(StructureError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "backend: {e}"),
            Self::Compatibility(e) => write!(f, "compatibility: {e}"),
            Self::Order(e) => write!(f, "order: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
            Self::Structure(e) => write!(f, "structure: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when calling out to the LADR tools.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// The named binary could not be started.
    NotFound(String),

    /// Writing to or reading from a tool failed.
    Io(String),

    /// The tool produced output which could not be used.
    Output(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(binary) => write!(f, "could not run `{binary}`"),
            Self::Io(message) => write!(f, "i/o failure: {message}"),
            Self::Output(message) => write!(f, "unusable output: {message}"),
        }
    }
}

impl From<BackendError> for ErrorKind {
    fn from(e: BackendError) -> Self {
        ErrorKind::Backend(e)
    }
}

/// Errors when building a theory of compatible relations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompatibilityError {
    /// An operation with no known compatibility axiom.
    UnsupportedOperation(String),
}

impl std::fmt::Display for CompatibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperation(symbol) => write!(f, "operation `{symbol}` not handled"),
        }
    }
}

impl From<CompatibilityError> for ErrorKind {
    fn from(e: CompatibilityError) -> Self {
        ErrorKind::Compatibility(e)
    }
}

/// Errors when building an ordered structure from a family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderError {
    /// There is no Hasse diagram of an empty family.
    Empty,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "can't show Hasse diagram of an empty set"),
        }
    }
}

impl From<OrderError> for ErrorKind {
    fn from(e: OrderError) -> Self {
        ErrorKind::Order(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some problem with an interpretation, at the given byte offset.
    Interpretation(usize),

    /// Some problem with a theory file, at the given line.
    Theory(usize),

    /// No file was found.
    NoFile,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interpretation(offset) => write!(f, "malformed interpretation at byte {offset}"),
            Self::Theory(line) => write!(f, "malformed theory at line {line}"),
            Self::NoFile => write!(f, "no file"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when turning a diagram into an image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderError {
    /// The layout engine could not be started.
    NotFound(String),

    /// The layout engine rejected the graph.
    Failed(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(binary) => write!(f, "could not run `{binary}`, is graphviz installed?"),
            Self::Failed(message) => write!(f, "{message}"),
        }
    }
}

impl From<RenderError> for ErrorKind {
    fn from(e: RenderError) -> Self {
        ErrorKind::Render(e)
    }
}

/// Violations of the shape of a finite structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StructureError {
    /// A structure requires at least one element.
    EmptyDomain,

    /// The table of the symbol does not match the cardinality.
    TableShape(String),

    /// The table of the symbol has a value outside of the domain.
    ValueOutOfDomain(String),
}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDomain => write!(f, "empty domain"),
            Self::TableShape(symbol) => write!(f, "table of `{symbol}` does not match the cardinality"),
            Self::ValueOutOfDomain(symbol) => write!(f, "table of `{symbol}` leaves the domain"),
        }
    }
}

impl From<StructureError> for ErrorKind {
    fn from(e: StructureError) -> Self {
        ErrorKind::Structure(e)
    }
}
