//! How operation and relation symbols are written in LADR syntax.
//!
//! The symbols used by mace4 and prover9 for algebras follow a handful of conventions:
//! - `-` and `~` are prefix, `'` is postfix.
//! - Symbolic binary symbols (`*`, `+`, `\`, `/`, `^`, `<=`, ...) and `v` are infix.
//! - Anything else is written as a function, `f(x)` or `R(x,y)`.

/// The notation of a symbol at some arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Prefix,
    Postfix,
    Infix,
    Functional,
}

fn is_alphanumeric(symbol: &str) -> bool {
    symbol.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

pub fn notation(symbol: &str, arity: usize) -> Notation {
    match arity {
        1 => match symbol {
            "'" => Notation::Postfix,
            _ if is_alphanumeric(symbol) => Notation::Functional,
            _ => Notation::Prefix,
        },

        2 => match symbol {
            "v" => Notation::Infix,
            _ if is_alphanumeric(symbol) => Notation::Functional,
            _ => Notation::Infix,
        },

        _ => Notation::Functional,
    }
}

/// The term (or atom) of `symbol` applied to `arguments`.
pub fn apply(symbol: &str, arguments: &[&str]) -> String {
    match (notation(symbol, arguments.len()), arguments) {
        (Notation::Prefix, [a]) => format!("{symbol}{a}"),

        (Notation::Postfix, [a]) => format!("{a}{symbol}"),

        (Notation::Infix, [a, b]) => match is_alphanumeric(symbol) {
            true => format!("{a} {symbol} {b}"),
            false => format!("{a}{symbol}{b}"),
        },

        (_, []) => symbol.to_owned(),

        _ => format!("{symbol}({})", arguments.join(",")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notations() {
        assert_eq!(apply("-", &["x"]), "-x");
        assert_eq!(apply("~", &["x"]), "~x");
        assert_eq!(apply("'", &["x"]), "x'");
        assert_eq!(apply("f", &["x"]), "f(x)");
        assert_eq!(apply("*", &["x", "y"]), "x*y");
        assert_eq!(apply("\\", &["x", "y"]), "x\\y");
        assert_eq!(apply("v", &["x", "y"]), "x v y");
        assert_eq!(apply("<=", &["x", "y"]), "x<=y");
        assert_eq!(apply("R", &["x", "y"]), "R(x,y)");
        assert_eq!(apply("e", &[]), "e");
    }
}
