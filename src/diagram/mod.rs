/*!
Diagrams of finite structures.

Drawing a structure happens in three steps:
1. A [HasseDiagram] is read from a table of the structure by [hasse_diagram], keeping covering edges only.
2. The diagram is written in the DOT language, and turned into an image by a [Renderer].
3. Images are collected into a payload and handed to a [DisplaySink].

A [Sketchbook] bundles a renderer and sink, and supports [m4diag](Sketchbook::m4diag) and [show](Sketchbook::show).

# Example

```rust
# use p9_algebra::config::DiagramConfig;
# use p9_algebra::diagram::{display::Buffer, render::DotSource, Sketchbook};
# use p9_algebra::structures::{FiniteStructure, Operation};
let mut book = Sketchbook::new(DiagramConfig::default(), DotSource, Buffer::default());

let chain = FiniteStructure::new(3)
    .unwrap()
    .with_operation("v", Operation::Binary(vec![vec![0, 1, 2], vec![1, 1, 2], vec![2, 2, 2]]))
    .unwrap();

assert!(book.m4diag(&[chain], "v", None).is_ok());
assert_eq!(book.sink.payloads.len(), 1);
```
*/

pub mod display;
mod dot;
mod hasse;
pub mod render;
mod show;

pub use display::DisplaySink;
pub use hasse::{hasse_diagram, DiagramTable, HasseDiagram, Reduction};
pub use render::Renderer;
pub use show::{default_symbols, DiagramSymbol, ShowInput, Sketchbook};
