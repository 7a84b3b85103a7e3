pub use {graph::*, grid::*, lines::*, queue::*};

mod graph;
mod grid;
mod lines;
mod queue;
