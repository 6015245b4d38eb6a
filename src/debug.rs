use core::fmt;
use std::collections::VecDeque;

use crate::{NodeIdx, SplayTree};

impl<T> SplayTree<T>
where
    T: fmt::Display,
{
    /// Writes the current tree shape as a Graphviz digraph.
    ///
    /// Each tree level is emitted as a `rank=same` row; absent children are
    /// drawn as points so the shape stays readable.
    pub fn dotgraph<W>(&self, name: &str, mut w: W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let root = match self.root {
            Some(r) => r,
            None => return write!(w, "digraph \"graph-{name}\" {{}}"),
        };

        enum Item {
            Node(NodeIdx),
            Missing(u32),
        }

        let mut queue = VecDeque::new();
        queue.push_back(Item::Node(root));

        write!(
            w,
            "digraph \"graph-{name}\" {{\n subgraph \"subgraph-{name}\" {{"
        )?;

        let mut missing = 0;
        let mut links = String::new();

        loop {
            use fmt::Write;
            let remaining = queue.len();
            if remaining == 0 {
                break;
            }

            write!(w, "{{rank=same; ")?;

            for _row_node in 0..remaining {
                let node = match queue.pop_front().unwrap() {
                    Item::Node(node) => node,
                    Item::Missing(id) => {
                        write!(w, "\"graph{name}-missing{id}\" [shape=point]; ")?;
                        continue;
                    }
                };

                let key = self.key(node);
                write!(w, "\"graph{name}-{key}\" [label=\"{key}\"]; ")?;

                for child in [self.left(node), self.right(node)] {
                    match child {
                        Some(child) => {
                            let child_key = self.key(child);

                            queue.push_back(Item::Node(child));
                            writeln!(
                                links,
                                "\"graph{name}-{key}\" -> \"graph{name}-{child_key}\";"
                            )?;
                        }
                        None => {
                            queue.push_back(Item::Missing(missing));
                            writeln!(
                                links,
                                "\"graph{name}-{key}\" -> \"graph{name}-missing{missing}\";"
                            )?;
                            missing += 1;
                        }
                    }
                }
            }

            writeln!(w, "}}")?;
        }

        w.write_str(&links)?;

        w.write_str(" }\n}")
    }
}
