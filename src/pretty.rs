//! ASCII rendering for trees.
//!
//! A tree displays sideways: the right subtree above its root and the left
//! subtree below, so reading top to bottom descends in value. Each node sits
//! on its own line behind a `┌── ` or `└── ` connector.
//!
//! ```text
//! │       ┌── 8
//! │   ┌── 7
//! │   │   └── 6
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 2
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(root, f, "", true),
            None => Ok(()),
        }
    }
}

fn render<T>(node: &Node<T>, f: &mut fmt::Formatter<'_>, prefix: &str, is_left: bool) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render(right, f, &deeper, false)?;
    }

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;

    if let Some(left) = node.left() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render(left, f, &deeper, true)?;
    }
    Ok(())
}
