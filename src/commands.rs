//! Command types for the Elm-style architecture
//!
//! Commands report side effects of an update back to the host.

use crate::dom::NodeId;

/// Work the host should do after an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Inline styles of these elements changed and need repainting
    Restyle(Vec<NodeId>),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a repaint
    pub fn needs_restyle(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Restyle(nodes) => !nodes.is_empty(),
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_restyle()),
        }
    }

    /// Every element named by a `Restyle`, in order, without duplicates
    pub fn restyled_nodes(&self) -> Vec<NodeId> {
        fn collect(cmd: &Cmd, out: &mut Vec<NodeId>) {
            match cmd {
                Cmd::None => {}
                Cmd::Restyle(nodes) => {
                    for node in nodes {
                        if !out.contains(node) {
                            out.push(*node);
                        }
                    }
                }
                Cmd::Batch(cmds) => cmds.iter().for_each(|c| collect(c, out)),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
