//! Pointer scripts
//!
//! A YAML list of steps replayed against a loaded page:
//!
//! ```yaml
//! - enter: ".post"
//! - move: "#second"
//! - move: null           # pointer leaves the page
//! - leave: ".post"
//! - insert:
//!     parent: main
//!     html: '<div class="post">late</div>'
//! ```
//!
//! `enter`/`leave` target every element matching the selector; `move`
//! and `insert` use the first match.

use serde::Deserialize;

use crate::commands::Cmd;
use crate::dom::Selector;

use super::page::Page;

/// One scripted host action
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Deliver a pointer-enter to every match
    Enter(String),
    /// Deliver a pointer-leave to every match
    Leave(String),
    /// Move the pointer over the first match, or off the page for `null`
    Move(Option<String>),
    /// Append markup under the first match of `parent`
    Insert { parent: String, html: String },
}

/// Parse a YAML pointer script
pub fn parse_script(text: &str) -> Result<Vec<Step>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let deserializer = serde_yaml::Deserializer::from_str(text);
    serde_yaml::with::singleton_map_recursive::deserialize(deserializer)
        .map_err(|e| format!("Invalid pointer script: {}", e))
}

/// Replay steps against `page`, returning the combined commands
pub fn run_script(page: &mut Page, steps: &[Step]) -> Result<Cmd, String> {
    let mut cmds = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        tracing::debug!(step = i, ?step, "Running script step");
        let cmd = match step {
            Step::Enter(sel) => {
                let targets = page.document().query_selector_all(&Selector::parse(sel)?);
                Cmd::batch(targets.into_iter().map(|id| page.pointer_enter(id)).collect())
            }
            Step::Leave(sel) => {
                let targets = page.document().query_selector_all(&Selector::parse(sel)?);
                Cmd::batch(targets.into_iter().map(|id| page.pointer_leave(id)).collect())
            }
            Step::Move(None) => page.pointer_move(None),
            Step::Move(Some(sel)) => {
                let target = page.document().query_selector(&Selector::parse(sel)?);
                if target.is_none() {
                    tracing::warn!("Step {}: nothing matches '{}', pointer leaves page", i, sel);
                }
                page.pointer_move(target)
            }
            Step::Insert { parent, html } => {
                let parent_id = page
                    .document()
                    .query_selector(&Selector::parse(parent)?)
                    .ok_or_else(|| format!("Step {}: no element matches '{}'", i, parent))?;
                page.insert_html(parent_id, html)?;
                Cmd::None
            }
        };
        cmds.push(cmd);
    }
    Ok(Cmd::batch(cmds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_step_kinds() {
        let steps = parse_script(
            r##"
- enter: ".post"
- move: "#second"
- move: null
- leave: ".post"
- insert:
    parent: main
    html: '<div class="post">late</div>'
"##,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Enter(".post".to_string()),
                Step::Move(Some("#second".to_string())),
                Step::Move(None),
                Step::Leave(".post".to_string()),
                Step::Insert {
                    parent: "main".to_string(),
                    html: r#"<div class="post">late</div>"#.to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_unknown_step() {
        assert!(parse_script("- click: \".post\"\n").is_err());
    }
}
