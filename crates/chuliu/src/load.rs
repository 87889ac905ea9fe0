//! Edge-list loading.
//!
//! One directive per line, tokens separated by whitespace:
//!
//! ```text
//! # comment
//! root a
//! vertex lonely
//! a b 10
//! ```
//!
//! `root <id>` names the root (at most once), `vertex <id>` declares a vertex, and any other
//! line is `<from> <to> <weight>`. Endpoints are declared implicitly by the edges that use them.

use crate::error::{Error, Result};
use crate::graphlib::{Graph, GraphOptions, Insertion};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
pub struct EdgeList<W> {
    pub graph: Graph<String, W>,
    pub root: Option<String>,
}

pub fn load_edge_list<W>(path: impl AsRef<Path>) -> Result<EdgeList<W>>
where
    W: FromStr,
    W::Err: Display,
{
    let text = std::fs::read_to_string(path)?;
    parse_edge_list(&text)
}

pub fn parse_edge_list<W>(text: &str) -> Result<EdgeList<W>>
where
    W: FromStr,
    W::Err: Display,
{
    let mut graph: Graph<String, W> = Graph::new(GraphOptions::default());
    let mut root: Option<String> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            ["root", id] => {
                if root.is_some() {
                    return Err(parse_error(line, "root declared more than once"));
                }
                graph.insert_vertex((*id).to_string())?;
                root = Some((*id).to_string());
            }
            ["vertex", id] => {
                graph.insert_vertex((*id).to_string())?;
            }
            [from, to, weight] => {
                let weight = weight.parse::<W>().map_err(|err| {
                    parse_error(line, format!("invalid weight {weight:?}: {err}"))
                })?;
                let from = (*from).to_string();
                let to = (*to).to_string();
                graph.insert_vertex(from.clone())?;
                graph.insert_vertex(to.clone())?;
                if graph.insert_edge(&from, &to, weight)? == Insertion::AlreadyPresent {
                    return Err(parse_error(line, format!("duplicate edge {from} -> {to}")));
                }
            }
            _ => {
                return Err(parse_error(
                    line,
                    format!("expected `<from> <to> <weight>`, got {trimmed:?}"),
                ));
            }
        }
    }

    Ok(EdgeList { graph, root })
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
