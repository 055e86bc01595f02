//! Lenient view over a parsed UI tree.
//!
//! Nodes are plain JSON objects with a `type`, optional `props` and optional `children`.
//! A node whose `type` is missing, unknown, or still a partial string such as `"conta"`
//! is skipped rather than reported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Container,
    Text,
    Button,
    Card,
    Metric,
    Chart,
    Alert,
    Image,
    Divider,
}

impl ComponentType {
    pub const ALL: [ComponentType; 9] = [
        ComponentType::Container,
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Card,
        ComponentType::Metric,
        ComponentType::Chart,
        ComponentType::Alert,
        ComponentType::Image,
        ComponentType::Divider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Container => "container",
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Card => "card",
            ComponentType::Metric => "metric",
            ComponentType::Chart => "chart",
            ComponentType::Alert => "alert",
            ComponentType::Image => "image",
            ComponentType::Divider => "divider",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UiNode<'a> {
    kind: ComponentType,
    raw: &'a Map<String, Value>,
}

impl<'a> UiNode<'a> {
    /// `None` when `v` is not an object with a known `type`.
    pub fn from_value(v: &'a Value) -> Option<Self> {
        let raw = v.as_object()?;
        let kind = ComponentType::deserialize(raw.get("type")?).ok()?;
        Some(Self { kind, raw })
    }

    #[inline]
    pub fn kind(&self) -> ComponentType {
        self.kind
    }

    pub fn id(&self) -> Option<&'a str> {
        self.raw.get("id").and_then(Value::as_str)
    }

    pub fn props(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get("props").and_then(Value::as_object)
    }

    pub fn prop(&self, name: &str) -> Option<&'a Value> {
        self.props().and_then(|p| p.get(name))
    }

    /// Renderable children. Unknown or partial child nodes are skipped.
    pub fn children(self) -> impl Iterator<Item = UiNode<'a>> {
        self.raw
            .get("children")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(UiNode::from_value)
    }

    /// First of `title`, `label`, `content` that is a string.
    pub fn caption(&self) -> Option<&'a str> {
        ["title", "label", "content"]
            .into_iter()
            .find_map(|k| self.prop(k).and_then(Value::as_str))
    }
}

/// Indented outline of the renderable nodes under `root`, one node per line.
pub fn outline(root: &Value) -> String {
    let mut out = String::new();
    if let Some(node) = UiNode::from_value(root) {
        outline_into(&mut out, node, 0);
    }
    out
}

fn outline_into(out: &mut String, node: UiNode<'_>, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.kind().as_str());
    if let Some(c) = node.caption() {
        let _ = write!(out, " {:?}", c);
    }
    out.push('\n');
    for child in node.children() {
        outline_into(out, child, depth + 1);
    }
}
