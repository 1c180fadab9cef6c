//! Static editor toolbar

use serde_json::{json, Value};

/// A single toolbar control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Bold,
    Italic,
    Underline,
    Strike,
    Blockquote,
    CodeBlock,
    Header(u8),
    OrderedList,
    BulletList,
    Subscript,
    Superscript,
    Outdent,
    Indent,
    Link,
    Image,
    Clean,
}

impl ToolbarItem {
    /// The control as a widget toolbar entry
    ///
    /// Plain formats are bare strings, parameterised ones are objects,
    /// e.g. `"bold"` or `{"header": 1}`.
    pub fn to_json(self) -> Value {
        match self {
            ToolbarItem::Bold => json!("bold"),
            ToolbarItem::Italic => json!("italic"),
            ToolbarItem::Underline => json!("underline"),
            ToolbarItem::Strike => json!("strike"),
            ToolbarItem::Blockquote => json!("blockquote"),
            ToolbarItem::CodeBlock => json!("code-block"),
            ToolbarItem::Header(level) => json!({ "header": level }),
            ToolbarItem::OrderedList => json!({ "list": "ordered" }),
            ToolbarItem::BulletList => json!({ "list": "bullet" }),
            ToolbarItem::Subscript => json!({ "script": "sub" }),
            ToolbarItem::Superscript => json!({ "script": "super" }),
            ToolbarItem::Outdent => json!({ "indent": "-1" }),
            ToolbarItem::Indent => json!({ "indent": "+1" }),
            ToolbarItem::Link => json!("link"),
            ToolbarItem::Image => json!("image"),
            ToolbarItem::Clean => json!("clean"),
        }
    }
}

/// Toolbar groups, in display order
const GROUPS: &[&[ToolbarItem]] = &[
    &[
        ToolbarItem::Bold,
        ToolbarItem::Italic,
        ToolbarItem::Underline,
        ToolbarItem::Strike,
    ],
    &[ToolbarItem::Blockquote, ToolbarItem::CodeBlock],
    &[ToolbarItem::Header(1), ToolbarItem::Header(2)],
    &[ToolbarItem::OrderedList, ToolbarItem::BulletList],
    &[ToolbarItem::Subscript, ToolbarItem::Superscript],
    &[ToolbarItem::Outdent, ToolbarItem::Indent],
    &[ToolbarItem::Link, ToolbarItem::Image],
    &[ToolbarItem::Clean],
];

/// The editor toolbar, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolbar {
    groups: &'static [&'static [ToolbarItem]],
}

impl Toolbar {
    /// The standard post toolbar
    pub const fn standard() -> Self {
        Self { groups: GROUPS }
    }

    pub fn groups(&self) -> &'static [&'static [ToolbarItem]] {
        self.groups
    }

    /// Whether the toolbar offers a control
    pub fn contains(&self, item: ToolbarItem) -> bool {
        self.groups.iter().any(|group| group.contains(&item))
    }

    /// The toolbar as the nested array a rich-text widget expects
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.groups
                .iter()
                .map(|group| Value::Array(group.iter().map(|item| item.to_json()).collect()))
                .collect(),
        )
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::standard()
    }
}
