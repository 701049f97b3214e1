//! Render plans.
//!
//! The assembler turns the configured item list plus the current rows into
//! segments of visible entries. Segments are the button groups of the toolbar
//! and the divider-separated sections of the context menu.
//!
//! ```text
//! items:     [D] [A] [D] [x] [D] [B] [D]      x = hidden
//! filtered:  [D] [A] [D] [D] [B] [D]
//! retained:      [A] [D]     [B]
//! segments:      [A] | [B]
//! ```

use crate::evaluate;
use crate::item::{ActionItem, ItemKind};

/// Which surface a plan is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Toolbar: option and static items.
    ButtonList,
    /// Right-click menu: static items only when `show_static` is set.
    ContextMenu { show_static: bool },
}

impl Surface {
    fn accepts<R>(&self, item: &ActionItem<R>) -> bool {
        match self {
            Surface::ButtonList => true,
            Surface::ContextMenu { show_static } => *show_static || !item.is_static(),
        }
    }
}

/// One rendered, visible entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    /// Position of the item in the configured list.
    pub index: usize,
    pub kind: ItemKind,
    pub title: String,
    pub disabled: bool,
    pub affected_count: usize,
    /// Whether the label carries the affected count, e.g. "Delete (3)".
    pub show_count: bool,
}

impl RenderEntry {
    /// Title with the affected count appended when it should be shown.
    pub fn label(&self) -> String {
        if self.show_count {
            format!("{} ({})", self.title, self.affected_count)
        } else {
            self.title.clone()
        }
    }
}

/// A run of entries between two retained dividers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub entries: Vec<RenderEntry>,
}

impl Segment {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Flattened view of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanElement<'a> {
    Entry(&'a RenderEntry),
    Divider,
}

/// Ordered, non-empty segments of visible entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub segments: Vec<Segment>,
}

impl RenderPlan {
    /// Assemble the plan for `surface` from the item list and current rows.
    pub fn assemble<R>(items: &[ActionItem<R>], rows: &[R], surface: Surface) -> Self {
        let filtered: Vec<(usize, &ActionItem<R>)> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| surface.accepts(*item) && !evaluate::is_hidden(*item, rows))
            .collect();

        let mut segments = vec![Segment::default()];
        let mut previous_was_divider = false;
        let last = filtered.len().saturating_sub(1);

        for (position, (index, item)) in filtered.iter().enumerate() {
            if item.is_divider() {
                let retained = position != 0 && position != last && !previous_was_divider;
                if retained {
                    segments.push(Segment::default());
                    previous_was_divider = true;
                }
                continue;
            }

            let evaluation = evaluate::evaluate(*item, rows);
            let kind = item.kind();
            if let Some(segment) = segments.last_mut() {
                segment.entries.push(RenderEntry {
                    index: *index,
                    kind,
                    title: evaluation.title,
                    disabled: evaluation.disabled,
                    affected_count: evaluation.affected_count,
                    show_count: rows.len() > 1 && kind != ItemKind::Static,
                });
            }
            previous_was_divider = false;
        }

        segments.retain(|segment| !segment.is_empty());
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All entries in order, ignoring segment boundaries.
    pub fn entries(&self) -> impl Iterator<Item = &RenderEntry> {
        self.segments.iter().flat_map(|segment| segment.entries.iter())
    }

    /// Entries with a divider between consecutive segments.
    pub fn elements(&self) -> Vec<PlanElement<'_>> {
        let mut elements = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                elements.push(PlanElement::Divider);
            }
            elements.extend(segment.entries.iter().map(PlanElement::Entry));
        }
        elements
    }

    /// Find the entry rendered for the item at `index`.
    pub fn entry(&self, index: usize) -> Option<&RenderEntry> {
        self.entries().find(|entry| entry.index == index)
    }
}
