//! Selection rules.
//!
//! Given an item and the rows it would act upon, decide whether the item is
//! hidden, whether it is disabled, which title it shows and how many rows it
//! would affect. All functions are pure apart from calling the item's own
//! predicates.
//!
//! ## Disabling
//!
//! | Rule | Applies to |
//! |------|------------|
//! | Nothing selected | Option |
//! | `multi == false` and more than one row | Option |
//! | Lenient: predicate true for every row | Option (default) |
//! | Strict: predicate true for any row | Option with `strict_disabling` |
//! | Zero-argument predicate true | Static |

use crate::item::{ActionItem, OptionItem};

/// Everything the assembler needs to know about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub hidden: bool,
    pub disabled: bool,
    pub title: String,
    pub affected_count: usize,
}

/// Evaluate all rules for an item at once.
pub fn evaluate<R>(item: &ActionItem<R>, rows: &[R]) -> Evaluation {
    Evaluation {
        hidden: is_hidden(item, rows),
        disabled: is_disabled(item, rows),
        title: resolved_title(item, rows).to_string(),
        affected_count: affected_count(item, rows),
    }
}

/// Whether the item should not be rendered at all.
///
/// One row matching the hide predicate hides the item for the whole batch.
/// Row-predicated items are also hidden when nothing is selected. Static
/// items only consult their zero-argument predicate.
pub fn is_hidden<R>(item: &ActionItem<R>, rows: &[R]) -> bool {
    match item {
        ActionItem::Divider => false,
        ActionItem::Option(option) => match &option.is_hidden {
            Some(predicate) => rows.is_empty() || rows.iter().any(|row| predicate(row)),
            None => false,
        },
        ActionItem::Static(item) => item.is_hidden.as_ref().is_some_and(|predicate| predicate()),
    }
}

/// Whether the item is rendered but cannot be clicked.
pub fn is_disabled<R>(item: &ActionItem<R>, rows: &[R]) -> bool {
    match item {
        ActionItem::Divider => false,
        ActionItem::Option(option) => {
            rows.is_empty()
                || (!option.multi && rows.len() > 1)
                || predicate_disables(option, rows)
        }
        ActionItem::Static(item) => item.is_disabled.as_ref().is_some_and(|predicate| predicate()),
    }
}

fn predicate_disables<R>(option: &OptionItem<R>, rows: &[R]) -> bool {
    let Some(predicate) = &option.is_disabled else {
        return false;
    };
    if option.strict_disabling {
        rows.iter().any(|row| predicate(row))
    } else {
        rows.iter().all(|row| predicate(row))
    }
}

/// The label to show: the multi title for multi-row selections, if any.
pub fn resolved_title<'a, R>(item: &'a ActionItem<R>, rows: &[R]) -> &'a str {
    let (title, multi_title) = match item {
        ActionItem::Divider => return "",
        ActionItem::Option(option) => (&option.title, &option.multi_title),
        ActionItem::Static(item) => (&item.title, &item.multi_title),
    };
    match multi_title {
        Some(multi_title) if rows.len() > 1 => multi_title,
        _ => title,
    }
}

/// Number of rows the action would actually touch.
pub fn affected_count<R>(item: &ActionItem<R>, rows: &[R]) -> usize {
    match item {
        ActionItem::Option(OptionItem {
            is_disabled: Some(predicate),
            ..
        }) => rows.iter().filter(|row| !predicate(*row)).count(),
        _ => rows.len(),
    }
}

/// The rows handed to the action and to the confirmation factory.
pub fn actionable_rows<R: Clone>(item: &ActionItem<R>, rows: &[R]) -> Vec<R> {
    match item {
        ActionItem::Option(OptionItem {
            is_disabled: Some(predicate),
            ..
        }) => rows.iter().filter(|row| !predicate(*row)).cloned().collect(),
        _ => rows.to_vec(),
    }
}
