//! HTML rendering.
//!
//! Produces Bootstrap-flavoured markup for both surfaces:
//!
//! ```text
//! <div class="btn-group">[button][button]</div>
//! <div class="btn-group" style="margin-left:10px;">[button]</div>
//!
//! <div id="people-context-menu" class="dropdown-menu ...">
//!   <h6 class="dropdown-header">..</h6>
//!   <a class="dropdown-item">..</a>
//!   <div class="dropdown-divider"></div>
//!   <a class="dropdown-item">..</a>
//! </div>
//! ```
//!
//! Every entry carries `data-index`, the position of its item in the
//! configured list, so hosts can route clicks back to the controller.

use tabact_core::{ActionItem, Presentation, RenderEntry};

use crate::surface::{ButtonListView, ContextMenuView, PresentationSurface};

/// Surface keeping the latest markup of both surfaces as strings.
#[derive(Debug, Clone, Default)]
pub struct MarkupSurface {
    buttons: String,
    container_classes: Vec<String>,
    menu: Option<String>,
}

impl MarkupSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button groups to place inside the configured container.
    pub fn buttons_html(&self) -> &str {
        &self.buttons
    }

    /// Classes to add to the button container.
    pub fn container_classes(&self) -> &[String] {
        &self.container_classes
    }

    /// The open context menu, if any.
    pub fn menu_html(&self) -> Option<&str> {
        self.menu.as_deref()
    }
}

impl<R> PresentationSurface<R> for MarkupSurface {
    fn render_buttons(&mut self, view: ButtonListView<'_, R>) {
        self.buttons = render_button_list(&view);
        self.container_classes = view.classes.to_vec();
    }

    fn show_context_menu(&mut self, view: ContextMenuView<'_, R>) {
        self.menu = Some(render_context_menu(&view));
    }

    fn hide_context_menu(&mut self) {
        self.menu = None;
    }
}

/// Render the toolbar: one group per plan segment.
pub fn render_button_list<R>(view: &ButtonListView<'_, R>) -> String {
    let settings = view.settings;
    let mut html = String::new();

    for (i, segment) in view.plan.segments.iter().enumerate() {
        html.push_str(&format!(r#"<div class="{}""#, escape(&settings.group_class)));
        if i > 0 {
            html.push_str(&format!(
                r#" style="margin-left:{}px;""#,
                settings.divider_spacing
            ));
        }
        html.push('>');
        for entry in &segment.entries {
            let presentation = presentation_of(view.items, entry);
            html.push_str(&render_button(
                entry,
                &presentation,
                view.icon_prefix,
                settings.icon_only,
                settings.disabled_opacity,
            ));
        }
        html.push_str("</div>");
    }

    html
}

fn render_button(
    entry: &RenderEntry,
    presentation: &Presentation,
    icon_prefix: &str,
    icon_only: bool,
    disabled_opacity: f32,
) -> String {
    let mut classes: Vec<&str> = Vec::new();
    classes.extend(presentation.button_classes.iter().map(String::as_str));
    classes.extend(presentation.classes.iter().map(String::as_str));

    let mut html = String::from(r#"<button type="button""#);
    if !classes.is_empty() {
        html.push_str(&format!(r#" class="{}""#, escape(&classes.join(" "))));
    }
    if let Some(id) = &presentation.id {
        html.push_str(&format!(r#" id="{}""#, escape(id)));
    }
    html.push_str(&format!(r#" data-index="{}""#, entry.index));

    if entry.disabled {
        html.push_str(&format!(
            r#" disabled="disabled" style="cursor:not-allowed;opacity:{};""#,
            disabled_opacity
        ));
    } else if icon_only && !entry.title.is_empty() {
        html.push_str(&format!(
            r#" title="{}" data-toggle="tooltip""#,
            escape(&entry.label())
        ));
    }
    html.push('>');

    let icon_style = if icon_only { "" } else { "margin-right:10px;" };
    html.push_str(&render_icon(presentation, icon_prefix, icon_style));

    if !icon_only {
        let label = if entry.disabled {
            entry.title.clone()
        } else {
            entry.label()
        };
        html.push_str(&escape(&label));
    }
    html.push_str("</button>");
    html
}

/// Render the context menu for one plan.
pub fn render_context_menu<R>(view: &ContextMenuView<'_, R>) -> String {
    let settings = view.settings;
    let mut html = String::new();

    let mut classes = vec!["dropdown-menu", "shadow"];
    classes.extend(view.classes.iter().map(String::as_str));
    // The host swaps in `data-show-style` one frame after insertion so the
    // transition runs.
    html.push_str(&format!(
        r#"<div id="{}" class="{}" style="display:block;position:absolute;top:{}px;left:{}px;visibility:hidden;opacity:0;transform:translateY(-30px);" data-show-style="display:block;position:absolute;top:{}px;left:{}px;visibility:visible;opacity:1;transform:translateY(0px);transition:{} ease all;z-index:99999;">"#,
        escape(&view.id),
        escape(&classes.join(" ")),
        view.position.y,
        view.position.x,
        view.position.y,
        view.position.x,
        escape(&settings.show_speed),
    ));

    if let Some(header) = &view.header {
        html.push_str(&format!(
            r#"<h6 class="dropdown-header">{}</h6>"#,
            escape(header)
        ));
        if settings.header_followed_by_divider {
            html.push_str(r#"<div class="dropdown-divider"></div>"#);
        }
    }

    for (i, segment) in view.plan.segments.iter().enumerate() {
        if i > 0 {
            html.push_str(r#"<div class="dropdown-divider"></div>"#);
        }
        for entry in &segment.entries {
            let presentation = presentation_of(view.items, entry);
            html.push_str(&render_menu_entry(entry, &presentation, view.icon_prefix));
        }
    }

    html.push_str("</div>");
    html
}

fn render_menu_entry(entry: &RenderEntry, presentation: &Presentation, icon_prefix: &str) -> String {
    let mut classes = vec!["dropdown-item"];
    classes.extend(presentation.classes.iter().map(String::as_str));
    classes.extend(presentation.context_menu_classes.iter().map(String::as_str));
    if entry.disabled {
        classes.push("disabled");
    }

    let style = if entry.disabled {
        "cursor:pointer;opacity:0.5;"
    } else {
        "cursor:pointer;"
    };

    format!(
        r#"<a class="{}" style="{}" data-index="{}">{}{}</a>"#,
        escape(&classes.join(" ")),
        style,
        entry.index,
        render_icon(presentation, icon_prefix, "margin-right:15px;"),
        escape(&entry.label()),
    )
}

fn render_icon(presentation: &Presentation, icon_prefix: &str, style: &str) -> String {
    let Some(icon) = presentation.icon.as_deref().filter(|icon| !icon.is_empty()) else {
        return String::new();
    };
    let class = if icon_prefix.is_empty() {
        icon.to_string()
    } else {
        format!("{} {}", icon_prefix, icon)
    };
    if style.is_empty() {
        format!(r#"<i class="{}"></i>"#, escape(&class))
    } else {
        format!(r#"<i class="{}" style="{}"></i>"#, escape(&class), style)
    }
}

fn presentation_of<R>(items: &[ActionItem<R>], entry: &RenderEntry) -> Presentation {
    items
        .get(entry.index)
        .and_then(ActionItem::presentation)
        .cloned()
        .unwrap_or_default()
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ContextualActions;
    use crate::options::Options;
    use crate::table::{MemoryTable, TableEvent};
    use tabact_core::{OptionItem, Settings, StaticItem};

    fn items() -> Vec<ActionItem<i32>> {
        vec![
            OptionItem::new("Delete", |_: &[i32]| {})
                .with_multi_title("Delete all")
                .with_disabled(|n: &i32| *n < 0)
                .with_icon("fa-trash")
                .into(),
            ActionItem::divider(),
            StaticItem::new("Add <row>", || {}).into(),
        ]
    }

    fn actions(settings: Settings) -> ContextualActions<MemoryTable<i32>, MarkupSurface> {
        let options = Options::new(settings, items());
        ContextualActions::new(options, MemoryTable::new("nums", vec![1, -2, 3]), MarkupSurface::new())
            .unwrap()
    }

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.button_list.container = Some("#toolbar".into());
        settings.icon_prefix = "fa".into();
        settings
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_empty_selection_disables_buttons() {
        let actions = actions(settings());
        let html = actions.surface().buttons_html();

        assert!(html.starts_with(r#"<div class="btn-group"><button type="button" data-index="0" disabled="disabled" style="cursor:not-allowed;opacity:0.5;">"#));
        assert!(html.contains(r#"<i class="fa fa-trash" style="margin-right:10px;"></i>Delete</button>"#));
        assert!(html.contains(r#"<div class="btn-group" style="margin-left:10px;">"#));
        assert!(html.contains("Add &lt;row&gt;</button>"));
    }

    #[test]
    fn test_counts_on_multi_selection() {
        let mut actions = actions(settings());
        for i in 0..3 {
            actions.table_mut().select(i);
        }
        actions.update();

        let html = actions.surface().buttons_html();
        assert!(html.contains("Delete all (2)</button>"));
        assert!(!html.contains("Add &lt;row&gt; ("));
    }

    #[test]
    fn test_icon_only_uses_tooltips() {
        let mut settings = settings();
        settings.button_list.icon_only = true;
        let mut actions = actions(settings);
        actions.table_mut().select(0);
        actions.table_mut().select(2);
        actions.update();

        let html = actions.surface().buttons_html();
        assert!(html.contains(r#"title="Delete all (2)" data-toggle="tooltip"><i class="fa fa-trash"></i></button>"#));
    }

    #[test]
    fn test_container_classes() {
        let mut settings = settings();
        settings.classes = vec!["compact".into()];
        let actions = actions(settings);
        assert_eq!(actions.surface().container_classes(), ["compact".to_string()]);
    }

    #[test]
    fn test_context_menu_markup() {
        let mut settings = settings();
        settings.context_menu.header = Some("Row actions".into());
        settings.context_menu.header_followed_by_divider = true;
        settings.context_menu.show_static_options = true;
        let mut actions = actions(settings);

        actions.handle_event(TableEvent::RightClick { row: 1, x: 200.0, y: 120.5 });
        let html = actions.surface().menu_html().unwrap();

        assert!(html.starts_with(r#"<div id="nums-context-menu" class="dropdown-menu shadow" style="display:block;position:absolute;top:110.5px;left:190px;visibility:hidden;"#));
        assert!(html.contains(r#"visibility:visible;opacity:1;transform:translateY(0px);transition:0.30s ease all;z-index:99999;">"#));
        assert!(html.contains(r#"<h6 class="dropdown-header">Row actions</h6><div class="dropdown-divider"></div>"#));
        assert!(html.contains(r#"<a class="dropdown-item disabled" style="cursor:pointer;opacity:0.5;" data-index="0">"#));
        assert!(html.contains(r#"</a><div class="dropdown-divider"></div><a class="dropdown-item" style="cursor:pointer;" data-index="2">Add &lt;row&gt;</a>"#));

        actions.handle_event(TableEvent::ClickOutside);
        assert!(actions.surface().menu_html().is_none());
    }

    #[test]
    fn test_menu_count_uses_actionable_rows() {
        let mut settings = settings();
        settings.context_menu.is_multi = true;
        let mut actions = actions(settings);
        actions.table_mut().select(1);

        actions.handle_event(TableEvent::RightClick { row: 1, x: 0.0, y: 0.0 });
        actions.handle_event(TableEvent::ClickOutside);
        actions.table_mut().select(0);
        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });

        let html = actions.surface().menu_html().unwrap();
        assert!(html.contains("Delete all (1)</a>"));
    }
}
