//! Contextual actions controller.
//!
//! `ContextualActions` binds a configured item list to one table and one
//! presentation surface. It re-renders the button list whenever the
//! selection changes, opens the context menu on right click, and runs
//! actions when an entry is clicked.
//!
//! ## Action flow
//!
//! 1. The clicked entry is looked up and re-checked against the rows it was
//!    rendered for. Hidden or disabled entries are ignored.
//! 2. Static items run immediately.
//! 3. Option items run with the actionable rows, unless they require a
//!    confirmation. Then the host is asked to confirm and the action runs
//!    once `resolve_confirmation` is called with `true`.
//! 4. After an action the selection is cleared (if configured) and the
//!    button list is refreshed.

use std::sync::Arc;

use tabact_core::evaluate;
use tabact_core::plan::{RenderPlan, Surface};
use tabact_core::{ActionItem, Settings};

use crate::error::{PluginError, PluginResult};
use crate::options::Options;
use crate::surface::{ButtonListView, ContextMenuView, MenuPosition, PresentationSurface};
use crate::table::{TableAdapter, TableEvent};

/// Identifies one confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmationTicket(pub u64);

impl std::fmt::Display for ConfirmationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a click did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No item at that index, or the item is a divider.
    UnknownItem,
    Hidden,
    Disabled,
    /// The clicked surface is not enabled or not shown.
    SurfaceInactive,
}

/// Result of clicking an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran on `affected` rows (zero for static items).
    Performed { affected: usize },
    /// The host was asked to confirm.
    AwaitingConfirmation(ConfirmationTicket),
    /// The user declined the confirmation.
    Declined,
    Ignored(IgnoreReason),
}

/// The context menu currently shown.
#[derive(Debug, Clone)]
pub struct OpenMenu<R> {
    /// Selection snapshot taken when the menu opened.
    pub rows: Vec<R>,
    pub position: MenuPosition,
    pub plan: RenderPlan,
}

struct PendingConfirmation<R> {
    ticket: ConfirmationTicket,
    index: usize,
    rows: Vec<R>,
}

/// Contextual actions bound to a table.
pub struct ContextualActions<T: TableAdapter, S> {
    options: Options<T::Row>,
    table: T,
    surface: S,
    /// Selection the button list was last rendered for.
    button_rows: Vec<T::Row>,
    menu: Option<OpenMenu<T::Row>>,
    pending: Option<PendingConfirmation<T::Row>>,
    next_ticket: u64,
}

impl<T, S> ContextualActions<T, S>
where
    T: TableAdapter,
    S: PresentationSurface<T::Row>,
{
    /// Validate the options and render the initial button list.
    pub fn new(options: Options<T::Row>, table: T, surface: S) -> PluginResult<Self> {
        options.settings.validate()?;

        tracing::info!(
            "Binding {} action items (buttons: {}, context menu: {})",
            options.items.len(),
            options.settings.button_list.enabled,
            options.settings.context_menu.enabled
        );

        let mut this = Self {
            options,
            table,
            surface,
            button_rows: Vec::new(),
            menu: None,
            pending: None,
            next_ticket: 0,
        };
        this.update();
        Ok(this)
    }

    /// React to a table event.
    pub fn handle_event(&mut self, event: TableEvent<T::RowId>) {
        match event {
            TableEvent::Selected | TableEvent::Deselected => self.update(),
            TableEvent::RightClick { row, x, y } => self.open_context_menu(&row, x, y),
            TableEvent::ClickOutside => self.hide_context_menu(),
        }
    }

    /// Re-render the button list for the current selection.
    pub fn update(&mut self) {
        let rows = self.table.selected_rows();
        if self.options.settings.button_list.enabled {
            let plan = RenderPlan::assemble(&self.options.items, &rows, Surface::ButtonList);
            self.surface.render_buttons(ButtonListView {
                plan: &plan,
                items: &self.options.items,
                settings: &self.options.settings.button_list,
                classes: &self.options.settings.classes,
                icon_prefix: &self.options.settings.icon_prefix,
                rows: &rows,
            });
        }
        self.button_rows = rows;
    }

    fn open_context_menu(&mut self, row: &T::RowId, x: f32, y: f32) {
        if !self.options.settings.context_menu.is_multi {
            self.table.deselect_all();
        }
        let is_data_row = self.table.select_row(row);
        self.update();

        if !self.options.settings.context_menu.enabled || !is_data_row {
            return;
        }

        self.hide_context_menu();

        let settings = &self.options.settings.context_menu;
        let rows = self.table.selected_rows();
        let plan = RenderPlan::assemble(
            &self.options.items,
            &rows,
            Surface::ContextMenu {
                show_static: settings.show_static_options,
            },
        );
        let position = MenuPosition {
            x: x + settings.x_offset as f32,
            y: y + settings.y_offset as f32,
        };

        tracing::info!(
            "Opening context menu for {} rows at ({}, {})",
            rows.len(),
            position.x,
            position.y
        );

        self.surface.show_context_menu(ContextMenuView {
            id: format!("{}-context-menu", self.table.table_id()),
            plan: &plan,
            items: &self.options.items,
            settings,
            classes: &self.options.settings.classes,
            icon_prefix: &self.options.settings.icon_prefix,
            header: self.options.header(&rows),
            position,
            rows: &rows,
        });
        self.menu = Some(OpenMenu {
            rows,
            position,
            plan,
        });
    }

    /// Close the context menu if it is shown.
    pub fn hide_context_menu(&mut self) {
        if self.menu.take().is_some() {
            self.surface.hide_context_menu();
        }
    }

    /// Click the button rendered for the item at `index`.
    pub fn click_button(&mut self, index: usize) -> ActionOutcome {
        if !self.options.settings.button_list.enabled {
            return ActionOutcome::Ignored(IgnoreReason::SurfaceInactive);
        }
        let rows = self.button_rows.clone();
        self.activate(index, rows)
    }

    /// Click the context menu entry for the item at `index`.
    ///
    /// Entries that are not clickable leave the menu open.
    pub fn click_menu_item(&mut self, index: usize) -> ActionOutcome {
        let Some(menu) = &self.menu else {
            return ActionOutcome::Ignored(IgnoreReason::SurfaceInactive);
        };
        match menu.plan.entry(index) {
            None => return ActionOutcome::Ignored(IgnoreReason::UnknownItem),
            Some(entry) if entry.disabled => return ActionOutcome::Ignored(IgnoreReason::Disabled),
            Some(_) => {}
        }

        let Some(menu) = self.menu.take() else {
            return ActionOutcome::Ignored(IgnoreReason::SurfaceInactive);
        };
        self.surface.hide_context_menu();
        self.activate(index, menu.rows)
    }

    fn activate(&mut self, index: usize, rows: Vec<T::Row>) -> ActionOutcome {
        let Some(item) = self.options.items.get(index) else {
            return ActionOutcome::Ignored(IgnoreReason::UnknownItem);
        };
        if evaluate::is_hidden(item, &rows) {
            return ActionOutcome::Ignored(IgnoreReason::Hidden);
        }
        if evaluate::is_disabled(item, &rows) {
            return ActionOutcome::Ignored(IgnoreReason::Disabled);
        }

        match item {
            ActionItem::Divider => ActionOutcome::Ignored(IgnoreReason::UnknownItem),
            ActionItem::Static(item) => {
                let action = Arc::clone(&item.action);
                tracing::info!("Running static action '{}'", item.title);
                action();
                self.after_action();
                ActionOutcome::Performed { affected: 0 }
            }
            ActionItem::Option(option) => {
                let actionable = evaluate::actionable_rows(item, &rows);

                if let Some(factory) = &option.confirmation {
                    let confirmation = factory(&actionable);
                    self.next_ticket += 1;
                    let ticket = ConfirmationTicket(self.next_ticket);
                    if self.pending.is_some() {
                        tracing::warn!("Replacing pending confirmation with {}", ticket);
                    }
                    self.pending = Some(PendingConfirmation {
                        ticket,
                        index,
                        rows: actionable,
                    });
                    match &self.options.show_confirmation {
                        Some(show) => show(ticket, &confirmation),
                        None => tracing::warn!(
                            "No confirmation handler, '{}' stays pending as {}",
                            confirmation.message,
                            ticket
                        ),
                    }
                    return ActionOutcome::AwaitingConfirmation(ticket);
                }

                let action = Arc::clone(&option.action);
                tracing::info!("Running '{}' on {} rows", option.title, actionable.len());
                action(&actionable);
                self.after_action();
                ActionOutcome::Performed {
                    affected: actionable.len(),
                }
            }
        }
    }

    /// Answer the pending confirmation.
    ///
    /// Fails if `ticket` is not the most recent request still pending.
    pub fn resolve_confirmation(
        &mut self,
        ticket: ConfirmationTicket,
        confirmed: bool,
    ) -> PluginResult<ActionOutcome> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                return Err(PluginError::UnknownConfirmation(ticket));
            }
        };

        if !confirmed {
            tracing::info!("Confirmation {} declined", ticket);
            return Ok(ActionOutcome::Declined);
        }

        let Some(ActionItem::Option(option)) = self.options.items.get(pending.index) else {
            return Ok(ActionOutcome::Ignored(IgnoreReason::UnknownItem));
        };
        let action = Arc::clone(&option.action);
        tracing::info!(
            "Confirmation {} accepted, running '{}' on {} rows",
            ticket,
            option.title,
            pending.rows.len()
        );
        action(&pending.rows);
        self.after_action();
        Ok(ActionOutcome::Performed {
            affected: pending.rows.len(),
        })
    }

    fn after_action(&mut self) {
        if self.options.settings.deselect_after_action {
            self.table.deselect_all();
        }
        self.update();
    }

    pub fn pending_confirmation(&self) -> Option<ConfirmationTicket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }

    pub fn context_menu(&self) -> Option<&OpenMenu<T::Row>> {
        self.menu.as_ref()
    }

    pub fn button_rows(&self) -> &[T::Row] {
        &self.button_rows
    }

    pub fn settings(&self) -> &Settings {
        &self.options.settings
    }

    pub fn items(&self) -> &[ActionItem<T::Row>] {
        &self.options.items
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Direct access to the table. Call `update` after changing the selection.
    pub fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MemoryTable;
    use mockall::mock;
    use parking_lot::Mutex;
    use tabact_core::{Confirmation, OptionItem, StaticItem};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        locked: bool,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "ada", locked: false },
            Person { name: "bob", locked: true },
            Person { name: "cy", locked: false },
        ]
    }

    /// Records what the controller asked it to show.
    #[derive(Default)]
    struct RecordingSurface {
        button_plans: Vec<RenderPlan>,
        menus: Vec<(String, RenderPlan, MenuPosition, Option<String>)>,
        hides: usize,
    }

    impl<R> PresentationSurface<R> for RecordingSurface {
        fn render_buttons(&mut self, view: ButtonListView<'_, R>) {
            self.button_plans.push(view.plan.clone());
        }

        fn show_context_menu(&mut self, view: ContextMenuView<'_, R>) {
            self.menus
                .push((view.id, view.plan.clone(), view.position, view.header));
        }

        fn hide_context_menu(&mut self) {
            self.hides += 1;
        }
    }

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.button_list.container = Some("#toolbar".into());
        settings
    }

    type Log = Arc<Mutex<Vec<String>>>;

    fn delete_item(log: &Log) -> ActionItem<Person> {
        let log = Arc::clone(log);
        OptionItem::new("Delete", move |rows: &[Person]| {
            log.lock().extend(rows.iter().map(|r| r.name.to_string()));
        })
        .with_disabled(|r: &Person| r.locked)
        .into()
    }

    fn controller(
        items: Vec<ActionItem<Person>>,
        settings: Settings,
    ) -> ContextualActions<MemoryTable<Person>, RecordingSurface> {
        let options = Options::new(settings, items);
        ContextualActions::new(options, MemoryTable::new("people", people()), RecordingSurface::default())
            .unwrap()
    }

    #[test]
    fn test_new_requires_container() {
        let options: Options<Person> = Options::new(Settings::default(), Vec::new());
        let result = ContextualActions::new(
            options,
            MemoryTable::new("people", people()),
            RecordingSurface::default(),
        );
        assert!(matches!(result, Err(PluginError::Config(_))));
    }

    #[test]
    fn test_new_renders_buttons() {
        let log = Log::default();
        let actions = controller(vec![delete_item(&log)], settings());
        assert_eq!(actions.surface().button_plans.len(), 1);
        let entry = actions.surface().button_plans[0].entry(0).unwrap();
        assert!(entry.disabled);
    }

    #[test]
    fn test_selection_events_refresh_buttons() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());

        actions.table_mut().select(0);
        actions.handle_event(TableEvent::Selected);

        let plan = actions.surface().button_plans.last().unwrap();
        assert!(!plan.entry(0).unwrap().disabled);
        assert_eq!(actions.button_rows().len(), 1);
    }

    #[test]
    fn test_click_button_runs_on_actionable_rows() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        for i in 0..3 {
            actions.table_mut().select(i);
        }
        actions.update();

        let outcome = actions.click_button(0);
        assert_eq!(outcome, ActionOutcome::Performed { affected: 2 });
        assert_eq!(*log.lock(), vec!["ada", "cy"]);
        // Deselected after the action.
        assert!(actions.table().selected_rows().is_empty());
        assert!(actions.surface().button_plans.last().unwrap().entry(0).unwrap().disabled);
    }

    #[test]
    fn test_keep_selection_after_action() {
        let log = Log::default();
        let mut settings = settings();
        settings.deselect_after_action = false;
        let mut actions = controller(vec![delete_item(&log)], settings);
        actions.table_mut().select(0);
        actions.update();

        actions.click_button(0);
        assert_eq!(actions.table().selected_indices(), vec![0]);
    }

    #[test]
    fn test_disabled_and_unknown_buttons_ignored() {
        let log = Log::default();
        let mut actions = controller(vec![ActionItem::divider(), delete_item(&log)], settings());

        assert_eq!(actions.click_button(1), ActionOutcome::Ignored(IgnoreReason::Disabled));
        assert_eq!(actions.click_button(0), ActionOutcome::Ignored(IgnoreReason::UnknownItem));
        assert_eq!(actions.click_button(9), ActionOutcome::Ignored(IgnoreReason::UnknownItem));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_static_action_ignores_selection() {
        let count = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&count);
        let items = vec![StaticItem::new("Add", move || *counter.lock() += 1).into()];
        let mut actions = controller(items, settings());

        assert_eq!(actions.click_button(0), ActionOutcome::Performed { affected: 0 });
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_right_click_collapses_selection() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        actions.table_mut().select(0);
        actions.table_mut().select(1);

        actions.handle_event(TableEvent::RightClick { row: 2, x: 100.0, y: 50.0 });

        assert_eq!(actions.table().selected_indices(), vec![2]);
        let menu = actions.context_menu().unwrap();
        assert_eq!(menu.rows, vec![people()[2].clone()]);
        assert_eq!(menu.position, MenuPosition { x: 90.0, y: 40.0 });

        let (id, plan, _, header) = &actions.surface().menus[0];
        assert_eq!(id, "people-context-menu");
        assert_eq!(plan.entry(0).unwrap().title, "Delete");
        assert!(header.is_none());
    }

    #[test]
    fn test_right_click_keeps_selection_when_multi() {
        let log = Log::default();
        let mut settings = settings();
        settings.context_menu.is_multi = true;
        let mut actions = controller(vec![delete_item(&log)], settings);
        actions.table_mut().select(0);

        actions.handle_event(TableEvent::RightClick { row: 1, x: 0.0, y: 0.0 });

        assert_eq!(actions.table().selected_indices(), vec![0, 1]);
        assert_eq!(actions.context_menu().unwrap().rows.len(), 2);
    }

    #[test]
    fn test_right_click_outside_data_rows() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        actions.table_mut().select(0);

        actions.handle_event(TableEvent::RightClick { row: 42, x: 0.0, y: 0.0 });

        assert!(actions.context_menu().is_none());
        assert!(actions.table().selected_rows().is_empty());
        assert!(actions.surface().menus.is_empty());
    }

    #[test]
    fn test_context_menu_disabled_still_selects() {
        let log = Log::default();
        let mut settings = settings();
        settings.context_menu.enabled = false;
        let mut actions = controller(vec![delete_item(&log)], settings);

        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });

        assert!(actions.context_menu().is_none());
        assert_eq!(actions.table().selected_indices(), vec![0]);
        assert!(!actions.surface().button_plans.last().unwrap().entry(0).unwrap().disabled);
    }

    #[test]
    fn test_second_right_click_replaces_menu() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());

        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });
        actions.handle_event(TableEvent::RightClick { row: 2, x: 0.0, y: 0.0 });

        assert_eq!(actions.surface().hides, 1);
        assert_eq!(actions.surface().menus.len(), 2);

        actions.handle_event(TableEvent::ClickOutside);
        assert_eq!(actions.surface().hides, 2);
        assert!(actions.context_menu().is_none());

        // Already closed.
        actions.handle_event(TableEvent::ClickOutside);
        assert_eq!(actions.surface().hides, 2);
    }

    #[test]
    fn test_click_menu_item_runs_and_closes() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });

        assert_eq!(actions.click_menu_item(0), ActionOutcome::Performed { affected: 1 });
        assert_eq!(*log.lock(), vec!["ada"]);
        assert!(actions.context_menu().is_none());
        assert_eq!(actions.surface().hides, 1);
    }

    #[test]
    fn test_disabled_menu_item_keeps_menu_open() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        actions.handle_event(TableEvent::RightClick { row: 1, x: 0.0, y: 0.0 });

        assert_eq!(actions.click_menu_item(0), ActionOutcome::Ignored(IgnoreReason::Disabled));
        assert!(actions.context_menu().is_some());
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_menu_click_without_menu() {
        let log = Log::default();
        let mut actions = controller(vec![delete_item(&log)], settings());
        assert_eq!(
            actions.click_menu_item(0),
            ActionOutcome::Ignored(IgnoreReason::SurfaceInactive)
        );
    }

    #[test]
    fn test_menu_hides_static_items() {
        let log = Log::default();
        let items = vec![
            StaticItem::new("Add", || {}).into(),
            ActionItem::divider(),
            delete_item(&log),
        ];
        let mut actions = controller(items, settings());
        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });

        let menu = actions.context_menu().unwrap();
        assert_eq!(menu.plan.segments.len(), 1);
        assert!(menu.plan.entry(0).is_none());
        assert_eq!(
            actions.click_menu_item(0),
            ActionOutcome::Ignored(IgnoreReason::UnknownItem)
        );
    }

    #[test]
    fn test_header_renderer_receives_menu_rows() {
        let log = Log::default();
        let options = Options::new(settings(), vec![delete_item(&log)])
            .with_header_renderer(|rows: &[Person]| format!("{} selected", rows.len()));
        let mut actions = ContextualActions::new(
            options,
            MemoryTable::new("people", people()),
            RecordingSurface::default(),
        )
        .unwrap();

        actions.handle_event(TableEvent::RightClick { row: 0, x: 0.0, y: 0.0 });
        assert_eq!(actions.surface().menus[0].3.as_deref(), Some("1 selected"));
    }

    fn confirmed_controller(
        log: &Log,
        requests: &Arc<Mutex<Vec<(ConfirmationTicket, String)>>>,
    ) -> ContextualActions<MemoryTable<Person>, RecordingSurface> {
        let action_log = Arc::clone(log);
        let item = OptionItem::new("Delete", move |rows: &[Person]| {
            action_log.lock().extend(rows.iter().map(|r| r.name.to_string()));
        })
        .with_disabled(|r: &Person| r.locked)
        .with_confirmation(|rows: &[Person]| Confirmation::new(format!("Delete {} rows?", rows.len())));

        let requests = Arc::clone(requests);
        let options = Options::new(settings(), vec![item.into()]).with_show_confirmation(
            move |ticket, confirmation| {
                requests.lock().push((ticket, confirmation.message.clone()));
            },
        );
        let mut actions = ContextualActions::new(
            options,
            MemoryTable::new("people", people()),
            RecordingSurface::default(),
        )
        .unwrap();
        for i in 0..3 {
            actions.table_mut().select(i);
        }
        actions.update();
        actions
    }

    #[test]
    fn test_confirmation_accepted() {
        let log = Log::default();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let mut actions = confirmed_controller(&log, &requests);

        let ActionOutcome::AwaitingConfirmation(ticket) = actions.click_button(0) else {
            panic!("expected a confirmation request");
        };
        assert!(log.lock().is_empty());
        assert_eq!(requests.lock()[0], (ticket, "Delete 2 rows?".to_string()));
        assert_eq!(actions.pending_confirmation(), Some(ticket));

        let outcome = actions.resolve_confirmation(ticket, true).unwrap();
        assert_eq!(outcome, ActionOutcome::Performed { affected: 2 });
        assert_eq!(*log.lock(), vec!["ada", "cy"]);
        assert!(actions.pending_confirmation().is_none());
        assert!(actions.table().selected_rows().is_empty());
    }

    #[test]
    fn test_confirmation_declined() {
        let log = Log::default();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let mut actions = confirmed_controller(&log, &requests);

        let ActionOutcome::AwaitingConfirmation(ticket) = actions.click_button(0) else {
            panic!("expected a confirmation request");
        };
        let outcome = actions.resolve_confirmation(ticket, false).unwrap();
        assert_eq!(outcome, ActionOutcome::Declined);
        assert!(log.lock().is_empty());
        // Selection untouched on decline.
        assert_eq!(actions.table().selected_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_newer_confirmation_replaces_older() {
        let log = Log::default();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let mut actions = confirmed_controller(&log, &requests);

        let ActionOutcome::AwaitingConfirmation(first) = actions.click_button(0) else {
            panic!("expected a confirmation request");
        };
        let ActionOutcome::AwaitingConfirmation(second) = actions.click_button(0) else {
            panic!("expected a confirmation request");
        };
        assert_ne!(first, second);

        let result = actions.resolve_confirmation(first, true);
        assert!(matches!(result, Err(PluginError::UnknownConfirmation(t)) if t == first));
        assert_eq!(actions.pending_confirmation(), Some(second));

        actions.resolve_confirmation(second, true).unwrap();
        assert_eq!(log.lock().len(), 2);
        assert!(actions.resolve_confirmation(second, true).is_err());
    }

    mock! {
        Table {}

        impl TableAdapter for Table {
            type Row = u32;
            type RowId = u32;

            fn table_id(&self) -> &str;
            fn selected_rows(&self) -> Vec<u32>;
            fn select_row(&mut self, id: &u32) -> bool;
            fn deselect_all(&mut self);
        }
    }

    #[test]
    fn test_action_deselects_through_adapter() {
        let mut table = MockTable::new();
        table.expect_selected_rows().returning(|| vec![4, 5]);
        table.expect_deselect_all().times(1).return_const(());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let item = OptionItem::new("Archive", move |rows: &[u32]| sink.lock().extend_from_slice(rows));
        let options = Options::new(settings(), vec![item.into()]);
        let mut actions = ContextualActions::new(options, table, RecordingSurface::default()).unwrap();

        assert_eq!(actions.click_button(0), ActionOutcome::Performed { affected: 2 });
        assert_eq!(*seen.lock(), vec![4, 5]);
    }

    #[test]
    fn test_buttons_disabled_skip_rendering() {
        let mut table = MockTable::new();
        table.expect_selected_rows().returning(Vec::new);

        let mut settings = Settings::default();
        settings.button_list.enabled = false;
        let options: Options<u32> = Options::new(settings, Vec::new());
        let mut actions = ContextualActions::new(options, table, RecordingSurface::default()).unwrap();

        assert!(actions.surface().button_plans.is_empty());
        assert_eq!(
            actions.click_button(0),
            ActionOutcome::Ignored(IgnoreReason::SurfaceInactive)
        );
    }
}
