//! Login form demo.
//!
//! Run with: cargo run --example login_form
//!
//! Tab / Shift+Tab move focus, Enter commits, Escape or Ctrl+C quits.
//! Set `TEIGUI_CONFIG` to a TOML file to override layout and colours; logs
//! go to `teigui-demo.log` (filter with `RUST_LOG`).

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use teigui::logging::{DEFAULT_FILTER, init_logging};
use teigui::prelude::*;
use teigui::UiConfig;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging("teigui-demo.log", DEFAULT_FILTER)?;

    let config = match std::env::var_os("TEIGUI_CONFIG") {
        Some(path) => UiConfig::load(path)?,
        None => UiConfig::default(),
    };

    let terminal = CrosstermTerminal::stdout(config.theme());
    let mut ui = UiManager::with_config(terminal, CrosstermKeys::new(), config.layout);

    let user = ui.register(TextInput::new("Username", 24), 0, 0, PlacementOptions::new().sticky("w"));
    let password = ui.register(TextInput::new("Password", 24), 1, 0, PlacementOptions::new().sticky("w"));
    let role = ui.register(
        SelectableList::new("Role", 20, 7).with_items(["viewer", "editor", "admin", "owner", "auditor"]),
        0,
        1,
        PlacementOptions::new().row_span(2).sticky("nw"),
    );
    let desk = ui.register(
        SelectableGrid::new("Desk", 26, 6, 3, 4).with_multi_select(true),
        2,
        0,
        PlacementOptions::new().sticky("w"),
    );
    ui.register(
        ButtonGroup::new("Actions", ["Login", "Cancel"], 24),
        2,
        1,
        PlacementOptions::new(),
    );

    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    ui.on_commit(move |commit| sink.borrow_mut().push(commit.clone()));

    {
        let _session = TerminalSession::enter_fullscreen()?;
        ui.run()?;
    }

    for commit in commits.borrow().iter() {
        println!("commit from #{}: {}", commit.source.index(), commit.value);
    }

    let mut summary = Vec::new();
    let field = |id| ui.widget::<TextInput>(id).map(TextInput::text).unwrap_or_default();
    summary.push(format!("username = {:?}", field(user)));
    summary.push(format!("password = {} chars", field(password).chars().count()));
    if let Some(list) = ui.widget::<SelectableList>(role) {
        summary.push(format!("role = {}", list.items()[list.cursor()]));
    }
    if let Some(grid) = ui.widget::<SelectableGrid>(desk) {
        summary.push(format!("desks = {:?}", grid.selected()));
    }

    for line in summary {
        println!("{line}");
    }
    Ok(())
}
