//! Atelier TUI - Terminal User Interface for a workshop's business records.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod editor;
mod export;
mod logging;
mod records;
mod store;
mod table;
mod ui;

use app::{App, Page, UiMode};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};
use std::io;
use std::time::Duration;
use store::Store;

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts logging, loads records, and runs the event loop.
fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = Config::default_config_path()?;
    let config = Config::load(None)?;
    logging::init(&config)?;
    if !config_path.exists() {
        config.save(None)?;
        log::info!("wrote default config to {}", config_path.display());
    }

    // Load records
    let data_path = config.data_file_path()?;
    let store = Store::load(&data_path)?;

    // Create application state
    let mut app = App::new(store, config.start_page)?;
    app.set_status(format!(
        "{} clients, {} soumissions, {} commandes chargés",
        app.store.clients.len(),
        app.store.submissions.len(),
        app.store.orders.len()
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if result.is_ok() && config.autosave {
        app.store.save(&data_path)?;
    }

    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Details
/// Lays out and renders tabs, search, metric cards, the active table or the
/// dashboard watch list, the status bar, and the editor on top when one is open.
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let area = f.area();
    let layout = ui::layout(area, app.page);
    let buf = f.buffer_mut();

    ui::render_tabs(app, layout.tabs, buf);
    ui::render_search(app, layout.search, buf);
    ui::render_metrics(app, layout.metrics, buf);

    let focused = app.mode == UiMode::Table;
    match app.page {
        Page::Dashboard => ui::render_dashboard(app, layout.table, buf),
        Page::Clients => ui::render_table(&app.clients, &app.store.clients, focused, layout.table, buf),
        Page::Submissions => {
            ui::render_table(&app.submissions, &app.store.submissions, focused, layout.table, buf)
        }
        Page::Orders => ui::render_table(&app.orders, &app.store.orders, focused, layout.table, buf),
        Page::Production => {
            ui::render_table(&app.productions, &app.store.productions, focused, layout.table, buf)
        }
        Page::Installations => ui::render_table(
            &app.installations,
            &app.store.installations,
            focused,
            layout.table,
            buf,
        ),
    }

    // Render status bar
    let status_text = app.status_message.as_deref().unwrap_or(
        "'q' quitter, '/' rechercher, 's' trier, 'n' nouveau, 'x' exporter, 'w' enregistrer",
    );
    f.render_widget(Paragraph::new(Line::from(status_text)), layout.status);

    if let Some(editor) = app.editor.as_ref() {
        ui::render_editor(editor, area, f.buffer_mut());
    }
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders UI.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    // Table area of the last frame, for mouse click detection
    let mut table_area = Rect::default();

    loop {
        terminal.draw(|f| {
            table_area = ui::layout(f.area(), app.page).table;
            render_ui(f, app);
        })?;

        // Use non-blocking event polling with timeout to keep UI responsive
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if !handle_key_event(key, app, config)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, table_area),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `Result<bool>` - `false` when the application should quit
fn handle_key_event(key: KeyEvent, app: &mut App, config: &Config) -> anyhow::Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match app.mode {
        UiMode::Table => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(false),
            KeyCode::Char('c') if ctrl => return Ok(false),
            KeyCode::Tab => app.next_page(),
            KeyCode::BackTab => app.prev_page(),
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Left => app.header_left(),
            KeyCode::Right => app.header_right(),
            KeyCode::Char('s') => app.sort_by_header_cursor(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Enter => app.activate_selected(),
            KeyCode::Char('n') => app.add_new(),
            KeyCode::Char('x') => app.export_clients(&config.export_file_path()?),
            KeyCode::Char('w') => app.save_snapshot(&config.data_file_path()?),
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.mode = UiMode::Table;
            }
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char('u') if ctrl => app.clear_search(),
            KeyCode::Char('c') if ctrl => return Ok(false),
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        },
        UiMode::Editor => {
            let Some(editor) = app.editor.as_mut() else {
                app.mode = UiMode::Table;
                return Ok(true);
            };
            match key.code {
                KeyCode::Esc => app.cancel_editor(),
                KeyCode::Enter => app.submit_editor(),
                KeyCode::Tab | KeyCode::Down => editor.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => editor.form.focus_prev(),
                KeyCode::Left => editor.form.cycle_choice(false),
                KeyCode::Right => editor.form.cycle_choice(true),
                KeyCode::Backspace => editor.form.backspace(),
                KeyCode::Char('c') if ctrl => return Ok(false),
                KeyCode::Char(c) => editor.form.insert_char(c),
                _ => {}
            }
        }
    }
    Ok(true)
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `table_area` - Area of the table widget
///
/// # Details
/// Scrolling moves the selection. A left click on a column header sorts by
/// that column. A left click on a data row selects it and opens it in the
/// editor.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, table_area: Rect) {
    if app.mode != UiMode::Table || !app.page.has_table() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let header = ui::table::header_area(table_area);
            if header.height > 0 && mouse.row == header.y {
                let count = app.column_count();
                if let Some(index) = ui::table::column_at(table_area, count, mouse.column) {
                    app.sort_by_column(index);
                }
                return;
            }

            let body = ui::table::body_area(table_area);
            if mouse.column >= body.x
                && mouse.column < body.x + body.width
                && mouse.row >= body.y
                && mouse.row < body.y + body.height
            {
                let (selected, count) = app.selection();
                let offset = ui::table::scroll_offset(selected, count, body.height as usize);
                let index = offset + (mouse.row - body.y) as usize;
                if app.select_row(index) {
                    app.activate_selected();
                }
            }
        }
        _ => {}
    }
}
