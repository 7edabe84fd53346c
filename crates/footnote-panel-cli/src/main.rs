use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use footnote_panel_config::{Config, DEFAULT_DEBOUNCE_WINDOW_MS};
use footnote_panel_engine::{
    Debouncer, DocumentSource, FileDocumentSource, Footnote, FootnotePanel, IoError, PanelState,
    RefreshTrigger, validate_notes_dir,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant, SystemTime},
};

/// How often the document's modification time is checked.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

struct App {
    source: FileDocumentSource,
    panel: FootnotePanel,
    list_state: ListState,
    debouncer: Debouncer,
    last_modified: Option<SystemTime>,
}

impl App {
    fn new(source: FileDocumentSource, debounce_window: Duration) -> Self {
        let mut app = Self {
            source,
            panel: FootnotePanel::new(),
            list_state: ListState::default(),
            debouncer: Debouncer::new(debounce_window),
            last_modified: None,
        };
        let now = Instant::now();
        app.debouncer.trigger(RefreshTrigger::DocumentOpened, now);
        app.tick(now);
        app
    }

    fn modified_time(&self) -> Option<SystemTime> {
        let path = self.source.active_path()?;
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    /// Feeds file changes into the debouncer and refreshes when one is due.
    fn tick(&mut self, now: Instant) {
        let modified = self.modified_time();
        if modified != self.last_modified {
            self.last_modified = modified;
            self.debouncer.trigger(RefreshTrigger::ContentModified, now);
        }

        if self.debouncer.take(now) {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let refresh = self.panel.refresh(&self.source);
        if !refresh.changed {
            return;
        }

        let len = self.panel.index().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn force_refresh(&mut self) {
        self.debouncer.force(Instant::now());
    }

    fn next(&mut self) {
        let len = self.panel.index().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.panel.index().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_footnote(&self) -> Option<&Footnote> {
        let index = self.list_state.selected()?;
        self.panel.index().all().get(index)
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.debouncer
            .time_until_ready(now)
            .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL))
    }
}

/// Header line for one footnote, e.g. `[2] source  (3 refs)`.
fn footnote_title(number: usize, note: &Footnote) -> String {
    let refs = match note.references.len() {
        0 => "not cited".to_string(),
        1 => "1 ref".to_string(),
        n => format!("{n} refs"),
    };
    let undefined = if note.is_defined() { "" } else { ", undefined" };
    format!("[{number}] {}  ({refs}{undefined})", note.id)
}

/// Detail lines for one footnote: body, definition anchor and citations.
fn footnote_details(note: &Footnote) -> Vec<String> {
    let mut lines: Vec<String> = if note.body.is_empty() {
        vec!["(no definition text)".to_string()]
    } else {
        note.body.lines().map(str::to_string).collect()
    };
    lines.push(String::new());

    match note.definition {
        Some(position) => lines.push(format!("Defined at {position}")),
        None => lines.push("Not defined".to_string()),
    }
    if !note.references.is_empty() {
        let sites = note
            .references
            .iter()
            .map(|r| r.position.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Cited at {sites}"));
    }
    lines
}

/// Plain-text rendering of the whole panel, used by `--print`.
fn render_text(panel: &FootnotePanel) -> Vec<String> {
    if let Some(placeholder) = panel.state().placeholder() {
        let mut lines = vec![placeholder.to_string()];
        if let PanelState::LoadError(reason) | PanelState::ParseError(reason) = panel.state() {
            lines.push(reason.clone());
        }
        return lines;
    }

    let mut lines = Vec::new();
    for (i, note) in panel.index().all().iter().enumerate() {
        lines.push(footnote_title(i + 1, note));
        lines.extend(footnote_details(note).into_iter().map(|l| {
            if l.is_empty() { l } else { format!("    {l}") }
        }));
    }
    lines
}

fn resolve_document(args: &[String], config: Option<&Config>) -> Option<PathBuf> {
    args.iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .or_else(|| config.and_then(Config::default_document_path))
}

/// A source rooted at the notes directory with nothing open yet.
fn notes_root_source(config: Option<&Config>) -> Result<FileDocumentSource, IoError> {
    let notes_path = config.map_or_else(|| PathBuf::from("."), |c| c.notes_path.clone());
    validate_notes_dir(&notes_path)?;
    Ok(FileDocumentSource::new(notes_path))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let print_only = args.iter().any(|a| a == "--print");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: footnote-panel-cli [--print] [markdown-file]");
            process::exit(1);
        }
    };

    let debounce_window = config
        .as_ref()
        .map_or(Duration::from_millis(DEFAULT_DEBOUNCE_WINDOW_MS), |c| {
            c.debounce_window()
        });
    let source = match resolve_document(&args, config.as_ref()) {
        Some(path) => FileDocumentSource::for_file(&path),
        None => match notes_root_source(config.as_ref()) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: Notes path is invalid: {e}");
                eprintln!("Usage: footnote-panel-cli [--print] [markdown-file]");
                process::exit(1);
            }
        },
    };
    log::info!(
        "Watching {:?} with a {:?} debounce window",
        source.active_document(),
        debounce_window
    );

    if print_only {
        let mut panel = FootnotePanel::new();
        panel.refresh(&source);
        for line in render_text(&panel) {
            println!("{line}");
        }
        if panel.state().is_error() {
            process::exit(1);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, debounce_window);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Char('r') => app.force_refresh(),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let title = match app.panel.document() {
        Some(document) => format!("Footnotes: {document}"),
        None => "Footnotes".to_string(),
    };

    if let Some(placeholder) = app.panel.state().placeholder() {
        let style = if app.panel.state().is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = vec![Line::from(Span::styled(placeholder, style))];
        if let PanelState::LoadError(reason) | PanelState::ParseError(reason) = app.panel.state() {
            text.push(Line::from(reason.as_str()));
        }
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, rows[0]);
    } else {
        let items: Vec<ListItem> = app
            .panel
            .index()
            .all()
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let style = if note.is_defined() {
                    Style::default()
                } else {
                    Style::default().fg(Color::Yellow)
                };
                ListItem::new(Line::from(Span::styled(footnote_title(i + 1, note), style)))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, columns[0], &mut app.list_state);

        let details: Vec<Line> = app
            .selected_footnote()
            .map(footnote_details)
            .unwrap_or_default()
            .into_iter()
            .map(Line::from)
            .collect();
        let detail_title = app
            .selected_footnote()
            .map_or_else(|| "Detail".to_string(), Footnote::marker);
        let detail = Paragraph::new(details)
            .block(Block::default().borders(Borders::ALL).title(detail_title))
            .wrap(Wrap { trim: false });
        f.render_widget(detail, columns[1]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("r: Refresh"),
    ]));
    f.render_widget(help, rows[1]);
}
