use std::collections::BTreeSet;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Line;
use tracing::{debug, info};

use crate::io::logging;
use crate::model::{AppConfig, TaskList};

use super::input;
use super::layout::{WindowLayout, window_cells};
use super::render;
use super::text_field::TextField;
use super::theme::Theme;

/// Title of both warning dialogs
pub const DIALOG_TITLE: &str = "Error";
/// Shown when "Delete Selected" is pressed with nothing selected
pub const NO_SELECTION_WARNING: &str = "Please select task(s) to delete.";

/// Two clicks on the same cell closer together than this count as a double-click
const DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TextField,
    AddButton,
    List,
    DeleteButton,
    ClearButton,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::TextField,
        Focus::AddButton,
        Focus::List,
        Focus::DeleteButton,
        Focus::ClearButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next control in Tab order
    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control in Tab order
    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A modal warning with a single OK button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

/// Cursor, selection and scroll state of the task list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewState {
    /// Lead row (keyboard focus within the list)
    pub cursor: usize,
    /// Fixed end of a Shift range selection
    pub anchor: Option<usize>,
    pub selection: BTreeSet<usize>,
    /// First visible row
    pub scroll_offset: usize,
}

impl ListViewState {
    /// Replace the selection with `index` and make it the anchor
    pub fn select_only(&mut self, index: usize) {
        self.selection.clear();
        self.selection.insert(index);
        self.cursor = index;
        self.anchor = Some(index);
    }

    /// Add or remove `index` from the selection without touching the rest
    pub fn toggle_selected(&mut self, index: usize) {
        if !self.selection.remove(&index) {
            self.selection.insert(index);
        }
        self.cursor = index;
        self.anchor = Some(index);
    }

    /// Select the inclusive range between the anchor and `index`
    pub fn select_range(&mut self, index: usize) {
        let anchor = self.anchor.unwrap_or(self.cursor);
        let (start, end) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        self.selection = (start..=end).collect();
        self.cursor = index;
        self.anchor = Some(anchor);
    }

    pub fn select_all(&mut self, len: usize) {
        self.selection = (0..len).collect();
    }

    /// Shift selection, anchor and cursor after the rows in `removed`
    /// (ascending original positions) were taken out of the list.
    pub fn apply_removal(&mut self, removed: &[usize], new_len: usize) {
        if removed.is_empty() {
            return;
        }
        let shift = |index: usize| -> Option<usize> {
            match removed.binary_search(&index) {
                Ok(_) => None,
                Err(before) => Some(index - before),
            }
        };
        self.selection = self.selection.iter().filter_map(|&i| shift(i)).collect();
        self.anchor = self.anchor.and_then(shift);
        // A removed cursor row lands on whatever now occupies its slot
        let below = removed.partition_point(|&r| r < self.cursor);
        self.cursor = self.cursor - below;
        self.clamp(new_len);
    }

    /// Keep cursor and anchor inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            *self = ListViewState::default();
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        self.selection.retain(|&i| i < len);
        if self.anchor.is_some_and(|a| a >= len) {
            self.anchor = None;
        }
    }

    /// Scroll so the cursor row is within a viewport of `height` rows
    pub fn ensure_visible(&mut self, height: usize, len: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(height));
    }

    /// Scroll by `delta` rows without moving the cursor (mouse wheel)
    pub fn scroll_by(&mut self, delta: isize, height: usize, len: usize) {
        let max = len.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
    }
}

/// Rendered task rows, rebuilt lazily.
///
/// Structural changes (add, delete, clear) invalidate everything since rows
/// shift; a completion toggle only marks its own row.
#[derive(Debug, Clone, Default)]
pub struct RowCache {
    pub lines: Vec<Line<'static>>,
    /// Label width the lines were built for
    pub width: u16,
    pub stale: bool,
    pub dirty: BTreeSet<usize>,
}

impl RowCache {
    pub fn invalidate_all(&mut self) {
        self.stale = true;
        self.dirty.clear();
    }

    pub fn invalidate_row(&mut self, index: usize) {
        if !self.stale {
            self.dirty.insert(index);
        }
    }

    /// Whether a frame at `width` needs a full rebuild
    pub fn needs_rebuild(&self, width: u16, len: usize) -> bool {
        self.stale || self.width != width || self.lines.len() != len
    }
}

/// Tracks consecutive clicks on the same cell
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<(Instant, u16, u16)>,
    count: u32,
}

impl ClickTracker {
    /// Record a press at (`col`, `row`) and return its click count
    pub fn register(&mut self, now: Instant, col: u16, row: u16) -> u32 {
        self.count = match self.last {
            Some((at, c, r))
                if c == col && r == row && now.saturating_duration_since(at) < DOUBLE_CLICK =>
            {
                self.count + 1
            }
            _ => 1,
        };
        self.last = Some((now, col, row));
        self.count
    }
}

/// Main application state. Owns the task list for the lifetime of the window.
pub struct App {
    pub tasks: TaskList,
    pub theme: Theme,
    pub title: String,
    /// Window size in cells
    pub window_size: (u16, u16),
    pub focus: Focus,
    pub input: TextField,
    pub list: ListViewState,
    pub dialog: Option<Dialog>,
    pub rows: RowCache,
    /// Layout of the last drawn frame, used to map mouse clicks
    pub layout: Option<WindowLayout>,
    pub clicks: ClickTracker,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            tasks: TaskList::new(),
            theme: Theme::from_config(&config.ui),
            title: config.window.title.clone(),
            window_size: window_cells(&config.window),
            focus: Focus::TextField,
            input: TextField::default(),
            list: ListViewState::default(),
            dialog: None,
            rows: RowCache {
                stale: true,
                ..RowCache::default()
            },
            layout: None,
            clicks: ClickTracker::default(),
            should_quit: false,
        }
    }

    /// Open the modal warning dialog
    pub fn show_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "showing warning");
        self.dialog = Some(Dialog {
            title: DIALOG_TITLE.to_string(),
            message,
        });
    }

    /// Number of task rows visible in the list body
    pub fn list_height(&self) -> usize {
        self.layout.map_or(0, |l| l.list_inner().height as usize)
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Stderr belongs to the terminal until it is restored
    let _quiet = logging::pause_stderr();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    info!("window opened");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.tasks.len(), "window closed, discarding tasks");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, Instant::now()),
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::Resize(..) => app.rows.invalidate_all(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::TextField;
        let mut seen = Vec::new();
        for _ in 0..5 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::AddButton,
                Focus::List,
                Focus::DeleteButton,
                Focus::ClearButton,
                Focus::TextField
            ]
        );
        assert_eq!(Focus::TextField.prev(), Focus::ClearButton);
        assert_eq!(Focus::List.prev(), Focus::AddButton);
    }

    #[test]
    fn select_only_replaces_selection() {
        let mut state = ListViewState::default();
        state.selection = set(&[0, 2]);
        state.select_only(1);
        assert_eq!(state.selection, set(&[1]));
        assert_eq!(state.cursor, 1);
        assert_eq!(state.anchor, Some(1));
    }

    #[test]
    fn toggle_selected_adds_and_removes() {
        let mut state = ListViewState::default();
        state.toggle_selected(3);
        state.toggle_selected(1);
        assert_eq!(state.selection, set(&[1, 3]));
        state.toggle_selected(3);
        assert_eq!(state.selection, set(&[1]));
    }

    #[test]
    fn range_selection_either_direction() {
        let mut state = ListViewState::default();
        state.select_only(4);
        state.select_range(1);
        assert_eq!(state.selection, set(&[1, 2, 3, 4]));
        state.select_range(6);
        assert_eq!(state.selection, set(&[4, 5, 6]));
        assert_eq!(state.anchor, Some(4));
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn removal_remaps_survivors() {
        let mut state = ListViewState::default();
        state.selection = set(&[1, 3, 4]);
        state.anchor = Some(4);
        state.cursor = 4;
        // Rows 0 and 3 removed from a 5-row list
        state.apply_removal(&[0, 3], 3);
        assert_eq!(state.selection, set(&[0, 2]));
        assert_eq!(state.anchor, Some(2));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn removal_of_cursor_row_clamps() {
        let mut state = ListViewState::default();
        state.select_only(2);
        state.apply_removal(&[2], 2);
        assert!(state.selection.is_empty());
        assert_eq!(state.anchor, None);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn removal_to_empty_resets() {
        let mut state = ListViewState::default();
        state.select_all(2);
        state.scroll_offset = 1;
        state.apply_removal(&[0, 1], 0);
        assert_eq!(state, ListViewState::default());
    }

    #[test]
    fn ensure_visible_scrolls() {
        let mut state = ListViewState::default();
        state.cursor = 7;
        state.ensure_visible(3, 10);
        assert_eq!(state.scroll_offset, 5);
        state.cursor = 2;
        state.ensure_visible(3, 10);
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn wheel_scroll_is_bounded() {
        let mut state = ListViewState::default();
        state.scroll_by(-3, 4, 10);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_by(20, 4, 10);
        assert_eq!(state.scroll_offset, 6);
    }

    #[test]
    fn row_cache_dirty_tracking() {
        let mut cache = RowCache::default();
        cache.invalidate_row(2);
        assert_eq!(cache.dirty, set(&[2]));
        cache.invalidate_all();
        assert!(cache.stale);
        assert!(cache.dirty.is_empty());
        // Already rebuilding everything, nothing to track per row
        cache.invalidate_row(1);
        assert!(cache.dirty.is_empty());
    }

    #[test]
    fn click_counting() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();
        assert_eq!(clicks.register(t0, 5, 5), 1);
        assert_eq!(clicks.register(t0 + Duration::from_millis(200), 5, 5), 2);
        // Different cell starts over
        assert_eq!(clicks.register(t0 + Duration::from_millis(300), 6, 5), 1);
        // Too slow
        assert_eq!(clicks.register(t0 + Duration::from_secs(2), 6, 5), 1);
    }

    #[test]
    fn new_app_uses_config() {
        let mut config = AppConfig::default();
        config.window.title = "Chores".into();
        config.window.width = 300;
        let app = App::new(&config);
        assert_eq!(app.title, "Chores");
        assert_eq!(app.window_size, (30, 30));
        assert_eq!(app.focus, Focus::TextField);
        assert!(app.tasks.is_empty());
        assert!(app.dialog.is_none());
    }
}
