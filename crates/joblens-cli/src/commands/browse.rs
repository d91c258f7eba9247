//! Interactive browse mode: the four filter selects plus a search box,
//! driven by stdin lines. Every change notification re-renders the table.

use std::io::BufRead;

use joblens_api::{BoardClient, BoardSnapshot};
use joblens_config::JoblensConfig;
use joblens_core::{FilterOptions, FilterSelect, Job, JobFilter};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::Progress;

const COMPANY: usize = 0;
const LOCATION: usize = 1;
const EXPERIENCE: usize = 2;
const WORK_TYPE: usize = 3;

const SELECT_NAMES: [&str; 4] = ["company", "location", "experience", "work type"];

const HELP: &str = "\
commands: c/l/e/w open a filter menu, a number picks the highlighted menu row,\n\
cc/cl/ce/cw clear a filter, /term searches (bare / clears), ? help, q quits";

/// What the session wants the caller to do after handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Filter state changed; re-render the table.
    Redraw,
    /// A select was opened; show its menu.
    ShowMenu(usize),
    /// Show the command help.
    Help,
    /// Nothing to do (blank line, ignored input).
    Noop,
    /// Leave browse mode.
    Quit,
}

/// Pure state of a browse session: the job list, four select widgets, and
/// the search term. Input handling is synchronous; all I/O stays in [`run`].
pub struct BrowseSession {
    jobs: Vec<Job>,
    selects: [FilterSelect; 4],
    search: String,
    limit: usize,
}

impl BrowseSession {
    #[must_use]
    pub fn new(snapshot: BoardSnapshot, limit: usize) -> Self {
        let options =
            FilterOptions::from_board(&snapshot.jobs, snapshot.companies, snapshot.locations);
        let selects = [
            FilterSelect::new("All Companies", options.companies),
            FilterSelect::new("All Locations", options.locations),
            FilterSelect::new("All Experience Levels", options.experience_levels),
            FilterSelect::new("All Work Types", options.work_types),
        ];
        Self {
            jobs: snapshot.jobs,
            selects,
            search: String::new(),
            limit,
        }
    }

    /// The filter implied by the current widget state.
    #[must_use]
    pub fn filter(&self) -> JobFilter {
        let value = |idx: usize| self.selects[idx].selected_value().map(str::to_string);
        JobFilter {
            company: value(COMPANY),
            location: value(LOCATION),
            experience: value(EXPERIENCE),
            work_type: value(WORK_TYPE),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
        }
    }

    /// Jobs matching the current filter, in feed order.
    #[must_use]
    pub fn visible_jobs(&self) -> Vec<Job> {
        self.filter().apply(&self.jobs)
    }

    /// The rows actually drawn: matching jobs truncated to the row limit.
    #[must_use]
    pub fn shown_jobs(&self) -> Vec<Job> {
        let mut jobs = self.visible_jobs();
        jobs.truncate(self.limit);
        jobs
    }

    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        (!self.search.is_empty()).then_some(self.search.as_str())
    }

    #[must_use]
    pub fn select(&self, idx: usize) -> &FilterSelect {
        &self.selects[idx]
    }

    fn open_select(&self) -> Option<usize> {
        (0..self.selects.len()).find(|&idx| self.selects[idx].is_open())
    }

    /// Handle one line of input and report what changed.
    pub fn handle_line(&mut self, line: &str) -> Action {
        let line = line.trim();

        match line {
            "" => return Action::Noop,
            "q" | "quit" => return Action::Quit,
            "?" | "help" => return Action::Help,
            _ => {}
        }

        if let Some(term) = line.strip_prefix('/') {
            self.search = term.trim().to_string();
            return Action::Redraw;
        }

        if let Some(idx) = clear_command(line) {
            self.selects[idx].clear();
            return Action::Redraw;
        }

        if let Some(idx) = toggle_command(line) {
            // Only one menu is shown at a time.
            for (other, select) in self.selects.iter_mut().enumerate() {
                if other != idx && select.is_open() {
                    select.toggle();
                }
            }
            self.selects[idx].toggle();
            return if self.selects[idx].is_open() {
                Action::ShowMenu(idx)
            } else {
                Action::Noop
            };
        }

        if let Ok(row) = line.parse::<usize>() {
            if let Some(idx) = self.open_select() {
                if self.selects[idx].choose(row).is_some() {
                    return Action::Redraw;
                }
            }
            // No open menu, or a row outside it: ignored like a stray click.
            return Action::Noop;
        }

        Action::Help
    }
}

fn toggle_command(line: &str) -> Option<usize> {
    match line {
        "c" | "company" => Some(COMPANY),
        "l" | "location" => Some(LOCATION),
        "e" | "experience" => Some(EXPERIENCE),
        "w" | "work-type" => Some(WORK_TYPE),
        _ => None,
    }
}

fn clear_command(line: &str) -> Option<usize> {
    match line {
        "cc" => Some(COMPANY),
        "cl" => Some(LOCATION),
        "ce" => Some(EXPERIENCE),
        "cw" => Some(WORK_TYPE),
        _ => None,
    }
}

/// Handle `joblens browse`.
///
/// # Errors
///
/// Fails if the board fetch fails or rendering fails; input errors end the
/// session.
pub async fn run(
    client: &BoardClient,
    config: &JoblensConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching board");
    let snapshot = client.fetch_board().await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let limit = usize::try_from(flags.limit.unwrap_or(config.general.default_limit))?;
    let mut session = BrowseSession::new(snapshot, limit);
    draw(&session)?;
    println!("{HELP}");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle_line(&line) {
            Action::Quit => break,
            Action::Redraw => draw(&session)?,
            Action::ShowMenu(idx) => draw_menu(&session, idx),
            Action::Help => println!("{HELP}"),
            Action::Noop => {}
        }
    }

    Ok(())
}

fn draw(session: &BrowseSession) -> anyhow::Result<()> {
    let matching = session.visible_jobs().len();
    let jobs = session.shown_jobs();
    let rendered = output::render_jobs(&jobs, session.search_term(), OutputFormat::Table)?;
    println!("{rendered}");

    let labels: Vec<String> = (0..SELECT_NAMES.len())
        .map(|idx| format!("{}: {}", SELECT_NAMES[idx], session.select(idx).button_label()))
        .collect();
    let search = session.search_term().unwrap_or("-");
    println!(
        "[{} | search: {search} | {} of {matching} shown]",
        labels.join(" | "),
        jobs.len()
    );
    Ok(())
}

fn draw_menu(session: &BrowseSession, idx: usize) {
    println!("{}:", SELECT_NAMES[idx]);
    for (row, entry) in session.select(idx).menu_rows().enumerate() {
        let marker = if entry.selected { "*" } else { " " };
        println!("{marker} {row}) {}", entry.label);
    }
}
