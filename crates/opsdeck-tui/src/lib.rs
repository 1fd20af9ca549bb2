// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use opsdeck_app::{AppCommand, AppState, TabKind};
use opsdeck_content::{
    AdvancedTopic, ChallengeCard, ClusterResource, ImageRecord, ImageStatus, PipelineStage,
    QuickStat, Section, StageStatus, StrategyCard, TheoryTopic,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::time::Duration;

const TEXT_WIDTH: usize = 76;
const HALF_PAGE_ROWS: u16 = 10;
const EXPANDED_CHEVRON: &str = "▾";
const COLLAPSED_CHEVRON: &str = "▸";
const DETAIL_BULLET: &str = "▸";
const PRACTICE_MARK: &str = "✓";
const SOLUTION_ARROW: &str = "→";
const RISK_MARK: &str = "⚠";

/// Read side of the content catalog, consumed once per render pass.
/// The static catalog is the only production source; the trait exists
/// so tests can substitute a small fixture.
pub trait ContentSource {
    fn sections(&self) -> &'static [Section];
    fn theory_topics(&self) -> &'static [TheoryTopic];
    fn pipeline_stages(&self) -> &'static [PipelineStage];
    fn image_records(&self) -> &'static [ImageRecord];
    fn cluster_resources(&self) -> &'static [ClusterResource];
    fn quick_stats(&self) -> &'static [QuickStat];
    fn advanced_topics(&self) -> &'static [AdvancedTopic];
    fn strategies(&self) -> &'static [StrategyCard];
    fn challenges(&self) -> &'static [ChallengeCard];
    fn best_practices(&self) -> &'static [&'static str];
}

/// The compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl ContentSource for StaticContent {
    fn sections(&self) -> &'static [Section] {
        opsdeck_content::sections()
    }

    fn theory_topics(&self) -> &'static [TheoryTopic] {
        opsdeck_content::theory_topics()
    }

    fn pipeline_stages(&self) -> &'static [PipelineStage] {
        opsdeck_content::pipeline_stages()
    }

    fn image_records(&self) -> &'static [ImageRecord] {
        opsdeck_content::image_records()
    }

    fn cluster_resources(&self) -> &'static [ClusterResource] {
        opsdeck_content::cluster_resources()
    }

    fn quick_stats(&self) -> &'static [QuickStat] {
        opsdeck_content::quick_stats()
    }

    fn advanced_topics(&self) -> &'static [AdvancedTopic] {
        opsdeck_content::advanced_topics()
    }

    fn strategies(&self) -> &'static [StrategyCard] {
        opsdeck_content::strategies()
    }

    fn challenges(&self) -> &'static [ChallengeCard] {
        opsdeck_content::challenges()
    }

    fn best_practices(&self) -> &'static [&'static str] {
        opsdeck_content::best_practices()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    cursor: usize,
    scroll: u16,
    help_visible: bool,
}

/// One entry of an expandable list: a header plus the body lines shown
/// when the entry's identifier is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub body_lines: Vec<String>,
}

pub fn run_app<C: ContentSource>(state: &mut AppState, content: &C) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data, content)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, &mut view_data, content, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns true when the app should quit.
fn handle_key_event<C: ContentSource>(
    state: &mut AppState,
    view_data: &mut ViewData,
    content: &C,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q')
        && (key.modifiers.is_empty() || key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }

    // A transient status survives exactly until the next keypress.
    if state.status_line.is_some() {
        state.dispatch(AppCommand::ClearStatus);
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            view_data.help_visible = true;
            return false;
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, KeyModifiers::NONE) => {
            switch_tab(state, view_data, AppCommand::NextTab);
            return false;
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            switch_tab(state, view_data, AppCommand::PrevTab);
            return false;
        }
        (KeyCode::Char('F'), _) => {
            switch_tab(state, view_data, AppCommand::LastTab);
            return false;
        }
        (KeyCode::Char('B'), _) => {
            switch_tab(state, view_data, AppCommand::FirstTab);
            return false;
        }
        _ => {}
    }

    if is_list_tab(state.active_tab) {
        handle_list_key(state, view_data, content, key);
    } else {
        handle_scroll_key(state, view_data, content, key);
    }
    false
}

fn switch_tab(state: &mut AppState, view_data: &mut ViewData, command: AppCommand) {
    state.dispatch(command);
    view_data.cursor = 0;
    view_data.scroll = 0;
}

const fn is_list_tab(tab: TabKind) -> bool {
    matches!(tab, TabKind::Sections | TabKind::Theory)
}

fn handle_list_key<C: ContentSource>(
    state: &mut AppState,
    view_data: &mut ViewData,
    content: &C,
    key: KeyEvent,
) {
    let entries = entries_for_tab(state.active_tab, content);
    if entries.is_empty() {
        return;
    }
    let last = entries.len() - 1;

    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, _) => {
            view_data.cursor = (view_data.cursor + 1).min(last);
        }
        (KeyCode::Char('k') | KeyCode::Up, _) => {
            view_data.cursor = view_data.cursor.saturating_sub(1);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.cursor = 0;
        }
        (KeyCode::Char('G'), _) => {
            view_data.cursor = last;
        }
        (KeyCode::Enter | KeyCode::Char(' '), _) => {
            let entry = &entries[view_data.cursor.min(last)];
            let id = entry.id.to_owned();
            let events = state.dispatch(AppCommand::ToggleSection(id));
            let label = match events.first() {
                Some(opsdeck_app::AppEvent::SectionExpanded(id)) => format!("{id} expanded"),
                Some(opsdeck_app::AppEvent::SectionCollapsed(id)) => format!("{id} collapsed"),
                _ => return,
            };
            state.dispatch(AppCommand::SetStatus(label));
        }
        _ => {}
    }
}

fn handle_scroll_key<C: ContentSource>(
    state: &mut AppState,
    view_data: &mut ViewData,
    content: &C,
    key: KeyEvent,
) {
    let max_scroll = prose_line_count(state.active_tab, content).saturating_sub(1) as u16;

    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, _) => {
            view_data.scroll = view_data.scroll.saturating_add(1).min(max_scroll);
        }
        (KeyCode::Char('k') | KeyCode::Up, _) => {
            view_data.scroll = view_data.scroll.saturating_sub(1);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            view_data.scroll = view_data.scroll.saturating_add(HALF_PAGE_ROWS).min(max_scroll);
        }
        (KeyCode::Char('u'), KeyModifiers::NONE) => {
            view_data.scroll = view_data.scroll.saturating_sub(HALF_PAGE_ROWS);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.scroll = 0;
        }
        (KeyCode::Char('G'), _) => {
            view_data.scroll = max_scroll;
        }
        _ => {}
    }
}

fn entries_for_tab<C: ContentSource>(tab: TabKind, content: &C) -> Vec<ExpandableEntry> {
    match tab {
        TabKind::Sections => section_entries(content),
        TabKind::Theory => theory_entries(content),
        _ => Vec::new(),
    }
}

pub fn section_entries<C: ContentSource>(content: &C) -> Vec<ExpandableEntry> {
    content
        .sections()
        .iter()
        .map(|section| {
            let mut body_lines = Vec::new();
            push_wrapped(&mut body_lines, section.summary, "  ", TEXT_WIDTH);
            if let Some(sub_sections) = section.sub_sections {
                for sub in sub_sections {
                    body_lines.push(String::new());
                    body_lines.push(format!("  {}", sub.title));
                    push_wrapped(&mut body_lines, sub.description, "  ", TEXT_WIDTH);
                    for detail in sub.details {
                        push_bullet(&mut body_lines, DETAIL_BULLET, detail);
                    }
                }
            }
            ExpandableEntry {
                id: section.id,
                title: section.title,
                body_lines,
            }
        })
        .collect()
}

pub fn theory_entries<C: ContentSource>(content: &C) -> Vec<ExpandableEntry> {
    content
        .theory_topics()
        .iter()
        .map(|topic| {
            let mut body_lines = Vec::new();
            for block in topic.blocks {
                body_lines.push(format!("  {}", block.heading));
                push_wrapped(&mut body_lines, block.body, "    ", TEXT_WIDTH);
                body_lines.push(String::new());
            }
            if body_lines.last().is_some_and(String::is_empty) {
                body_lines.pop();
            }
            ExpandableEntry {
                id: topic.id,
                title: topic.title,
                body_lines,
            }
        })
        .collect()
}

/// Lines of the expandable list plus the line index of each entry
/// header, used to keep the cursor in view. Expansion is consulted once
/// per entry.
fn expandable_layout(
    entries: &[ExpandableEntry],
    state: &AppState,
    cursor: usize,
) -> (Vec<String>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut header_lines = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let expanded = state.expansion.is_expanded(entry.id);
        let chevron = if expanded {
            EXPANDED_CHEVRON
        } else {
            COLLAPSED_CHEVRON
        };
        let marker = if index == cursor { "> " } else { "  " };
        header_lines.push(lines.len());
        lines.push(format!("{marker}{chevron} {}", entry.title));
        if expanded {
            lines.extend(entry.body_lines.iter().cloned());
            lines.push(String::new());
        }
    }

    (lines, header_lines)
}

pub fn render_expandable_text(
    entries: &[ExpandableEntry],
    state: &AppState,
    cursor: usize,
) -> String {
    let (lines, _) = expandable_layout(entries, state, cursor);
    lines.join("\n")
}

pub fn render_stats_text<C: ContentSource>(content: &C) -> String {
    content
        .quick_stats()
        .iter()
        .map(|stat| format!("{} {}", stat.label, stat.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_strategies_text<C: ContentSource>(content: &C) -> String {
    let mut lines = Vec::new();
    for card in content.strategies() {
        lines.push(card.name.to_owned());
        push_wrapped(&mut lines, card.description, "  ", TEXT_WIDTH);
        lines.push("  benefits:".to_owned());
        for benefit in card.benefits {
            push_bullet(&mut lines, PRACTICE_MARK, benefit);
        }
        lines.push("  risks:".to_owned());
        for risk in card.risks {
            push_bullet(&mut lines, RISK_MARK, risk);
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn render_challenges_text<C: ContentSource>(content: &C) -> String {
    let mut lines = Vec::new();
    for card in content.challenges() {
        lines.push(card.challenge.to_owned());
        push_wrapped(
            &mut lines,
            &format!("causes: {}", card.causes),
            "  ",
            TEXT_WIDTH,
        );
        lines.push("  solutions:".to_owned());
        for solution in card.solutions {
            push_bullet(&mut lines, SOLUTION_ARROW, solution);
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn render_practices_text<C: ContentSource>(content: &C) -> String {
    let mut lines = Vec::new();
    for topic in content.advanced_topics() {
        lines.push(topic.title.to_owned());
        for item in topic.items {
            push_bullet(&mut lines, PRACTICE_MARK, item);
        }
        lines.push(String::new());
    }
    lines.push("Top 30 Best Practices".to_owned());
    for practice in content.best_practices() {
        push_bullet(&mut lines, PRACTICE_MARK, practice);
    }
    lines.join("\n")
}

fn prose_line_count<C: ContentSource>(tab: TabKind, content: &C) -> usize {
    match tab {
        TabKind::Strategies => render_strategies_text(content).lines().count(),
        TabKind::Challenges => render_challenges_text(content).lines().count(),
        TabKind::Practices => render_practices_text(content).lines().count(),
        // Table tabs fit on screen; nothing to scroll.
        _ => 0,
    }
}

pub fn pipeline_rows<C: ContentSource>(content: &C) -> Vec<[String; 3]> {
    content
        .pipeline_stages()
        .iter()
        .map(|stage| {
            [
                stage.name.to_owned(),
                stage.status.as_str().to_owned(),
                stage.duration.to_owned(),
            ]
        })
        .collect()
}

pub fn image_rows<C: ContentSource>(content: &C) -> Vec<[String; 5]> {
    content
        .image_records()
        .iter()
        .map(|image| {
            [
                image.name.to_owned(),
                image.version.to_owned(),
                image.size.to_owned(),
                image.layers.to_string(),
                image.status.as_str().to_owned(),
            ]
        })
        .collect()
}

pub fn resource_rows<C: ContentSource>(content: &C) -> Vec<[String; 6]> {
    content
        .cluster_resources()
        .iter()
        .map(|resource| {
            [
                resource.name.to_owned(),
                resource.kind.as_str().to_owned(),
                resource.status.to_owned(),
                resource.replicas.to_owned(),
                resource.cpu.to_owned(),
                resource.memory.to_owned(),
            ]
        })
        .collect()
}

fn status_text(state: &AppState) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    if is_list_tab(state.active_tab) {
        "j/k move | g/G top/bottom | enter toggle | f/b tabs | ? help | q quit".to_owned()
    } else {
        "j/k scroll | d/u half page | g/G top/bottom | f/b tabs | ? help | q quit".to_owned()
    }
}

fn help_overlay_text() -> &'static str {
    "tabs: f/b next/prev | B/F first/last | tab next\n\
sections/theory: j/k move | g/G top/bottom | enter or space toggle\n\
pipeline/images/resources: static tables\n\
strategies/challenges/practices: j/k scroll | d/u half page | g/G top/bottom\n\
help: ? open | esc close\n\
quit: q or ctrl+q"
}

fn stage_status_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Success => Color::Green,
        StageStatus::Pending => Color::Yellow,
        StageStatus::Failed => Color::Red,
    }
}

fn image_status_color(status: ImageStatus) -> Color {
    match status {
        ImageStatus::Deployed => Color::Green,
        ImageStatus::Building => Color::Yellow,
        ImageStatus::Failed => Color::Red,
    }
}

/// Scroll offset that keeps the given line roughly centered.
fn list_scroll(header_line: usize, viewport_rows: usize) -> u16 {
    header_line.saturating_sub(viewport_rows / 2) as u16
}

fn render<C: ContentSource>(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    view_data: &ViewData,
    content: &C,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, chunks[0], state);
    render_body(frame, chunks[1], state, view_data, content);
    render_footer(frame, chunks[2], state);

    if view_data.help_visible {
        render_help_overlay(frame, frame.area());
    }
}

fn render_tab_bar(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let titles: Vec<&str> = TabKind::ALL.iter().map(|tab| tab.label()).collect();
    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("opsdeck"));
    frame.render_widget(tabs, area);
}

fn render_body<C: ContentSource>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
    content: &C,
) {
    match state.active_tab {
        TabKind::Sections | TabKind::Theory => {
            render_expandable_list(frame, area, state, view_data, content);
        }
        TabKind::Pipeline => render_pipeline(frame, area, content),
        TabKind::Images => render_images(frame, area, content),
        TabKind::Resources => render_resources(frame, area, content),
        TabKind::Strategies => {
            render_prose(frame, area, "strategies", &render_strategies_text(content), view_data);
        }
        TabKind::Challenges => {
            render_prose(frame, area, "challenges", &render_challenges_text(content), view_data);
        }
        TabKind::Practices => {
            render_prose(frame, area, "practices", &render_practices_text(content), view_data);
        }
    }
}

fn render_expandable_list<C: ContentSource>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
    content: &C,
) {
    let entries = entries_for_tab(state.active_tab, content);
    let cursor = view_data.cursor.min(entries.len().saturating_sub(1));
    let (lines, header_lines) = expandable_layout(&entries, state, cursor);
    let scroll = header_lines
        .get(cursor)
        .map(|line| list_scroll(*line, area.height.saturating_sub(2) as usize))
        .unwrap_or(0);

    let paragraph = Paragraph::new(lines.join("\n"))
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.active_tab.label()),
        );
    frame.render_widget(paragraph, area);
}

fn render_pipeline<C: ContentSource>(frame: &mut ratatui::Frame<'_>, area: Rect, content: &C) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let stats = Paragraph::new(render_stats_text(content))
        .block(Block::default().borders(Borders::ALL).title("stats"));
    frame.render_widget(stats, chunks[0]);

    let header = table_header(&["stage", "status", "duration"]);
    let rows = content.pipeline_stages().iter().map(|stage| {
        Row::new(vec![
            Cell::from(stage.name),
            Cell::from(stage.status.as_str())
                .style(Style::default().fg(stage_status_color(stage.status))),
            Cell::from(stage.duration),
        ])
    });
    let widths = [
        Constraint::Min(16),
        Constraint::Min(10),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .title("sample ci/cd pipeline"),
    );
    frame.render_widget(table, chunks[1]);
}

fn render_images<C: ContentSource>(frame: &mut ratatui::Frame<'_>, area: Rect, content: &C) {
    let header = table_header(&["image", "version", "size", "layers", "status"]);
    let rows = content.image_records().iter().map(|image| {
        Row::new(vec![
            Cell::from(image.name),
            Cell::from(image.version),
            Cell::from(image.size),
            Cell::from(image.layers.to_string()),
            Cell::from(image.status.as_str())
                .style(Style::default().fg(image_status_color(image.status))),
        ])
    });
    let widths = [
        Constraint::Min(16),
        Constraint::Min(9),
        Constraint::Min(9),
        Constraint::Min(7),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .title("container images"),
    );
    frame.render_widget(table, area);
}

fn render_resources<C: ContentSource>(frame: &mut ratatui::Frame<'_>, area: Rect, content: &C) {
    let header = table_header(&["resource", "kind", "status", "replicas", "cpu", "memory"]);
    let rows = content.cluster_resources().iter().map(|resource| {
        Row::new(vec![
            Cell::from(resource.name),
            Cell::from(resource.kind.as_str()),
            Cell::from(resource.status).style(Style::default().fg(Color::Green)),
            Cell::from(resource.replicas),
            Cell::from(resource.cpu),
            Cell::from(resource.memory),
        ])
    });
    let widths = [
        Constraint::Min(14),
        Constraint::Min(12),
        Constraint::Min(9),
        Constraint::Min(9),
        Constraint::Min(7),
        Constraint::Min(8),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .title("cluster resources"),
    );
    frame.render_widget(table, area);
}

fn table_header(labels: &[&'static str]) -> Row<'static> {
    Row::new(
        labels
            .iter()
            .map(|label| {
                Cell::from(*label).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )
}

fn render_prose(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &'static str,
    text: &str,
    view_data: &ViewData,
) {
    let paragraph = Paragraph::new(text.to_owned())
        .scroll((view_data.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let footer = Paragraph::new(status_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let width = area.width.saturating_sub(8).min(72).max(20);
    let height = 10.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, overlay);
    let help = Paragraph::new(help_overlay_text())
        .block(Block::default().borders(Borders::ALL).title("help"));
    frame.render_widget(help, overlay);
}

fn push_wrapped(lines: &mut Vec<String>, text: &str, indent: &str, width: usize) {
    for segment in wrap_line(text, width.saturating_sub(indent.len())) {
        lines.push(format!("{indent}{segment}"));
    }
}

fn push_bullet(lines: &mut Vec<String>, mark: &str, text: &str) {
    let wrapped = wrap_line(text, TEXT_WIDTH.saturating_sub(4));
    for (index, segment) in wrapped.into_iter().enumerate() {
        if index == 0 {
            lines.push(format!("  {mark} {segment}"));
        } else {
            lines.push(format!("    {segment}"));
        }
    }
}

/// Greedy word wrap. A word longer than `width` gets its own line
/// rather than being split.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{
        ContentSource, ExpandableEntry, StaticContent, ViewData, entries_for_tab,
        expandable_layout, handle_key_event, help_overlay_text, image_rows, is_list_tab,
        list_scroll, pipeline_rows, prose_line_count, render_challenges_text,
        render_expandable_text, render_practices_text, render_stats_text,
        render_strategies_text, resource_rows, section_entries, status_text, theory_entries,
        wrap_line,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use opsdeck_app::{AppState, TabKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn default_state() -> AppState {
        AppState::with_initial(["overview"], TabKind::Sections)
    }

    #[test]
    fn wrap_line_respects_width() {
        let wrapped = wrap_line("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
        for line in &wrapped {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_line_keeps_long_words_whole() {
        let wrapped = wrap_line("supercalifragilistic word", 5);
        assert_eq!(wrapped, vec!["supercalifragilistic", "word"]);
    }

    #[test]
    fn wrap_line_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap_line("", 10), vec![String::new()]);
    }

    #[test]
    fn collapsed_sections_hide_their_bodies() {
        let content = StaticContent;
        let state = AppState::with_initial(Vec::<String>::new(), TabKind::Sections);
        let entries = section_entries(&content);
        let text = render_expandable_text(&entries, &state, 0);

        assert!(text.contains("▸ Jenkins - Continuous Integration & Deployment"));
        assert!(!text.contains("Distributed Builds"));
    }

    #[test]
    fn expanded_section_shows_summary_and_bullets() {
        let content = StaticContent;
        let mut state = AppState::with_initial(Vec::<String>::new(), TabKind::Sections);
        state.expansion.toggle("jenkins");

        let entries = section_entries(&content);
        let text = render_expandable_text(&entries, &state, 0);
        assert!(text.contains("▾ Jenkins - Continuous Integration & Deployment"));
        assert!(text.contains("Core Features"));
        assert!(text.contains("Distributed Builds"));
    }

    #[test]
    fn default_state_expands_only_overview() {
        let content = StaticContent;
        let state = default_state();
        let entries = section_entries(&content);
        let text = render_expandable_text(&entries, &state, 0);

        assert!(text.contains("▾ DevOps Overview"));
        assert!(text.contains("Core Principles"));
        assert!(text.contains("▸ Jenkins"));
        assert!(!text.contains("Distributed Builds"));
    }

    #[test]
    fn cursor_marker_follows_cursor() {
        let content = StaticContent;
        let state = AppState::with_initial(Vec::<String>::new(), TabKind::Sections);
        let entries = section_entries(&content);
        let (lines, header_lines) = expandable_layout(&entries, &state, 1);

        assert!(lines[header_lines[0]].starts_with("  ▸"));
        assert!(lines[header_lines[1]].starts_with("> ▸"));
    }

    #[test]
    fn header_lines_account_for_expanded_bodies() {
        let entries = vec![
            ExpandableEntry {
                id: "a",
                title: "A",
                body_lines: vec!["body".to_owned(), "body".to_owned()],
            },
            ExpandableEntry {
                id: "b",
                title: "B",
                body_lines: vec!["body".to_owned()],
            },
        ];
        let mut state = AppState::with_initial(Vec::<String>::new(), TabKind::Sections);

        let (_, collapsed) = expandable_layout(&entries, &state, 0);
        assert_eq!(collapsed, vec![0, 1]);

        state.expansion.toggle("a");
        let (_, expanded) = expandable_layout(&entries, &state, 0);
        // header, two body lines, trailing blank, then the next header
        assert_eq!(expanded, vec![0, 4]);
    }

    #[test]
    fn enter_toggles_the_selected_section() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        // move to jenkins and expand it
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('j')));
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Enter));
        assert!(state.expansion.is_expanded("jenkins"));
        assert!(state.expansion.is_expanded("overview"));
        assert_eq!(state.status_line.as_deref(), Some("jenkins expanded"));

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Enter));
        assert!(!state.expansion.is_expanded("jenkins"));
        assert_eq!(state.status_line.as_deref(), Some("jenkins collapsed"));
    }

    #[test]
    fn space_toggles_like_enter() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char(' ')));
        assert!(!state.expansion.is_expanded("overview"));
    }

    #[test]
    fn toggling_on_theory_tab_uses_topic_ids() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('f')));
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('f')));
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('f')));
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('f')));
        assert_eq!(state.active_tab, TabKind::Theory);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Enter));
        assert!(state.expansion.is_expanded("theory-sdlc"));
    }

    #[test]
    fn tab_switching_resets_cursor_and_scroll() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData {
            cursor: 3,
            scroll: 7,
            help_visible: false,
        };

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('f')));
        assert_eq!(state.active_tab, TabKind::Pipeline);
        assert_eq!(view_data.cursor, 0);
        assert_eq!(view_data.scroll, 0);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('b')));
        assert_eq!(state.active_tab, TabKind::Sections);
    }

    #[test]
    fn first_and_last_tab_keys() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(
            &mut state,
            &mut view_data,
            &content,
            KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT),
        );
        assert_eq!(state.active_tab, TabKind::Practices);

        handle_key_event(
            &mut state,
            &mut view_data,
            &content,
            KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT),
        );
        assert_eq!(state.active_tab, TabKind::Sections);
    }

    #[test]
    fn q_quits() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();
        assert!(handle_key_event(
            &mut state,
            &mut view_data,
            &content,
            key(KeyCode::Char('q')),
        ));
    }

    #[test]
    fn cursor_is_clamped_to_the_catalog() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(
            &mut state,
            &mut view_data,
            &content,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
        );
        assert_eq!(view_data.cursor, content.sections().len() - 1);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('j')));
        assert_eq!(view_data.cursor, content.sections().len() - 1);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('g')));
        assert_eq!(view_data.cursor, 0);
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('k')));
        assert_eq!(view_data.cursor, 0);
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('?')));
        assert!(view_data.help_visible);

        // keys other than esc/? are swallowed while help is open
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('j')));
        assert_eq!(view_data.cursor, 0);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Esc));
        assert!(!view_data.help_visible);
    }

    #[test]
    fn status_clears_on_next_keypress() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Enter));
        assert!(state.status_line.is_some());

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('j')));
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn scroll_keys_clamp_to_prose_length() {
        let content = StaticContent;
        let mut state = default_state();
        let mut view_data = ViewData::default();
        state.active_tab = TabKind::Strategies;

        let max = prose_line_count(TabKind::Strategies, &content).saturating_sub(1) as u16;
        handle_key_event(
            &mut state,
            &mut view_data,
            &content,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
        );
        assert_eq!(view_data.scroll, max);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('j')));
        assert_eq!(view_data.scroll, max);

        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('g')));
        assert_eq!(view_data.scroll, 0);
        handle_key_event(&mut state, &mut view_data, &content, key(KeyCode::Char('u')));
        assert_eq!(view_data.scroll, 0);
    }

    #[test]
    fn table_rows_reflect_the_catalog() {
        let content = StaticContent;

        let pipeline = pipeline_rows(&content);
        assert_eq!(pipeline.len(), 6);
        assert_eq!(pipeline[0], ["Source", "success", "2s"]);
        assert_eq!(pipeline[5], ["Deploy Staging", "pending", "-"]);

        let images = image_rows(&content);
        assert_eq!(images.len(), 4);
        assert_eq!(images[0][0], "nodejs-app");
        assert_eq!(images[0][3], "12");

        let resources = resource_rows(&content);
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[2][1], "StatefulSet");
    }

    #[test]
    fn stats_line_joins_all_counters() {
        let content = StaticContent;
        let stats = render_stats_text(&content);
        assert!(stats.contains("active pipelines 247"));
        assert!(stats.contains("deploys/day 342"));
    }

    #[test]
    fn strategies_text_lists_benefits_and_risks() {
        let content = StaticContent;
        let text = render_strategies_text(&content);
        assert!(text.contains("Rolling Update"));
        assert!(text.contains("benefits:"));
        assert!(text.contains("risks:"));
        assert!(text.contains("Zero downtime"));
    }

    #[test]
    fn challenges_text_lists_solutions() {
        let content = StaticContent;
        let text = render_challenges_text(&content);
        assert!(text.contains("Slow Build Times"));
        assert!(text.contains("causes:"));
        assert!(text.contains("→ Parallelize build stages in Jenkins"));
    }

    #[test]
    fn practices_text_includes_topics_and_checklist() {
        let content = StaticContent;
        let text = render_practices_text(&content);
        assert!(text.contains("Advanced Jenkins Techniques"));
        assert!(text.contains("Top 30 Best Practices"));
        assert!(text.contains("GitOps"));
    }

    #[test]
    fn theory_entries_carry_block_headings() {
        let content = StaticContent;
        let entries = theory_entries(&content);
        assert!(!entries.is_empty());
        let sdlc = &entries[0];
        assert_eq!(sdlc.id, "theory-sdlc");
        assert!(sdlc.body_lines.iter().any(|line| line.contains("Agile Methodology")));
    }

    #[test]
    fn only_sections_and_theory_are_list_tabs() {
        for tab in TabKind::ALL {
            let is_list = matches!(tab, TabKind::Sections | TabKind::Theory);
            assert_eq!(is_list_tab(tab), is_list, "{}", tab.label());
            assert_eq!(!entries_for_tab(tab, &StaticContent).is_empty(), is_list);
        }
    }

    #[test]
    fn list_scroll_centers_the_cursor() {
        assert_eq!(list_scroll(0, 20), 0);
        assert_eq!(list_scroll(5, 20), 0);
        assert_eq!(list_scroll(30, 20), 20);
    }

    #[test]
    fn footer_shows_status_or_hint() {
        let mut state = default_state();
        assert!(status_text(&state).contains("enter toggle"));

        state.active_tab = TabKind::Practices;
        assert!(status_text(&state).contains("j/k scroll"));

        state.status_line = Some("jenkins expanded".to_owned());
        assert_eq!(status_text(&state), "jenkins expanded");
    }

    #[test]
    fn help_text_mentions_every_surface() {
        let help = help_overlay_text();
        for label in ["sections", "theory", "pipeline", "strategies", "quit"] {
            assert!(help.contains(label), "missing {label}");
        }
    }
}
