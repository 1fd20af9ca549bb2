// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::expansion::ExpansionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Sections,
    Pipeline,
    Images,
    Resources,
    Theory,
    Strategies,
    Challenges,
    Practices,
}

impl TabKind {
    pub const ALL: [Self; 8] = [
        Self::Sections,
        Self::Pipeline,
        Self::Images,
        Self::Resources,
        Self::Theory,
        Self::Strategies,
        Self::Challenges,
        Self::Practices,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sections => "sections",
            Self::Pipeline => "pipeline",
            Self::Images => "images",
            Self::Resources => "resources",
            Self::Theory => "theory",
            Self::Strategies => "strategies",
            Self::Challenges => "challenges",
            Self::Practices => "practices",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sections" => Some(Self::Sections),
            "pipeline" => Some(Self::Pipeline),
            "images" => Some(Self::Images),
            "resources" => Some(Self::Resources),
            "theory" => Some(Self::Theory),
            "strategies" => Some(Self::Strategies),
            "challenges" => Some(Self::Challenges),
            "practices" => Some(Self::Practices),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_tab: TabKind,
    pub expansion: ExpansionState,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: TabKind::Sections,
            expansion: ExpansionState::new(),
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    FirstTab,
    LastTab,
    SetActiveTab(TabKind),
    ToggleSection(String),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppEvent {
    TabChanged(TabKind),
    SectionExpanded(String),
    SectionCollapsed(String),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    /// State with a configuration-supplied initial expansion set and
    /// landing tab.
    pub fn with_initial<I, S>(expanded: I, start_tab: TabKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_tab: start_tab,
            expansion: ExpansionState::with_expanded(expanded),
            status_line: None,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::FirstTab => self.set_tab(TabKind::ALL[0]),
            AppCommand::LastTab => self.set_tab(TabKind::ALL[TabKind::ALL.len() - 1]),
            AppCommand::SetActiveTab(tab) => self.set_tab(tab),
            AppCommand::ToggleSection(id) => {
                if self.expansion.toggle(&id) {
                    vec![AppEvent::SectionExpanded(id)]
                } else {
                    vec![AppEvent::SectionCollapsed(id)]
                }
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.set_tab(tabs[next])
    }

    fn set_tab(&mut self, tab: TabKind) -> Vec<AppEvent> {
        self.active_tab = tab;
        vec![AppEvent::TabChanged(self.active_tab)]
    }
}
