use crate::config::PassportConfig;
use crate::model::{Pool, VisitedRecord};
use crate::views::{Page, Stamp, Summary};
use std::path::PathBuf;

pub mod config;
pub mod helpers;
pub mod list;
pub mod open;
pub mod passport;
pub mod reset;
pub mod select;
pub mod status;
pub mod toggle;

#[derive(Debug, Clone)]
pub struct PassportPaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A pool as shown in listings and the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRow {
    /// 1-based position in the catalog
    pub number: usize,
    pub pool: Pool,
    pub record: Option<VisitedRecord>,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub summary: Option<Summary>,
    pub detail: Option<PoolRow>,
    pub pools: Vec<PoolRow>,
    pub stamps: Option<Page<Stamp>>,
    pub config: Option<PassportConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_detail(mut self, detail: Option<PoolRow>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_pools(mut self, pools: Vec<PoolRow>) -> Self {
        self.pools = pools;
        self
    }

    pub fn with_stamps(mut self, stamps: Page<Stamp>) -> Self {
        self.stamps = Some(stamps);
        self
    }

    pub fn with_config(mut self, config: PassportConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
