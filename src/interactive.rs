//! 対話モード
//!
//! Web版のナビゲーション（Upload Resume / Job Search / Match Jobs）を
//! メニューで再現する。

use crate::assistant::Assistant;
use crate::error::{AppError, Result};
use dialoguer::{Confirm, Input, Select};
use jobsearch_common::messages::{
    ANALYZE_LABEL, APP_TITLE, JOB_SEARCH_LABEL, MATCH_JOBS_LABEL, SUPPORTED_FORMATS, UPLOAD_LABEL,
};
use std::path::PathBuf;

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Upload,
    Analyze,
    Search,
    Match,
    Session,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Upload,
        MenuItem::Analyze,
        MenuItem::Search,
        MenuItem::Match,
        MenuItem::Session,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Upload => UPLOAD_LABEL,
            MenuItem::Analyze => ANALYZE_LABEL,
            MenuItem::Search => JOB_SEARCH_LABEL,
            MenuItem::Match => MATCH_JOBS_LABEL,
            MenuItem::Session => "Session",
            MenuItem::Quit => "Quit",
        }
    }

    /// セッションが無いと選べない項目
    pub fn requires_session(&self) -> bool {
        matches!(self, MenuItem::Analyze | MenuItem::Search)
    }
}

/// 現在の状態で表示するメニュー
pub fn menu_items(has_session: bool) -> Vec<MenuItem> {
    MenuItem::ALL
        .iter()
        .copied()
        .filter(|item| has_session || !item.requires_session())
        .collect()
}

pub async fn run(assistant: &mut Assistant, use_llm_default: bool) -> Result<()> {
    println!("💼 {}\n", APP_TITLE);
    if let Some(summary) = assistant.session_summary() {
        println!("保存済みのセッション:\n{}", summary);
    }

    loop {
        let items = menu_items(assistant.controller().session().is_some());
        let labels: Vec<&str> = items.iter().map(|item| item.label()).collect();

        let selection = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match items[selection] {
            MenuItem::Upload => upload(assistant, use_llm_default).await,
            MenuItem::Analyze => assistant.analyze().await,
            MenuItem::Search => search(assistant).await,
            MenuItem::Match => matches(assistant),
            MenuItem::Session => Ok(assistant
                .session_summary()
                .unwrap_or_else(|| "セッションはありません\n".to_string())),
            MenuItem::Quit => break,
        };

        // 1回の失敗でループは抜けない
        match outcome {
            Ok(output) => println!("\n{}", output),
            Err(AppError::Prompt(e)) => return Err(AppError::Prompt(e)),
            Err(e) => println!("\n❌ {}\n", e),
        }
    }

    Ok(())
}

async fn upload(assistant: &mut Assistant, use_llm_default: bool) -> Result<String> {
    println!("{}", SUPPORTED_FORMATS);
    let path: String = Input::new()
        .with_prompt("履歴書ファイル")
        .interact_text()?;
    let use_llm = Confirm::new()
        .with_prompt("LLMで解析しますか？")
        .default(use_llm_default)
        .interact()?;

    assistant.upload(&PathBuf::from(path.trim()), use_llm).await
}

async fn search(assistant: &mut Assistant) -> Result<String> {
    let title: String = Input::new()
        .with_prompt("職種（空欄でプロフィールから補完）")
        .allow_empty(true)
        .interact_text()?;
    let location: String = Input::new()
        .with_prompt("勤務地（空欄で既定値）")
        .allow_empty(true)
        .interact_text()?;

    let title = Some(title.trim()).filter(|t| !t.is_empty());
    let location = Some(location.trim()).filter(|l| !l.is_empty());
    assistant.search(title, location).await
}

fn matches(assistant: &mut Assistant) -> Result<String> {
    let path: String = Input::new()
        .with_prompt("マッチ結果JSONファイル")
        .interact_text()?;
    assistant.matches_from_file(&PathBuf::from(path.trim()))
}
