//! 履歴書解析パネルと解析結果カード

use crate::error::ApiError;
use crate::format::display_or_na;
use crate::messages::UPLOAD_FIRST;
use crate::sequence::{RequestSeq, Ticket};
use crate::types::{AnalysisResult, AnalyzeRequest, Session};

pub const ANALYSIS_IN_PROGRESS: &str = "Analysis already in progress";

/// 解析ボタンの状態。エラーはこのパネル内だけで表示する
#[derive(Debug, Clone, Default)]
pub struct AnalysisPanel {
    error: Option<String>,
    seq: RequestSeq,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_analyzing(&self) -> bool {
        self.seq.in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// セッションがあり、解析中でなければ押せる
    pub fn can_trigger(&self, session: Option<&Session>) -> bool {
        session.is_some() && !self.is_analyzing()
    }

    pub fn begin(&mut self, session: Option<&Session>) -> Result<(Ticket, AnalyzeRequest), ApiError> {
        let session = match session {
            Some(s) => s,
            None => {
                let err = ApiError::validation(UPLOAD_FIRST);
                self.error = Some(err.message.clone());
                return Err(err);
            }
        };
        if self.is_analyzing() {
            return Err(ApiError::validation(ANALYSIS_IN_PROGRESS));
        }

        self.error = None;
        Ok((self.seq.issue(), AnalyzeRequest::from(session)))
    }

    /// 解析完了。成功時のみ結果を返す（失敗はパネル内エラーに）
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<AnalysisResult, ApiError>,
    ) -> Option<AnalysisResult> {
        if !self.seq.accept(ticket) {
            return None;
        }
        match result {
            Ok(result) => {
                self.error = None;
                Some(result)
            }
            Err(err) => {
                self.error = Some(err.message);
                None
            }
        }
    }

    /// 画面破棄時
    pub fn cancel(&mut self) {
        self.seq.invalidate();
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_analyzing() {
            "Analyzing..."
        } else {
            crate::messages::ANALYZE_LABEL
        }
    }
}

/// 解析結果カードの表示モデル
///
/// 未抽出の連絡先は "N/A"。リストは空なら見出しごと出さない。
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisCard {
    pub message: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

impl From<&AnalysisResult> for AnalysisCard {
    fn from(result: &AnalysisResult) -> Self {
        let info = &result.extracted_info;
        Self {
            message: result.message.clone(),
            name: display_or_na(info.name.as_deref()).to_string(),
            email: display_or_na(info.email.as_deref()).to_string(),
            phone: display_or_na(info.phone.as_deref()).to_string(),
            skills: info.skills.clone(),
            experience: info.experience.clone(),
            education: info.education.clone(),
        }
    }
}

impl AnalysisCard {
    /// (ラベル, 値) の一覧
    pub fn contact_rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
        ]
    }
}
