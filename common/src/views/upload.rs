//! アップロードフォームの状態
//!
//! ファイル選択（ピッカー/ドラッグ&ドロップ）、AIパーサー切替、送信中の二重送信防止。
//! エラー表示はダイアログ側（SessionController）が持つ。

use crate::error::ApiError;
use crate::messages::{LLM_PARSER_CAPTION, TRADITIONAL_PARSER_CAPTION, UPLOAD_ERROR};
use crate::sequence::{RequestSeq, Ticket};
use crate::types::{FileMeta, UploadRequest, UploadResponse};

/// ファイルピッカーに渡す拡張子（入力補助であってチェックではない）
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx";

pub const UPLOAD_IN_PROGRESS: &str = "Upload already in progress";

/// アップロード完了時の結果
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Uploaded {
        file: FileMeta,
        response: UploadResponse,
    },
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct UploadForm {
    file: Option<FileMeta>,
    pending: Option<FileMeta>,
    use_llm: bool,
    succeeded: bool,
    seq: RequestSeq,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            file: None,
            pending: None,
            use_llm: true,
            succeeded: false,
            seq: RequestSeq::new(),
        }
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択（前回の成功表示はリセット）
    pub fn select_file(&mut self, file: FileMeta) {
        self.file = Some(file);
        self.succeeded = false;
    }

    pub fn selected_file(&self) -> Option<&FileMeta> {
        self.file.as_ref()
    }

    pub fn set_use_llm(&mut self, use_llm: bool) {
        self.use_llm = use_llm;
    }

    pub fn use_llm(&self) -> bool {
        self.use_llm
    }

    pub fn is_uploading(&self) -> bool {
        self.seq.in_flight()
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// 送信ボタンの有効判定
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_uploading() && !self.succeeded
    }

    /// 送信開始
    ///
    /// ファイル未選択はバックエンドに送らずバリデーションエラー。
    pub fn begin(&mut self) -> Result<(Ticket, UploadRequest), ApiError> {
        if self.is_uploading() {
            return Err(ApiError::validation(UPLOAD_IN_PROGRESS));
        }
        let file = self
            .file
            .clone()
            .ok_or_else(|| ApiError::validation(UPLOAD_ERROR))?;

        self.succeeded = false;
        self.pending = Some(file.clone());
        let ticket = self.seq.issue();
        Ok((
            ticket,
            UploadRequest {
                file,
                use_llm: self.use_llm,
            },
        ))
    }

    /// 送信完了。古いチケットならNone
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<UploadResponse, ApiError>,
    ) -> Option<UploadOutcome> {
        if !self.seq.accept(ticket) {
            return None;
        }
        let file = self.pending.take()?;

        match result {
            Ok(response) => {
                self.file = None;
                self.succeeded = true;
                Some(UploadOutcome::Uploaded { file, response })
            }
            Err(err) => Some(UploadOutcome::Failed(err)),
        }
    }

    /// ダイアログを閉じた等で結果を捨てる
    pub fn cancel(&mut self) {
        self.seq.invalidate();
        self.pending = None;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_uploading() {
            "Uploading..."
        } else if self.succeeded {
            "Uploaded"
        } else {
            "Upload"
        }
    }

    pub fn drop_zone_label(&self) -> &'static str {
        if self.succeeded {
            "Upload Successful!"
        } else if self.file.is_some() {
            "Ready to Upload"
        } else {
            "Drag & Drop or Click to Select File"
        }
    }

    pub fn parser_caption(&self) -> &'static str {
        if self.use_llm {
            LLM_PARSER_CAPTION
        } else {
            TRADITIONAL_PARSER_CAPTION
        }
    }
}
