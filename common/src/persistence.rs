//! セッション永続化
//!
//! コントローラーに注入して使う。実装はフロントエンドごと:
//! - Web: sessionStorage
//! - CLI: 設定ディレクトリのJSONファイル
//!
//! 保存失敗は各実装がログに残す（画面状態には影響させない）。

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::Session;

pub trait SessionPersistence {
    /// 保存済みセッションを読み込み
    fn load(&self) -> Option<Session>;

    fn save(&mut self, session: &Session);

    fn clear(&mut self);
}

/// メモリ上のストア（テスト・永続化なし用）
///
/// cloneしたハンドル同士で中身を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(session))),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }
}

impl SessionPersistence for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.current()
    }

    fn save(&mut self, session: &Session) {
        *self.inner.borrow_mut() = Some(session.clone());
    }

    fn clear(&mut self) {
        *self.inner.borrow_mut() = None;
    }
}
