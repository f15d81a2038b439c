//! sessionStorage によるセッション保存
//!
//! タブを閉じるまでリロードしてもセッションが残る。

use jobsearch_common::{Session, SessionPersistence};
use web_sys::Storage;

const USER_ID_KEY: &str = "user_id";
const SESSION_ID_KEY: &str = "session_id";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionPersistence for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let user_id = storage.get_item(USER_ID_KEY).ok().flatten()?;
        let session_id = storage.get_item(SESSION_ID_KEY).ok().flatten()?;
        Session::new(user_id, session_id)
    }

    fn save(&mut self, session: &Session) {
        let Some(storage) = Self::storage() else {
            gloo::console::warn!("sessionStorage が使えません");
            return;
        };
        if storage.set_item(USER_ID_KEY, session.user_id()).is_err()
            || storage.set_item(SESSION_ID_KEY, session.session_id()).is_err()
        {
            gloo::console::warn!("セッションを保存できませんでした");
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = Self::storage() {
            let user = storage.remove_item(USER_ID_KEY);
            let session = storage.remove_item(SESSION_ID_KEY);
            if user.is_err() || session.is_err() {
                gloo::console::warn!("セッションを削除できませんでした");
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_clear() {
        let mut store = BrowserSessionStore;
        store.clear();
        assert!(store.load().is_none());

        let session = Session::new("u1", "s1").unwrap();
        store.save(&session);
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }

    #[wasm_bindgen_test]
    fn test_half_session_ignored() {
        let mut store = BrowserSessionStore;
        store.clear();
        let storage = BrowserSessionStore::storage().unwrap();
        storage.set_item(USER_ID_KEY, "u1").unwrap();

        assert!(store.load().is_none());
        store.clear();
    }

    #[wasm_bindgen_test]
    fn test_clear_removes_both_keys() {
        let mut store = BrowserSessionStore;
        store.save(&Session::new("u1", "s1").unwrap());
        store.clear();

        let storage = BrowserSessionStore::storage().unwrap();
        assert_eq!(storage.get_item(USER_ID_KEY).unwrap(), None);
        assert_eq!(storage.get_item(SESSION_ID_KEY).unwrap(), None);
    }
}
