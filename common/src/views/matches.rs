//! マッチ一覧（受け取ったリストを表示するだけ）

use crate::messages::NO_MATCHES;
use crate::types::Match;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchList {
    pub rows: Vec<MatchRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub job: String,
    pub score: String,
}

impl MatchList {
    pub fn new(matches: &[Match]) -> Self {
        Self {
            rows: matches
                .iter()
                .map(|m| MatchRow {
                    job: m.job.clone(),
                    score: format!("Match: {}", m.score),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(NO_MATCHES)
        } else {
            None
        }
    }
}
