//! リクエスト順序管理
//!
//! 画面ごとに発行番号（Ticket）を振り、最後に発行したリクエストの
//! レスポンスだけを反映する。追い越された古いレスポンスや、
//! 画面破棄後に届いたレスポンスは捨てる。

/// 発行済みリクエストの番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 画面単位の発行カウンタ
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
    applied: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいリクエスト番号を発行
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// レスポンスを反映してよいか
    ///
    /// 最新の番号で、まだ反映していない場合のみ true。
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.latest || ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// 最新リクエストが未完了か
    pub fn in_flight(&self) -> bool {
        self.latest > self.applied
    }

    /// 発行済みの番号をすべて無効化（画面破棄時）
    pub fn invalidate(&mut self) {
        self.latest += 1;
        self.applied = self.latest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_accepted_once() {
        let mut seq = RequestSeq::new();
        let t = seq.issue();
        assert!(seq.in_flight());
        assert!(seq.accept(t));
        assert!(!seq.in_flight());
        // 二重反映しない
        assert!(!seq.accept(t));
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let mut seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();

        // 後発が先に返ってきた場合
        assert!(seq.accept(second));
        assert!(!seq.accept(first));
    }

    #[test]
    fn test_out_of_order_old_response_first() {
        let mut seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.accept(first));
        assert!(seq.in_flight());
        assert!(seq.accept(second));
    }

    #[test]
    fn test_invalidate_discards_outstanding() {
        let mut seq = RequestSeq::new();
        let t = seq.issue();
        seq.invalidate();
        assert!(!seq.in_flight());
        assert!(!seq.accept(t));

        // 破棄後も新しいリクエストは使える
        let next = seq.issue();
        assert!(next > t);
        assert!(seq.accept(next));
    }

    #[test]
    fn test_idle_not_in_flight() {
        let seq = RequestSeq::new();
        assert!(!seq.in_flight());
    }
}
