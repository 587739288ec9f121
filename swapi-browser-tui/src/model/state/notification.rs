//! 状态栏通知

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 同时保留的最大通知数
pub const MAX_NOTIFICATIONS: usize = 5;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// 一条通知
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

/// 通知队列（最新的在队尾）
#[derive(Debug)]
pub struct NotificationState {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl NotificationState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            ttl,
        }
    }

    /// 添加错误通知
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into(), Instant::now());
    }

    /// 添加普通通知
    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into(), Instant::now());
    }

    fn push(&mut self, level: NotificationLevel, message: String, created_at: Instant) {
        if self.items.len() == MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            level,
            message,
            created_at,
        });
    }

    /// 清理过期通知
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
    }

    /// 最新的通知
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    /// 关闭最新的通知
    pub fn dismiss_latest(&mut self) {
        self.items.pop_back();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_newest() {
        let mut state = NotificationState::new(Duration::from_secs(5));
        assert!(state.latest().is_none());

        state.push_info("first");
        state.push_error("second");

        let latest = state.latest().map(|n| (n.level, n.message.as_str()));
        assert_eq!(latest, Some((NotificationLevel::Error, "second")));
    }

    #[test]
    fn queue_is_bounded() {
        let mut state = NotificationState::new(Duration::from_secs(5));
        for i in 0..8 {
            state.push_info(format!("n{i}"));
        }
        assert_eq!(state.len(), MAX_NOTIFICATIONS);
        assert_eq!(state.latest().map(|n| n.message.as_str()), Some("n7"));
    }

    #[test]
    fn prune_drops_expired() {
        let ttl = Duration::from_secs(5);
        let mut state = NotificationState::new(ttl);
        state.push_error("boom");

        let created = state.latest().map(|n| n.created_at).expect("pushed");

        state.prune(created + Duration::from_secs(1));
        assert_eq!(state.len(), 1);

        state.prune(created + ttl);
        assert!(state.is_empty());
    }

    #[test]
    fn dismiss_removes_newest() {
        let mut state = NotificationState::new(Duration::from_secs(5));
        state.push_info("a");
        state.push_info("b");
        state.dismiss_latest();
        assert_eq!(state.latest().map(|n| n.message.as_str()), Some("a"));
    }
}
