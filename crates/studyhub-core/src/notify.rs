use tracing::debug;

pub const NOTICE_CLASS: &str =
    "fixed top-4 right-4 bg-primary text-white px-6 py-3 rounded-lg shadow-lg z-50";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Transient on-screen notices. Expiry is driven by the caller's timer;
/// the board only tracks what is currently visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    active: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[Notice] {
        &self.active
    }

    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let message = message.into();
        debug!(id, %message, "notice raised");
        self.active.push(Notice { id, message });
        id
    }

    /// Returns `false` if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|notice| notice.id != id);
        before != self.active.len()
    }
}
