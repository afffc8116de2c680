//! Outcome notifications
//!
//! Every user-visible action outcome surfaces as exactly one notice; a failed
//! submission never emits both a success and an error. The host drains the
//! queue on each render pass and decides presentation (toast, banner, log).

use parking_lot::Mutex;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
	/// The action completed
	Success,
	/// The action failed; local state was left intact
	Error,
}

/// One queued outcome message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
	/// Severity
	pub level: NoticeLevel,
	/// Human-readable message
	pub message: String,
}

/// Queue of pending notices, drained by the host
#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: Mutex<Vec<Notice>>,
}

impl NotificationCenter {
	/// Creates an empty queue
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a success notice
	pub fn success(&self, message: impl Into<String>) {
		self.push(NoticeLevel::Success, message.into());
	}

	/// Queues an error notice
	pub fn error(&self, message: impl Into<String>) {
		self.push(NoticeLevel::Error, message.into());
	}

	/// Removes and returns every pending notice, oldest first
	pub fn drain(&self) -> Vec<Notice> {
		std::mem::take(&mut *self.pending.lock())
	}

	/// Returns the number of pending notices without draining them
	pub fn pending_count(&self) -> usize {
		self.pending.lock().len()
	}

	fn push(&self, level: NoticeLevel, message: String) {
		tracing::debug!(?level, %message, "notice queued");
		self.pending.lock().push(Notice { level, message });
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_drain_empties_the_queue() {
		let center = NotificationCenter::new();
		center.success("created");
		center.error("failed");
		assert_eq!(center.pending_count(), 2);

		let notices = center.drain();
		assert_eq!(notices.len(), 2);
		assert_eq!(notices[0].level, NoticeLevel::Success);
		assert_eq!(notices[1].level, NoticeLevel::Error);
		assert_eq!(center.pending_count(), 0);
	}

	#[test]
	fn test_notices_keep_insertion_order() {
		let center = NotificationCenter::new();
		center.success("one");
		center.success("two");
		let messages: Vec<String> = center.drain().into_iter().map(|n| n.message).collect();
		assert_eq!(messages, vec!["one", "two"]);
	}
}
