//! Approval predicates gating queue mutations and body-class exports.
//!
//! These are the extension points the embedding application hooks to decide
//! whether the family's classes may be queued and rendered. Both default to
//! declining, so a page that installs no filters gets no classes.

use crate::body_classes::queue::Queue;

/// Gate consulted before a single class is added to a queue.
///
/// Receives the raw (unsanitized) label and the target queue.
pub type QueueFilter = Box<dyn Fn(&str, Queue) -> bool + Send + Sync>;

/// Gate consulted before the enabled class set is appended to a page's
/// class list.
///
/// Receives the enabled labels, the page's existing classes, and the queue
/// being exported.
pub type BodyClassesFilter = Box<dyn Fn(&[String], &[String], Queue) -> bool + Send + Sync>;

/// The default queue gate: decline everything.
pub(crate) fn decline_queue_filter() -> QueueFilter {
    Box::new(|_, _| false)
}

/// The default export gate: decline everything.
pub(crate) fn decline_body_classes_filter() -> BodyClassesFilter {
    Box::new(|_, _, _| false)
}
