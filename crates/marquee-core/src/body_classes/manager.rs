use std::fmt;

use indexmap::IndexMap;

use crate::body_classes::filter::{self, BodyClassesFilter, QueueFilter};
use crate::body_classes::queue::Queue;
use crate::utils::sanitize_html_class;

/// One entry of a batched [`BodyClasses::add_classes`] call.
///
/// Callers can pass a plain list of labels or a label-to-flag map in the
/// same batch: `Name` adds the label, `Keyed(label, true)` adds the key,
/// and `Keyed(label, false)` is an explicit opt-out that skips the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSpec {
    /// The label itself.
    Name(String),
    /// A label with an opt-in flag.
    Keyed(String, bool),
}

impl From<&str> for ClassSpec {
    fn from(class: &str) -> Self {
        ClassSpec::Name(class.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(class: String) -> Self {
        ClassSpec::Name(class)
    }
}

impl From<(&str, bool)> for ClassSpec {
    fn from((class, enabled): (&str, bool)) -> Self {
        ClassSpec::Keyed(class.to_string(), enabled)
    }
}

impl From<(String, bool)> for ClassSpec {
    fn from((class, enabled): (String, bool)) -> Self {
        ClassSpec::Keyed(class, enabled)
    }
}

/// Manages body classes across the plugin family.
///
/// Holds the `display` and `admin` label queues (label -> enabled flag,
/// insertion order preserved) plus the approval predicates that gate
/// additions and exports. Labels are created only by
/// [`add_class`](Self::add_class)/[`add_classes`](Self::add_classes) and
/// only when the queue filter approves; toggles and removals never create
/// keys.
pub struct BodyClasses {
    /// Display-queue classes, label -> enabled.
    classes: IndexMap<String, bool>,
    /// Admin-queue classes, label -> enabled.
    admin_classes: IndexMap<String, bool>,
    queue_filter: QueueFilter,
    body_classes_filter: BodyClassesFilter,
}

// Manual Debug implementation: the filter callbacks are not Debug
impl fmt::Debug for BodyClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyClasses")
            .field("classes", &self.classes)
            .field("admin_classes", &self.admin_classes)
            .finish_non_exhaustive()
    }
}

impl Default for BodyClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyClasses {
    /// Creates an empty manager with declining approval predicates.
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
            admin_classes: IndexMap::new(),
            queue_filter: filter::decline_queue_filter(),
            body_classes_filter: filter::decline_body_classes_filter(),
        }
    }

    /// Installs the gate consulted before a class is added to a queue.
    pub fn set_queue_filter<F>(&mut self, filter: F)
    where
        F: Fn(&str, Queue) -> bool + Send + Sync + 'static,
    {
        self.queue_filter = Box::new(filter);
    }

    /// Installs the gate consulted before enabled classes are exported into
    /// a page's class list.
    pub fn set_body_classes_filter<F>(&mut self, filter: F)
    where
        F: Fn(&[String], &[String], Queue) -> bool + Send + Sync + 'static,
    {
        self.body_classes_filter = Box::new(filter);
    }

    /// Snapshot of the selected queue's label map.
    ///
    /// `Queue::All` is the display map overwritten by the admin map, so the
    /// admin flag wins when a label lives in both.
    pub fn classes_for_queue(&self, queue: Queue) -> IndexMap<String, bool> {
        match queue {
            Queue::Display => self.classes.clone(),
            Queue::Admin => self.admin_classes.clone(),
            Queue::All => {
                let mut merged = self.classes.clone();
                for (class, enabled) in &self.admin_classes {
                    merged.insert(class.clone(), *enabled);
                }
                merged
            }
        }
    }

    /// The enabled labels of the selected queue, in insertion order.
    pub fn class_names(&self, queue: Queue) -> Vec<String> {
        self.classes_for_queue(queue)
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| class)
            .collect()
    }

    /// Whether the label is registered in the selected queue, enabled or not.
    pub fn class_exists(&self, class: &str, queue: Queue) -> bool {
        match queue {
            Queue::Display => self.classes.contains_key(class),
            Queue::Admin => self.admin_classes.contains_key(class),
            Queue::All => self.classes.contains_key(class) || self.admin_classes.contains_key(class),
        }
    }

    /// Whether the label is registered in the selected queue and enabled.
    pub fn class_is_enqueued(&self, class: &str, queue: Queue) -> bool {
        match queue {
            Queue::Display => self.classes.get(class).copied().unwrap_or(false),
            Queue::Admin => self.admin_classes.get(class).copied().unwrap_or(false),
            // Merged view: admin wins on collision
            Queue::All => self
                .admin_classes
                .get(class)
                .or_else(|| self.classes.get(class))
                .copied()
                .unwrap_or(false),
        }
    }

    /// Enables an already-registered label in the targeted namespace(s).
    ///
    /// Returns `false` without mutating anything when the label is not
    /// registered in the selected queue.
    pub fn enqueue_class(&mut self, class: &str, queue: Queue) -> bool {
        self.set_flag(class, queue, true)
    }

    /// Disables an already-registered label in the targeted namespace(s).
    ///
    /// The label stays registered, so it can be re-enqueued later. Returns
    /// `false` without mutating anything when the label is not registered
    /// in the selected queue.
    pub fn dequeue_class(&mut self, class: &str, queue: Queue) -> bool {
        self.set_flag(class, queue, false)
    }

    // Toggles only flip flags on keys that already exist in each targeted
    // namespace; they never create entries.
    fn set_flag(&mut self, class: &str, queue: Queue, enabled: bool) -> bool {
        if !self.class_exists(class, queue) {
            return false;
        }

        if queue.targets_display() {
            if let Some(flag) = self.classes.get_mut(class) {
                *flag = enabled;
            }
        }
        if queue.targets_admin() {
            if let Some(flag) = self.admin_classes.get_mut(class) {
                *flag = enabled;
            }
        }

        true
    }

    /// Adds a single label to the targeted namespace(s), enabled.
    ///
    /// The empty label is a no-op. The queue filter sees the raw label and
    /// may decline the addition; approved labels are sanitized down to the
    /// attribute-safe charset before insertion.
    pub fn add_class(&mut self, class: &str, queue: Queue) {
        if class.is_empty() {
            return;
        }

        if !(self.queue_filter)(class, queue) {
            log::debug!("Class '{}' declined for queue '{}'", class, queue);
            return;
        }

        let class = sanitize_html_class(class);
        if class.is_empty() {
            return;
        }

        if queue.targets_display() {
            self.classes.insert(class.clone(), true);
        }
        if queue.targets_admin() {
            self.admin_classes.insert(class, true);
        }
    }

    /// Adds a batch of labels to the targeted namespace(s).
    ///
    /// See [`ClassSpec`] for the accepted entry shapes.
    pub fn add_classes<I>(&mut self, classes: I, queue: Queue)
    where
        I: IntoIterator,
        I::Item: Into<ClassSpec>,
    {
        for spec in classes {
            match spec.into() {
                // Explicit opt-out within the batch
                ClassSpec::Keyed(_, false) => {}
                ClassSpec::Keyed(class, true) => self.add_class(&class, queue),
                ClassSpec::Name(class) => self.add_class(&class, queue),
            }
        }
    }

    /// Removes the label from the targeted namespace(s); unknown labels are
    /// a no-op.
    pub fn remove_class(&mut self, class: &str, queue: Queue) {
        if queue.targets_display() {
            self.classes.shift_remove(class);
        }
        if queue.targets_admin() {
            self.admin_classes.shift_remove(class);
        }
    }

    /// Removes a batch of labels from the targeted namespace(s).
    pub fn remove_classes<I, S>(&mut self, classes: I, queue: Queue)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.remove_class(class.as_ref(), queue);
        }
    }

    /// Appends the enabled display classes to a page's class list.
    ///
    /// The export gate sees the enabled set, the existing list, and the
    /// display queue; when it declines, the input is returned unchanged.
    /// Deduplication is left to the downstream attribute renderer.
    pub fn add_body_classes(&self, existing: &[String]) -> Vec<String> {
        let enabled = self.class_names(Queue::Display);
        if !(self.body_classes_filter)(&enabled, existing, Queue::Display) {
            log::debug!("Display body classes declined");
            return existing.to_vec();
        }

        let mut merged = existing.to_vec();
        merged.extend(enabled);
        merged
    }

    /// Appends the enabled admin classes to a space-joined class string.
    ///
    /// Returns `None` when the export gate declines — a declined export is
    /// distinct from an approved no-op that returns the input classes.
    pub fn add_admin_body_classes(&self, existing: &str) -> Option<String> {
        let existing_classes: Vec<String> = existing.split(' ').map(str::to_string).collect();
        let enabled = self.class_names(Queue::Admin);
        if !(self.body_classes_filter)(&enabled, &existing_classes, Queue::Admin) {
            log::debug!("Admin body classes declined");
            return None;
        }

        let mut merged = existing_classes;
        merged.extend(enabled);
        Some(merged.join(" "))
    }
}
