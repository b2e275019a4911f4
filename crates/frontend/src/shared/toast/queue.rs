use std::fmt;

/// Identifier of a live toast. Allocated from a per-queue counter, so ids
/// are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastSeverity {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast--success",
            ToastSeverity::Error => "toast--error",
            ToastSeverity::Warning => "toast--warning",
            ToastSeverity::Info => "toast--info",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "check",
            ToastSeverity::Error => "alert-circle",
            ToastSeverity::Warning => "alert-triangle",
            ToastSeverity::Info => "info",
        }
    }

    /// Errors are announced assertively to screen readers.
    pub fn aria_live(&self) -> &'static str {
        match self {
            ToastSeverity::Error => "assertive",
            _ => "polite",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "toast-stack--top-left",
            ToastPosition::TopCenter => "toast-stack--top-center",
            ToastPosition::TopRight => "toast-stack--top-right",
            ToastPosition::BottomLeft => "toast-stack--bottom-left",
            ToastPosition::BottomCenter => "toast-stack--bottom-center",
            ToastPosition::BottomRight => "toast-stack--bottom-right",
        }
    }
}

pub const DEFAULT_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub title: Option<String>,
    /// `None` keeps the toast until it is dismissed.
    pub duration_ms: Option<u32>,
    pub dismissible: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            title: None,
            duration_ms: Some(DEFAULT_DURATION_MS),
            dismissible: true,
        }
    }
}

impl ToastOptions {
    pub fn sticky() -> Self {
        Self {
            duration_ms: None,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn at(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: ToastSeverity,
    pub position: ToastPosition,
    pub title: Option<String>,
    pub duration_ms: Option<u32>,
    pub dismissible: bool,
}

/// Ordered list of live toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns it.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: ToastSeverity,
        options: ToastOptions,
    ) -> &Toast {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: ToastId(self.next_id),
            message: message.into(),
            severity,
            position: options.position,
            title: options.title,
            duration_ms: options.duration_ms,
            dismissible: options.dismissible,
        });
        &self.toasts[self.toasts.len() - 1]
    }

    /// Removes a toast; absent ids leave the queue untouched.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(index))
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn clear(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// One stack per position in use, in [`ToastPosition::ALL`] order; each
    /// stack keeps insertion order (oldest first).
    pub fn grouped(&self) -> Vec<(ToastPosition, Vec<Toast>)> {
        ToastPosition::ALL
            .into_iter()
            .filter_map(|position| {
                let stack: Vec<Toast> = self
                    .toasts
                    .iter()
                    .filter(|t| t.position == position)
                    .cloned()
                    .collect();
                (!stack.is_empty()).then_some((position, stack))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: &mut ToastQueue, msg: &str, options: ToastOptions) -> ToastId {
        queue.push(msg, ToastSeverity::Info, options).id
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut queue = ToastQueue::new();
        let a = push(&mut queue, "a", ToastOptions::default());
        queue.remove(a);
        let b = push(&mut queue, "b", ToastOptions::default());
        assert_ne!(a, b);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut queue = ToastQueue::new();
        let a = push(&mut queue, "a", ToastOptions::default());
        assert!(queue.remove(a).is_some());
        let b = push(&mut queue, "b", ToastOptions::default());

        assert!(queue.remove(a).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(b));
    }

    #[test]
    fn grouping_keeps_insertion_order_per_position() {
        let mut queue = ToastQueue::new();
        let bottom = ToastOptions::default().at(ToastPosition::BottomLeft);
        push(&mut queue, "first", ToastOptions::default());
        push(&mut queue, "second", bottom.clone());
        push(&mut queue, "third", ToastOptions::default());
        push(&mut queue, "fourth", bottom);

        let groups = queue.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, ToastPosition::TopRight);
        let top: Vec<_> = groups[0].1.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(top, ["first", "third"]);
        assert_eq!(groups[1].0, ToastPosition::BottomLeft);
        let bottom: Vec<_> = groups[1].1.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(bottom, ["second", "fourth"]);
    }

    #[test]
    fn default_options_expire_and_sticky_ones_do_not() {
        let mut queue = ToastQueue::new();
        let t = queue.push("saved", ToastSeverity::Success, ToastOptions::default());
        assert_eq!(t.duration_ms, Some(DEFAULT_DURATION_MS));
        assert!(t.dismissible);
        let t = queue.push("offline", ToastSeverity::Error, ToastOptions::sticky().with_title("Network"));
        assert_eq!(t.duration_ms, None);
        assert_eq!(t.title.as_deref(), Some("Network"));
    }
}
