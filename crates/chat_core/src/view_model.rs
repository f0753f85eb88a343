use crate::transcript::{LinkRef, Role};

/// Snapshot handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    pub entries: Vec<EntryView>,
    pub input: String,
    pub quick_replies: Vec<String>,
    /// Submissions still awaiting a reply or mid-reveal.
    pub pending: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub role: Role,
    pub text: String,
    pub links: Vec<LinkRef>,
}
