use crate::ids::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A citation link appended after a revealed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub href: String,
    pub label: String,
}

/// Displayable content of one transcript entry. Text and links are plain
/// data; rendering decides how they appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBody {
    pub text: String,
    pub links: Vec<LinkRef>,
}

impl MessageBody {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub role: Role,
    pub body: MessageBody,
    pub id: Option<MessageId>,
}

/// Append-only ordered list of chat entries. Insertion order is display
/// order; the view renders the tail, so every append lands at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    entries: Vec<MessageEntry>,
}

impl Transcript {
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.entries.push(MessageEntry {
            role: Role::User,
            body: MessageBody::text(text),
            id: None,
        });
    }

    /// Appends a bot entry. Entries that will be mutated later carry an id.
    pub fn append_bot(&mut self, text: impl Into<String>, id: Option<MessageId>) {
        self.entries.push(MessageEntry {
            role: Role::Bot,
            body: MessageBody::text(text),
            id,
        });
    }

    /// Overwrites an entry's content by id. Unknown ids are a silent no-op:
    /// a reply may race a reset of the view.
    pub fn replace(&mut self, id: &MessageId, body: MessageBody) {
        if let Some(entry) = self.entry_mut(id) {
            entry.body = body;
        }
    }

    /// Appends one revealed character to an entry's text. Unknown ids are a
    /// silent no-op.
    pub fn push_char(&mut self, id: &MessageId, ch: char) {
        if let Some(entry) = self.entry_mut(id) {
            entry.body.text.push(ch);
        }
    }

    /// Attaches the links block to an entry. Unknown ids are a silent no-op.
    pub fn attach_links(&mut self, id: &MessageId, links: Vec<LinkRef>) {
        if let Some(entry) = self.entry_mut(id) {
            entry.body.links = links;
        }
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    fn entry_mut(&mut self, id: &MessageId) -> Option<&mut MessageEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id.as_ref() == Some(id))
    }
}
