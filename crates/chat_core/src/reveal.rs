use std::time::Duration;

use crate::reply::BotReply;
use crate::transcript::LinkRef;

/// Tick period the app layer schedules for typewriter reveals.
pub const REVEAL_PERIOD: Duration = Duration::from_millis(5);

/// Upper bound on rendered citation links per reply.
pub const LINK_LIMIT: usize = 4;

/// Character-by-character reveal of a completed reply.
///
/// Pure stepper: created once the gateway has answered, ticked by the app
/// layer. Characters come out in input order; when the text is exhausted the
/// links block is handed over exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterReveal {
    chars: Vec<char>,
    next: usize,
    links: Vec<LinkRef>,
}

/// Outcome of a single reveal tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    /// One more character to append to the entry.
    Char(char),
    /// All characters emitted; attach the links block and stop the timer.
    Done(Vec<LinkRef>),
}

impl TypewriterReveal {
    /// Builds the stepper from a reply. Sources and titles are zipped, so a
    /// short title list truncates the links block rather than inventing
    /// labels.
    pub fn new(reply: &BotReply) -> Self {
        let links = reply
            .source
            .iter()
            .zip(reply.title.iter())
            .take(LINK_LIMIT)
            .map(|(href, label)| LinkRef {
                href: href.clone(),
                label: label.clone(),
            })
            .collect();
        Self {
            chars: reply.result.chars().collect(),
            next: 0,
            links,
        }
    }

    /// True when the reply text has no characters to reveal; the caller
    /// settles immediately with just the links block.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Links block for a reveal that completes without any ticks.
    pub fn into_links(self) -> Vec<LinkRef> {
        self.links
    }

    pub fn tick(&mut self) -> RevealStep {
        match self.chars.get(self.next) {
            Some(&ch) => {
                self.next += 1;
                RevealStep::Char(ch)
            }
            None => RevealStep::Done(std::mem::take(&mut self.links)),
        }
    }
}
