/// Completed answer from the prediction service, as relayed by the gateway.
///
/// `source` and `title` are index-aligned; only the first [`LINK_LIMIT`]
/// pairs are ever rendered.
///
/// [`LINK_LIMIT`]: crate::LINK_LIMIT
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BotReply {
    pub result: String,
    pub source: Vec<String>,
    pub title: Vec<String>,
}
