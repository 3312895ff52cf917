use tracing::debug;

use crate::document::conversation::{Conversation, ConversationSummary};
use crate::document::message::Message;
use crate::document::metadata::{ChunkMetadata, MessageProvenance};
use crate::types::chunk::Chunk;

use super::tokens::TokenEstimator;
use super::{ChunkSplitter, OrdCounter};

impl<E: TokenEstimator> ChunkSplitter<E> {
    /// Split a conversation's messages, in step order, into one dense `ord` run.
    ///
    /// Also returns the summary the store attaches to the owning document.
    pub fn split_conversation(&self, conversation: &Conversation) -> (Vec<Chunk>, ConversationSummary) {
        let (chunks, _) = self.split_messages_from(
            conversation.session_id,
            &conversation.messages,
            OrdCounter::new(),
        );
        (chunks, conversation.summary())
    }

    /// Split `messages` of session `session_id`, numbering from `ords`.
    ///
    /// A message within budget becomes one chunk headed `Message {step} ({role})`.
    /// A longer one is split like plain text and each piece records its
    /// `sub_chunk` index within the message. Blank messages produce nothing.
    pub fn split_messages_from(
        &self,
        session_id: i64,
        messages: &[Message],
        mut ords: OrdCounter,
    ) -> (Vec<Chunk>, OrdCounter) {
        let first = ords.value();
        let mut ordered: Vec<&Message> = messages.iter().collect();
        ordered.sort_by_key(|message| message.step);

        let mut chunks = Vec::new();
        for message in ordered {
            let content = message.content.trim();
            if content.is_empty() {
                continue;
            }

            let kind = message.role.chunk_kind();
            let provenance = |sub_chunk| {
                ChunkMetadata::Message(MessageProvenance {
                    session_id,
                    message_step: message.step,
                    message_role: message.role,
                    sub_chunk,
                })
            };

            if self.fits(content) {
                let heading = format!("Message {} ({})", message.step, message.role);
                chunks.push(self.make_chunk(
                    &mut ords,
                    Some(heading.as_str()),
                    content.to_string(),
                    kind,
                    provenance(None),
                ));
                continue;
            }

            for (i, text) in self.plaintext_texts(content).into_iter().enumerate() {
                chunks.push(self.make_chunk(&mut ords, None, text, kind, provenance(Some(i))));
            }
        }

        debug!(
            session_id,
            messages = messages.len(),
            chunks = chunks.len(),
            first_ord = first,
            "split conversation"
        );

        (chunks, ords)
    }
}
