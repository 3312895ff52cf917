pub mod conversation;
pub mod format;
pub mod message;
pub mod metadata;

pub use conversation::{Conversation, ConversationSummary};
pub use format::SourceFormat;
pub use message::{Message, MessageRole, MessageRoleError};
pub use metadata::{ChunkMetadata, MessageProvenance};
