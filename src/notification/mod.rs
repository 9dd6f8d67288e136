//! Group lifecycle notifications.
//!
//! Each operation on [`GroupNotifier`] turns one typed request into a
//! placeholder template (`{0}`, `{1}`, ...), pairs it with the `extra` array of
//! user references the placeholders index into, wraps both in a JSON payload
//! tagged with a [`ContentType`] code, and forwards the envelope to the
//! messaging core.
//!
//! # Example
//!
//! ```rust,ignore
//! let notifier = GroupNotifier::new(Arc::new(MemoryMessageSender::new()));
//!
//! notifier.send_group_create(&GroupCreateRequest {
//!     creator: "u1".into(),
//!     creator_name: "Alice".into(),
//!     group_no: "g1".into(),
//!     version: 1,
//!     members: vec![UserRef::new("u1", "Alice"), UserRef::new("u2", "Bob")],
//! }).await?;
//! // content: "Alice invite {0} to join the group chat", extra: [Bob]
//! ```

mod content_type;
mod notifier;
mod requests;
mod template;

pub use content_type::{ContentType, CMD_GROUP_MEMBER_UPDATE};
pub use notifier::GroupNotifier;
pub use requests::{
    GroupAttr, GroupCreateRequest, GroupMemberAddRequest, GroupMemberInviteRequest,
    GroupMemberRemoveRequest, GroupMemberScanJoinRequest, GroupTransferOwnerRequest,
    GroupUpdateRequest, UserRef,
};
pub use template::{group_update_clause, group_upgrade_content, placeholders, MentionTemplate};
