use std::sync::Arc;

use serde_json::json;

use crate::error::SendError;
use crate::message::{
    CommandRequest, MessageSendRequest, MessageSender, MsgHeader, Setting, CHANNEL_TYPE_GROUP,
};
use crate::metrics::NotificationMetrics;

use super::content_type::{ContentType, CMD_GROUP_MEMBER_UPDATE};
use super::requests::{
    GroupCreateRequest, GroupMemberAddRequest, GroupMemberInviteRequest,
    GroupMemberRemoveRequest, GroupMemberScanJoinRequest, GroupTransferOwnerRequest,
    GroupUpdateRequest,
};
use super::template::{group_upgrade_content, MentionTemplate};

/// Builds group lifecycle notifications and hands them to the messaging core.
///
/// Holds nothing but the sender, so clones are cheap and calls are independent.
/// Every operation returns the sender's result unchanged.
#[derive(Clone)]
pub struct GroupNotifier {
    sender: Arc<dyn MessageSender>,
}

impl GroupNotifier {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Announce a new group, mentioning every initial member except the creator
    #[tracing::instrument(
        name = "notifier.group_create",
        skip(self, req),
        fields(group_no = %req.group_no, members = req.members.len())
    )]
    pub async fn send_group_create(&self, req: &GroupCreateRequest) -> Result<(), SendError> {
        let template = MentionTemplate::group_create(req);
        let payload = json!({
            "creator": req.creator,
            "creator_name": req.creator_name,
            "content": template.content,
            "version": req.version,
            "extra": template.extra,
            "type": ContentType::GroupCreate.code(),
        });

        self.send_to_group("group_create", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    /// Tell the group that some invitees are deactivated accounts and were skipped
    #[tracing::instrument(
        name = "notifier.unable_add_destroy_account",
        skip(self, req),
        fields(group_no = %req.group_no, members = req.members.len())
    )]
    pub async fn send_unable_add_destroy_account(
        &self,
        req: &GroupCreateRequest,
    ) -> Result<(), SendError> {
        let template = MentionTemplate::unable_add_destroy_account(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "type": ContentType::Tip.code(),
        });

        self.send_to_group(
            "unable_add_destroy_account",
            &req.group_no,
            Vec::new(),
            Setting::default(),
            payload,
        )
        .await
    }

    #[tracing::instrument(
        name = "notifier.group_update",
        skip(self, req),
        fields(group_no = %req.group_no, attr = %req.attr)
    )]
    pub async fn send_group_update(&self, req: &GroupUpdateRequest) -> Result<(), SendError> {
        if req.attr().is_none() {
            tracing::debug!("Unknown group attribute, sending update without a clause");
        }

        let template = MentionTemplate::group_update(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "data": req.data,
            "type": ContentType::GroupUpdate.code(),
        });

        self.send_to_group("group_update", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    #[tracing::instrument(
        name = "notifier.member_add",
        skip(self, req),
        fields(group_no = %req.group_no, members = req.members.len())
    )]
    pub async fn send_group_member_add(&self, req: &GroupMemberAddRequest) -> Result<(), SendError> {
        let template = MentionTemplate::member_add(req);
        let payload = json!({
            "from_uid": req.operator,
            "from_name": req.operator_name,
            "content": template.content,
            "extra": template.extra,
            "type": ContentType::GroupMemberAdd.code(),
        });

        self.send_to_group("member_add", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    /// Announce the super-group upgrade once membership passes `member_threshold`
    #[tracing::instrument(name = "notifier.group_upgrade", skip(self))]
    pub async fn send_group_upgrade(
        &self,
        group_no: &str,
        member_threshold: u32,
    ) -> Result<(), SendError> {
        let payload = json!({
            "content": group_upgrade_content(member_threshold),
            "type": ContentType::GroupUpgrade.code(),
        });

        self.send_to_group("group_upgrade", group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    /// Notify only the removed members, without touching their conversation list.
    ///
    /// No-op when nobody was removed.
    #[tracing::instrument(
        name = "notifier.member_be_removed",
        skip(self, req),
        fields(group_no = %req.group_no, members = req.members.len())
    )]
    pub async fn send_group_member_be_removed(
        &self,
        req: &GroupMemberRemoveRequest,
    ) -> Result<(), SendError> {
        if req.members.is_empty() {
            return self.skip("member_be_removed");
        }

        let subscribers: Vec<String> = req.members.iter().map(|m| m.uid.clone()).collect();
        let template = MentionTemplate::member_be_removed(req);
        let payload = json!({
            "content": template.content,
            "visibles": subscribers,
            "extra": template.extra,
            "type": ContentType::GroupMemberBeRemove.code(),
        });
        let setting = Setting {
            no_update_conversation: true,
            ..Default::default()
        };

        self.send_to_group("member_be_removed", &req.group_no, subscribers, setting, payload)
            .await
    }

    /// Tell the whole group who was removed. No-op when nobody was removed.
    #[tracing::instrument(
        name = "notifier.member_remove",
        skip(self, req),
        fields(group_no = %req.group_no, members = req.members.len())
    )]
    pub async fn send_group_member_remove(
        &self,
        req: &GroupMemberRemoveRequest,
    ) -> Result<(), SendError> {
        if req.members.is_empty() {
            return self.skip("member_remove");
        }

        let template = MentionTemplate::member_remove(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "type": ContentType::GroupMemberRemove.code(),
        });

        self.send_to_group("member_remove", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    #[tracing::instrument(
        name = "notifier.member_scan_join",
        skip(self, req),
        fields(group_no = %req.group_no)
    )]
    pub async fn send_group_member_scan_join(
        &self,
        req: &GroupMemberScanJoinRequest,
    ) -> Result<(), SendError> {
        let template = MentionTemplate::member_scan_join(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "type": ContentType::GroupMemberScanJoin.code(),
        });

        self.send_to_group("member_scan_join", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    #[tracing::instrument(
        name = "notifier.transfer_owner",
        skip(self, req),
        fields(group_no = %req.group_no)
    )]
    pub async fn send_group_transfer_owner(
        &self,
        req: &GroupTransferOwnerRequest,
    ) -> Result<(), SendError> {
        let template = MentionTemplate::transfer_owner(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "type": ContentType::GroupTransferGrouper.code(),
        });

        self.send_to_group("transfer_owner", &req.group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    /// Ask the owner/admins (the request's subscribers) to confirm an invitation
    #[tracing::instrument(
        name = "notifier.member_invite",
        skip(self, req),
        fields(group_no = %req.group_no, invite_no = %req.invite_no)
    )]
    pub async fn send_group_member_invite(
        &self,
        req: &GroupMemberInviteRequest,
    ) -> Result<(), SendError> {
        let template = MentionTemplate::member_invite(req);
        let payload = json!({
            "content": template.content,
            "extra": template.extra,
            "invite_no": req.invite_no,
            "type": ContentType::GroupMemberInvite.code(),
            "visibles": req.subscribers,
        });

        self.send_to_group(
            "member_invite",
            &req.group_no,
            req.subscribers.clone(),
            Setting::default(),
            payload,
        )
        .await
    }

    #[tracing::instrument(name = "notifier.group_exit", skip(self, name))]
    pub async fn send_group_exit(
        &self,
        group_no: &str,
        uid: &str,
        name: &str,
    ) -> Result<(), SendError> {
        let template = MentionTemplate::member_quit(uid, name);
        let payload = json!({
            "content": template.content,
            "type": ContentType::GroupMemberQuit.code(),
            "extra": template.extra,
        });

        self.send_to_group("group_exit", group_no, Vec::new(), Setting::default(), payload)
            .await
    }

    /// Signal clients to resync the group's member list
    #[tracing::instrument(name = "notifier.member_update", skip(self))]
    pub async fn send_group_member_update(&self, group_no: &str) -> Result<(), SendError> {
        let req = CommandRequest {
            channel_id: group_no.to_string(),
            channel_type: CHANNEL_TYPE_GROUP,
            subscribers: Vec::new(),
            cmd: CMD_GROUP_MEMBER_UPDATE.to_string(),
            param: json!({ "group_no": group_no }),
        };

        let result = self.sender.send_command(req).await;
        Self::record("member_update", result)
    }

    async fn send_to_group(
        &self,
        event: &'static str,
        group_no: &str,
        subscribers: Vec<String>,
        setting: Setting,
        payload: serde_json::Value,
    ) -> Result<(), SendError> {
        let req = MessageSendRequest {
            header: MsgHeader::notice(),
            setting: setting.to_u8(),
            channel_id: group_no.to_string(),
            channel_type: CHANNEL_TYPE_GROUP,
            subscribers,
            payload: serde_json::to_vec(&payload)?,
        };

        let result = self.sender.send(req).await;
        Self::record(event, result)
    }

    fn record(event: &'static str, result: Result<(), SendError>) -> Result<(), SendError> {
        match &result {
            Ok(()) => {
                NotificationMetrics::record_sent(event);
                tracing::debug!(event, "Group notification sent");
            }
            Err(e) => {
                NotificationMetrics::record_failed(event);
                tracing::warn!(event, error = %e, "Group notification send failed");
            }
        }
        result
    }

    fn skip(&self, event: &'static str) -> Result<(), SendError> {
        NotificationMetrics::record_skipped(event);
        tracing::debug!(event, "No members to notify, skipping");
        Ok(())
    }
}
