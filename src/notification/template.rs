//! Placeholder templates for group notifications.
//!
//! Notification text never contains user names. Each mention is a positional
//! slot (`{0}`, `{1}`, ...) that the client resolves against the `extra` array
//! sent alongside it, so the two always travel together as a `MentionTemplate`.

use serde::Serialize;

use super::requests::{
    GroupAttr, GroupCreateRequest, GroupMemberAddRequest, GroupMemberInviteRequest,
    GroupMemberRemoveRequest, GroupMemberScanJoinRequest, GroupTransferOwnerRequest,
    GroupUpdateRequest, UserRef,
};

/// Template text plus the ordered references its slots point into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionTemplate {
    pub content: String,
    pub extra: Vec<UserRef>,
}

/// Join `{0},{1},...` for `count` slots
pub fn placeholders(count: usize) -> String {
    (0..count)
        .map(|i| format!("{{{}}}", i))
        .collect::<Vec<_>>()
        .join(",")
}

/// Drop `actor` from `members` (keeping order) and build the matching slots.
fn index_members(members: &[UserRef], actor: Option<&str>) -> (String, Vec<UserRef>) {
    let kept: Vec<UserRef> = members
        .iter()
        .filter(|m| actor != Some(m.uid.as_str()))
        .cloned()
        .collect();

    (placeholders(kept.len()), kept)
}

impl MentionTemplate {
    fn single(content: impl Into<String>, user: UserRef) -> Self {
        Self {
            content: content.into(),
            extra: vec![user],
        }
    }

    pub fn group_create(req: &GroupCreateRequest) -> Self {
        let (slots, extra) = index_members(&req.members, Some(req.creator.as_str()));
        Self {
            content: format!("{} invite {} to join the group chat", req.creator_name, slots),
            extra,
        }
    }

    pub fn unable_add_destroy_account(req: &GroupCreateRequest) -> Self {
        let (slots, extra) = index_members(&req.members, Some(req.creator.as_str()));
        Self {
            content: format!(
                "User {} has been logged off, can't be added to group chat",
                slots
            ),
            extra,
        }
    }

    pub fn group_update(req: &GroupUpdateRequest) -> Self {
        let mut content = String::from("{0} ");
        if let Some(clause) = group_update_clause(req) {
            content.push_str(&clause);
        }
        Self::single(content, UserRef::new(&req.operator, &req.operator_name))
    }

    pub fn member_add(req: &GroupMemberAddRequest) -> Self {
        Self {
            content: format!(
                "{} invite {} to join the group chat",
                req.operator_name,
                placeholders(req.members.len())
            ),
            extra: req.members.clone(),
        }
    }

    pub fn member_remove(req: &GroupMemberRemoveRequest) -> Self {
        Self {
            content: format!(
                "{} removed {} from the group chat",
                req.operator_name,
                placeholders(req.members.len())
            ),
            extra: req.members.clone(),
        }
    }

    pub fn member_be_removed(req: &GroupMemberRemoveRequest) -> Self {
        Self::single(
            "You are removed from the group chat by {0}",
            UserRef::new(&req.operator, &req.operator_name),
        )
    }

    pub fn member_scan_join(req: &GroupMemberScanJoinRequest) -> Self {
        Self {
            content: "“{0}” joined the group chat through the QR code of “{1}”".to_string(),
            extra: vec![
                UserRef::new(&req.scaner, &req.scaner_name),
                UserRef::new(&req.generator, &req.generator_name),
            ],
        }
    }

    pub fn transfer_owner(req: &GroupTransferOwnerRequest) -> Self {
        Self::single(
            "“{0}” becomes the new group owner",
            UserRef::new(&req.new_grouper, &req.new_grouper_name),
        )
    }

    pub fn member_invite(req: &GroupMemberInviteRequest) -> Self {
        Self::single(
            format!(
                "“{{0}}“ want to invite {} friends to join the group chat",
                req.num
            ),
            UserRef::new(&req.inviter, &req.inviter_name),
        )
    }

    pub fn member_quit(uid: &str, name: &str) -> Self {
        Self::single("“{0}“ quit the group", UserRef::new(uid, name))
    }
}

/// Descriptive clause for a group attribute change, `None` for unknown keys.
pub fn group_update_clause(req: &GroupUpdateRequest) -> Option<String> {
    let attr = req.attr()?;
    let value = req.value_of(attr);

    let clause = match attr {
        GroupAttr::Name => format!(r#"updated the group name to "{}""#, value),
        GroupAttr::Notice if value.is_empty() => "clear the group notification".to_string(),
        GroupAttr::Notice => format!(r#"updated the group notification to "{}""#, value),
        GroupAttr::Forbidden if value == "1" => "set Group Silent ON".to_string(),
        GroupAttr::Forbidden => "set Group silent OFF".to_string(),
        GroupAttr::Invite if value == "1" => "“set Group Invitation Confirmation ON”，it need the confirmation of the group Owner/Administrator for any invitation.".to_string(),
        GroupAttr::Invite => "set Default Group Joining Mode ON".to_string(),
        GroupAttr::Status if value == "1" => "unbanned the group".to_string(),
        GroupAttr::Status => "banned the group".to_string(),
    };

    Some(clause)
}

/// Text announcing an automatic super-group upgrade
pub fn group_upgrade_content(member_threshold: u32) -> String {
    format!(
        "Group members exceed {}，will be automatically upgrade to super group",
        member_threshold
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn members(uids: &[&str]) -> Vec<UserRef> {
        uids.iter()
            .map(|uid| UserRef::new(*uid, format!("name-{}", uid)))
            .collect()
    }

    fn update(attr: &str, value: Option<&str>) -> GroupUpdateRequest {
        let mut data = HashMap::new();
        if let Some(v) = value {
            data.insert(attr.to_string(), v.to_string());
        }
        GroupUpdateRequest {
            group_no: "g1".to_string(),
            operator: "u1".to_string(),
            operator_name: "Alice".to_string(),
            attr: attr.to_string(),
            data,
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "{0}");
        assert_eq!(placeholders(3), "{0},{1},{2}");
    }

    #[test]
    fn test_group_create_excludes_creator() {
        let req = GroupCreateRequest {
            creator: "u2".to_string(),
            creator_name: "Bob".to_string(),
            group_no: "g1".to_string(),
            version: 7,
            members: members(&["u1", "u2", "u3"]),
        };

        let template = MentionTemplate::group_create(&req);
        assert_eq!(template.content, "Bob invite {0},{1} to join the group chat");
        assert_eq!(template.extra, members(&["u1", "u3"]));
    }

    #[test]
    fn test_slot_count_matches_extra() {
        let cases: [&[&str]; 4] = [&[], &["c"], &["a", "c", "b"], &["a", "b", "c", "d"]];
        for uids in cases {
            let req = GroupCreateRequest {
                creator: "c".to_string(),
                members: members(uids),
                ..Default::default()
            };
            let template = MentionTemplate::unable_add_destroy_account(&req);
            let slots = template.content.matches('{').count();
            assert_eq!(slots, template.extra.len());
            assert!(template.extra.iter().all(|m| m.uid != "c"));
        }
    }

    #[test]
    fn test_empty_members_do_not_fail() {
        let req = GroupCreateRequest {
            creator: "u1".to_string(),
            creator_name: "Alice".to_string(),
            ..Default::default()
        };
        let template = MentionTemplate::group_create(&req);
        assert_eq!(template.content, "Alice invite  to join the group chat");
        assert!(template.extra.is_empty());
    }

    #[test]
    fn test_member_add_keeps_operator_in_list() {
        let req = GroupMemberAddRequest {
            operator: "u1".to_string(),
            operator_name: "Alice".to_string(),
            group_no: "g1".to_string(),
            members: members(&["u1", "u2"]),
        };
        let template = MentionTemplate::member_add(&req);
        assert_eq!(template.content, "Alice invite {0},{1} to join the group chat");
        assert_eq!(template.extra.len(), 2);
    }

    #[test]
    fn test_update_name() {
        let template = MentionTemplate::group_update(&update("name", Some("Engineering")));
        assert_eq!(template.content, r#"{0} updated the group name to "Engineering""#);
        assert_eq!(template.extra, vec![UserRef::new("u1", "Alice")]);
    }

    #[test]
    fn test_update_notice() {
        assert_eq!(
            MentionTemplate::group_update(&update("notice", Some("Standup at 10"))).content,
            r#"{0} updated the group notification to "Standup at 10""#
        );
        assert_eq!(
            MentionTemplate::group_update(&update("notice", Some(""))).content,
            "{0} clear the group notification"
        );
        assert_eq!(
            MentionTemplate::group_update(&update("notice", None)).content,
            "{0} clear the group notification"
        );
    }

    #[test]
    fn test_update_flags() {
        let content = |attr: &str, value: &str| {
            MentionTemplate::group_update(&update(attr, Some(value))).content
        };

        assert_eq!(content("forbidden", "1"), "{0} set Group Silent ON");
        assert_eq!(content("forbidden", "0"), "{0} set Group silent OFF");
        assert_eq!(content("forbidden", "yes"), "{0} set Group silent OFF");
        assert!(content("invite", "1").starts_with("{0} “set Group Invitation Confirmation ON”"));
        assert_eq!(content("invite", "0"), "{0} set Default Group Joining Mode ON");
        assert_eq!(content("status", "1"), "{0} unbanned the group");
        assert_eq!(content("status", "2"), "{0} banned the group");
    }

    #[test]
    fn test_update_unknown_attr_has_no_clause() {
        let template = MentionTemplate::group_update(&update("avatar", Some("x.png")));
        assert_eq!(template.content, "{0} ");
    }

    #[test]
    fn test_single_mention_texts() {
        let invite = GroupMemberInviteRequest {
            inviter: "u1".to_string(),
            inviter_name: "Alice".to_string(),
            num: 3,
            ..Default::default()
        };
        assert_eq!(
            MentionTemplate::member_invite(&invite).content,
            "“{0}“ want to invite 3 friends to join the group chat"
        );

        let scan = GroupMemberScanJoinRequest {
            generator: "u1".to_string(),
            generator_name: "Alice".to_string(),
            scaner: "u2".to_string(),
            scaner_name: "Bob".to_string(),
            ..Default::default()
        };
        let template = MentionTemplate::member_scan_join(&scan);
        assert_eq!(
            template.content,
            "“{0}” joined the group chat through the QR code of “{1}”"
        );
        assert_eq!(template.extra[0].uid, "u2");
        assert_eq!(template.extra[1].uid, "u1");

        assert_eq!(
            MentionTemplate::member_quit("u1", "Alice").content,
            "“{0}“ quit the group"
        );
    }

    #[test]
    fn test_upgrade_content() {
        assert_eq!(
            group_upgrade_content(500),
            "Group members exceed 500，will be automatically upgrade to super group"
        );
    }
}
