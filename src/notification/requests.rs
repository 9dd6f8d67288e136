use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// Hosts send `null` for empty lists; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user as referenced from a notification's `extra` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub uid: String,
    pub name: String,
}

impl UserRef {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// Group created (also used to report members that could not be added)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupCreateRequest {
    pub creator: String,
    pub creator_name: String,
    pub group_no: String,
    /// Group data version
    #[serde(default)]
    pub version: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<UserRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberAddRequest {
    pub operator: String,
    pub operator_name: String,
    pub group_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<UserRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberRemoveRequest {
    pub operator: String,
    pub operator_name: String,
    pub group_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<UserRef>,
}

/// Group attribute keys an update can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAttr {
    Name,
    Notice,
    Forbidden,
    Invite,
    Status,
}

impl GroupAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupAttr::Name => "name",
            GroupAttr::Notice => "notice",
            GroupAttr::Forbidden => "forbidden",
            GroupAttr::Invite => "invite",
            GroupAttr::Status => "status",
        }
    }

    /// `None` for keys outside the known set
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(GroupAttr::Name),
            "notice" => Some(GroupAttr::Notice),
            "forbidden" => Some(GroupAttr::Forbidden),
            "invite" => Some(GroupAttr::Invite),
            "status" => Some(GroupAttr::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupUpdateRequest {
    pub group_no: String,
    pub operator: String,
    pub operator_name: String,
    /// Attribute that changed; kept as a string so unknown keys pass through
    pub attr: String,
    /// New attribute values keyed by attribute name
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: HashMap<String, String>,
}

impl GroupUpdateRequest {
    pub fn attr(&self) -> Option<GroupAttr> {
        GroupAttr::parse(&self.attr)
    }

    /// Value for `attr` in `data`, empty when absent
    pub fn value_of(&self, attr: GroupAttr) -> &str {
        self.data.get(attr.as_str()).map(String::as_str).unwrap_or("")
    }
}

/// A user joined by scanning another member's QR code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberScanJoinRequest {
    pub group_no: String,
    /// QR code owner
    pub generator: String,
    pub generator_name: String,
    /// User who scanned
    pub scaner: String,
    pub scaner_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupTransferOwnerRequest {
    pub group_no: String,
    pub old_grouper: String,
    pub old_grouper_name: String,
    pub new_grouper: String,
    pub new_grouper_name: String,
}

/// Invitation awaiting owner/admin confirmation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberInviteRequest {
    pub group_no: String,
    pub invite_no: String,
    pub inviter: String,
    pub inviter_name: String,
    /// Number of invited users
    #[serde(default)]
    pub num: usize,
    /// Users who get to see the request (owner and admins)
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscribers: Vec<String>,
}
