/// Content-type discriminators shared with rendering clients.
///
/// The numeric codes go out in each payload's `type` field and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    GroupCreate,
    GroupMemberAdd,
    GroupMemberRemove,
    GroupUpdate,
    GroupMemberScanJoin,
    GroupTransferGrouper,
    GroupMemberInvite,
    GroupMemberBeRemove,
    GroupMemberQuit,
    GroupUpgrade,
    Tip,
}

impl ContentType {
    pub fn code(self) -> i32 {
        match self {
            ContentType::GroupCreate => 1001,
            ContentType::GroupMemberAdd => 1002,
            ContentType::GroupMemberRemove => 1003,
            ContentType::GroupUpdate => 1005,
            ContentType::GroupMemberScanJoin => 1007,
            ContentType::GroupTransferGrouper => 1008,
            ContentType::GroupMemberInvite => 1009,
            ContentType::GroupMemberBeRemove => 1010,
            ContentType::GroupMemberQuit => 1011,
            ContentType::GroupUpgrade => 1012,
            ContentType::Tip => 2000,
        }
    }
}

/// Command the messaging core relays when a group's member list changed
pub const CMD_GROUP_MEMBER_UPDATE: &str = "memberUpdate";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ContentType::GroupCreate.code(), 1001);
        assert_eq!(ContentType::GroupUpdate.code(), 1005);
        assert_eq!(ContentType::GroupMemberBeRemove.code(), 1010);
        assert_eq!(ContentType::GroupUpgrade.code(), 1012);
        assert_eq!(ContentType::Tip.code(), 2000);
    }
}
