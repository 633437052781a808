//! Unit tests for the Identifiers module
//!
//! Tests cover group and version identifiers, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{GroupId, VersionId};
use std::collections::HashSet;
use uuid::Uuid;

mod group_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let ids: HashSet<GroupId> = (0..100).map(|_| GroupId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_later_ids_sort_after_earlier_ones() {
        let earlier = GroupId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = GroupId::new();
        assert!(earlier < later);
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = GroupId::from(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(GroupId::prefix(), "GRP");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = GroupId::new();
        let parsed: GroupId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: GroupId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<GroupId, _> = "GRP-not-a-uuid".parse();
        assert!(result.is_err());
    }
}

mod version_id_tests {
    use super::*;

    #[test]
    fn test_prefix_and_display() {
        let id = VersionId::new();
        assert_eq!(VersionId::prefix(), "VER");
        assert_eq!(id.to_string(), format!("VER-{}", id.as_uuid()));
    }

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = VersionId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{}\"", uuid));

        let back: VersionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
