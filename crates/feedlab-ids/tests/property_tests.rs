//! Property tests for feedlab-ids
//!
//! UUID shape and uniqueness of minted ids.

use feedlab_ids::NodeId;
use proptest::prelude::*;
use std::collections::HashSet;

fn is_uuid_v4(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    lens == [8, 4, 4, 4, 12]
        && groups.iter().all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
        && groups[2].starts_with('4')
        && matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b'))
}

proptest! {
    // Every fresh id is a lowercase v4 UUID and no two collide.
    #[test]
    fn prop_fresh_ids_are_unique_uuids(n in 1usize..500) {
        let ids: Vec<NodeId> = (0..n).map(|_| NodeId::fresh()).collect();
        for id in &ids {
            prop_assert!(is_uuid_v4(id.as_str()), "{id}");
        }
        let distinct: HashSet<&NodeId> = ids.iter().collect();
        prop_assert_eq!(distinct.len(), n);
    }

    // from_bytes is the hex of the bytes with dashes inserted.
    #[test]
    fn prop_from_bytes_is_dashed_hex(bytes in any::<[u8; 16]>()) {
        let id = NodeId::from_bytes(bytes);
        prop_assert_eq!(id.as_str().replace('-', ""), hex::encode(bytes));
        prop_assert_eq!(id.as_str().len(), 36);
    }

    // Ids serialize as their plain string and read back unchanged.
    #[test]
    fn prop_serde_is_transparent(raw in "[a-z0-9-]{0,40}") {
        let id = NodeId::from(raw.as_str());
        let json = serde_json::to_string(&id).unwrap();
        prop_assert_eq!(&json, &serde_json::to_string(&raw).unwrap());
        let back: NodeId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, id);
    }
}
