//! Property-based tests for the conversation partition

use aulanet::egui_app::messaging::state::partition;
use aulanet::shared::model::{Contact, Message, Role};
use proptest::prelude::*;

const USER_ID: i64 = 0;

fn arb_contacts() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::btree_set(1i64..20, 0..12).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Contact {
                id,
                name: format!("Contact {}", id),
                role: Role::Student,
            })
            .collect()
    })
}

fn arb_messages() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((0i64..20, 0i64..20, 0u8..60), 0..30).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (sender, receiver, minute))| Message {
                id: i as i64,
                sender_id: sender,
                receiver_id: receiver,
                content: format!("msg {}", i),
                timestamp: format!("2026-03-02T10:{:02}:00Z", minute),
                sender_name: "x".to_string(),
                attachment_url: None,
            })
            .collect()
    })
}

proptest! {
    /// Every contact lands in exactly one of the two sets.
    #[test]
    fn partition_is_exact(contacts in arb_contacts(), messages in arb_messages()) {
        let (conversations, available) = partition(USER_ID, &contacts, &messages);

        prop_assert_eq!(conversations.len() + available.len(), contacts.len());

        for entry in &conversations {
            prop_assert!(!available.iter().any(|c| c.id == entry.contact.id));
        }
    }

    /// A contact is a conversation exactly when a message involves both
    /// the user and that contact.
    #[test]
    fn conversations_match_history(contacts in arb_contacts(), messages in arb_messages()) {
        let (conversations, available) = partition(USER_ID, &contacts, &messages);

        for contact in &contacts {
            let has_history = messages
                .iter()
                .any(|m| m.exchanged_with(USER_ID, contact.id));
            let in_conversations = conversations.iter().any(|e| e.contact.id == contact.id);
            let in_available = available.iter().any(|c| c.id == contact.id);

            prop_assert_eq!(in_conversations, has_history);
            prop_assert_eq!(in_available, !has_history);
        }
    }

    /// Conversations come out newest-first.
    #[test]
    fn conversations_sorted_by_recency(contacts in arb_contacts(), messages in arb_messages()) {
        let (conversations, _) = partition(USER_ID, &contacts, &messages);

        let timestamps: Vec<&str> = conversations.iter().map(|e| e.timestamp.as_str()).collect();
        // Same-format RFC3339 strings order lexicographically.
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(timestamps, sorted);
    }
}
