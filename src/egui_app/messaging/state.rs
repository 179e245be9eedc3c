//! Messaging State
//!
//! State for the conversation directory and the active chat thread.
//! Contacts and messages are fetched independently; the conversation /
//! available-contact partition is recomputed locally whenever either
//! list changes. Sending and deleting reload the message list from the
//! server; the view never appends optimistically.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

use chrono::{DateTime, Utc};

use crate::egui_app::api::messaging::OutgoingAttachment;
use crate::egui_app::api::{DirectoryApi, MessagingApi};
use crate::egui_app::config::Config;
use crate::egui_app::messaging::search::UserSearch;
use crate::shared::model::{Contact, Message, Session};
use crate::shared::ApiError;

/// Preview label for messages that carry only an attachment
pub const ATTACHMENT_PREVIEW: &str = "📎 Attachment";

/// Preview length in the conversation list
const PREVIEW_LEN: usize = 40;

type LoadContactsResult = Result<Vec<Contact>, ApiError>;
type LoadMessagesResult = Result<Vec<Message>, ApiError>;
type WriteResult = Result<(), ApiError>;

/// A contact with at least one exchanged message, annotated with the
/// most recent message for the sidebar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub contact: Contact,
    pub preview: String,
    pub timestamp: String,
}

/// A file picked for the next send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl PendingAttachment {
    /// Inspect a path and record its metadata for the pre-send chip
    pub fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Self { path, file_name, size: metadata.len() })
    }

    /// Human-readable size for display
    pub fn human_size(&self) -> String {
        format_size(self.size)
    }

    fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Format a byte count as B / KB / MB
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Split the contact list into conversations and available contacts.
///
/// Every contact lands in exactly one of the two sets. Conversations
/// are ordered by the recency of their latest message, newest first.
pub fn partition(
    user_id: i64,
    contacts: &[Contact],
    messages: &[Message],
) -> (Vec<ConversationEntry>, Vec<Contact>) {
    let mut conversations: Vec<(Option<DateTime<Utc>>, ConversationEntry)> = Vec::new();
    let mut available: Vec<Contact> = Vec::new();

    for contact in contacts {
        let latest = messages
            .iter()
            .filter(|m| m.exchanged_with(user_id, contact.id))
            .max_by_key(|m| m.sent_at().unwrap_or(DateTime::UNIX_EPOCH));

        match latest {
            Some(message) => {
                let preview = if message.is_attachment_only() {
                    ATTACHMENT_PREVIEW.to_string()
                } else {
                    message.preview(PREVIEW_LEN)
                };
                conversations.push((
                    message.sent_at(),
                    ConversationEntry {
                        contact: contact.clone(),
                        preview,
                        timestamp: message.timestamp.clone(),
                    },
                ));
            }
            None => available.push(contact.clone()),
        }
    }

    conversations.sort_by_key(|(sent_at, _)| std::cmp::Reverse(sent_at.unwrap_or(DateTime::UNIX_EPOCH)));
    (conversations.into_iter().map(|(_, entry)| entry).collect(), available)
}

/// The main state for the messaging view
pub struct MessagingState {
    /// Full contact directory
    pub contacts: Vec<Contact>,
    /// Every message sent to or by the session user
    pub messages: Vec<Message>,
    /// Derived: contacts with history, newest thread first
    conversations: Vec<ConversationEntry>,
    /// Derived: contacts with no history
    available: Vec<Contact>,

    /// Currently open thread
    pub selected_contact_id: Option<i64>,

    /// Local filter over the conversation list
    pub filter_input: String,
    /// Compose field
    pub compose_input: String,
    /// File queued for the next send
    pub attachment: Option<PendingAttachment>,

    /// New-conversation panel visibility
    pub show_new_chat: bool,
    /// Attachment path prompt state
    pub show_attach_prompt: bool,
    pub attach_path_input: String,
    /// Thread-delete confirmation dialog
    pub confirm_thread_delete: bool,

    /// Informational banner (validation warnings, send failures)
    pub banner: Option<String>,

    /// Search engine for starting new conversations
    pub search: UserSearch,

    pub is_loading_contacts: bool,
    pub is_loading_messages: bool,
    pub is_sending: bool,

    pending_contacts: Option<Receiver<LoadContactsResult>>,
    pending_messages: Option<Receiver<LoadMessagesResult>>,
    pending_send: Option<Receiver<WriteResult>>,
    pending_delete: Option<Receiver<WriteResult>>,
    pending_thread_delete: Option<Receiver<WriteResult>>,

    /// Identity the view was last initialized for
    initialized_for: Option<i64>,
}

impl Default for MessagingState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagingState {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            messages: Vec::new(),
            conversations: Vec::new(),
            available: Vec::new(),
            selected_contact_id: None,
            filter_input: String::new(),
            compose_input: String::new(),
            attachment: None,
            show_new_chat: false,
            show_attach_prompt: false,
            attach_path_input: String::new(),
            confirm_thread_delete: false,
            banner: None,
            search: UserSearch::new(),
            is_loading_contacts: false,
            is_loading_messages: false,
            is_sending: false,
            pending_contacts: None,
            pending_messages: None,
            pending_send: None,
            pending_delete: None,
            pending_thread_delete: None,
            initialized_for: None,
        }
    }

    /// Load both lists once per identity; called every frame from the view
    pub fn ensure_loaded(&mut self, config: &Config, session: &Session) {
        if self.initialized_for != Some(session.id) {
            *self = Self::new();
            self.initialized_for = Some(session.id);
            self.load_contacts(config, session);
            self.load_messages(config, session);
        }
    }

    /// Forget everything; used on logout
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn conversations(&self) -> &[ConversationEntry] {
        &self.conversations
    }

    pub fn available_contacts(&self) -> &[Contact] {
        &self.available
    }

    /// Conversations matching the local filter box
    pub fn filtered_conversations(&self) -> Vec<&ConversationEntry> {
        self.conversations
            .iter()
            .filter(|entry| entry.contact.name_matches(&self.filter_input))
            .collect()
    }

    /// Contact of the open thread
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected_contact_id
            .and_then(|id| self.contacts.iter().find(|c| c.id == id))
    }

    /// Messages of the open thread, oldest first
    pub fn thread_messages(&self) -> Vec<&Message> {
        let Some(contact_id) = self.selected_contact_id else {
            return Vec::new();
        };
        let Some(user_id) = self.initialized_for else {
            return Vec::new();
        };
        let mut thread: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.exchanged_with(user_id, contact_id))
            .collect();
        thread.sort_by_key(|m| m.sent_at().unwrap_or(DateTime::UNIX_EPOCH));
        thread
    }

    /// Open an existing conversation
    pub fn select_conversation(&mut self, contact_id: i64) {
        self.selected_contact_id = Some(contact_id);
        self.show_new_chat = false;
        self.confirm_thread_delete = false;
        self.banner = None;
        self.search.reset();
    }

    /// Open a thread with a contact that has no history yet
    pub fn start_conversation(&mut self, contact: Contact) {
        if !self.contacts.iter().any(|c| c.id == contact.id) {
            self.contacts.push(contact.clone());
            self.recompute_partition();
        }
        self.select_conversation(contact.id);
    }

    /// Whether the compose state has anything to send
    pub fn can_send(&self) -> bool {
        !self.compose_input.trim().is_empty() || self.attachment.is_some()
    }

    pub fn load_contacts(&mut self, config: &Config, session: &Session) {
        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = DirectoryApi::new(config);
            let _ = tx.send(api.contacts(&session));
        });
        self.pending_contacts = Some(rx);
        self.is_loading_contacts = true;
    }

    pub fn load_messages(&mut self, config: &Config, session: &Session) {
        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = MessagingApi::new(config);
            let _ = tx.send(api.messages(&session));
        });
        self.pending_messages = Some(rx);
        self.is_loading_messages = true;
    }

    /// Send the compose field and attachment, if anything is there
    pub fn send(&mut self, config: &Config, session: &Session) {
        if self.is_sending || !self.can_send() {
            return;
        }
        let Some(receiver_id) = self.selected_contact_id else {
            return;
        };

        let outgoing = match &self.attachment {
            Some(pending) => match pending.read_bytes() {
                Ok(bytes) => Some(OutgoingAttachment {
                    file_name: pending.file_name.clone(),
                    bytes,
                }),
                Err(e) => {
                    tracing::warn!("could not read attachment {:?}: {}", pending.path, e);
                    self.banner = Some(format!("Could not read '{}'", pending.file_name));
                    return;
                }
            },
            None => None,
        };

        let content = self.compose_input.trim().to_string();
        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = MessagingApi::new(config);
            let _ = tx.send(api.send(&session, receiver_id, &content, outgoing));
        });
        self.pending_send = Some(rx);
        self.is_sending = true;
    }

    /// Delete one message, guarded by the 10-minute window.
    ///
    /// The guard runs before any network call: an expired message gets
    /// an inline warning and nothing is sent.
    pub fn request_delete(&mut self, config: &Config, session: &Session, message: &Message) {
        if !message.within_delete_window(Utc::now()) {
            self.banner = Some("Messages can only be deleted within 10 minutes of sending.".to_string());
            return;
        }

        let message_id = message.id;
        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = MessagingApi::new(config);
            let _ = tx.send(api.delete_message(&session, message_id));
        });
        self.pending_delete = Some(rx);
    }

    /// Delete the whole open thread; the confirmation dialog has
    /// already been answered when this runs.
    pub fn delete_thread(&mut self, config: &Config, session: &Session) {
        let Some(contact_id) = self.selected_contact_id else {
            return;
        };
        self.confirm_thread_delete = false;

        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = MessagingApi::new(config);
            let _ = tx.send(api.delete_thread(&session, contact_id));
        });
        self.pending_thread_delete = Some(rx);
    }

    /// Resolve the attach prompt into a pending attachment
    pub fn confirm_attachment(&mut self) {
        let path = PathBuf::from(self.attach_path_input.trim());
        match PendingAttachment::from_path(path) {
            Ok(pending) => {
                // A new selection replaces the previous one.
                self.attachment = Some(pending);
                self.show_attach_prompt = false;
                self.attach_path_input.clear();
            }
            Err(e) => {
                tracing::warn!("attachment rejected: {}", e);
                self.banner = Some("That file could not be attached.".to_string());
            }
        }
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    /// Collect finished fetches and writes; called once per frame
    pub fn poll(&mut self, config: &Config, session: &Session) {
        if let Some(rx) = &self.pending_contacts {
            if let Ok(result) = rx.try_recv() {
                self.pending_contacts = None;
                self.is_loading_contacts = false;
                match result {
                    Ok(contacts) => {
                        self.contacts = contacts;
                        self.recompute_partition();
                    }
                    Err(e) => tracing::error!("failed to load contacts: {}", e),
                }
            }
        }

        if let Some(rx) = &self.pending_messages {
            if let Ok(result) = rx.try_recv() {
                self.pending_messages = None;
                self.is_loading_messages = false;
                match result {
                    Ok(messages) => {
                        self.messages = messages;
                        self.recompute_partition();
                    }
                    Err(e) => tracing::error!("failed to load messages: {}", e),
                }
            }
        }

        if let Some(rx) = &self.pending_send {
            if let Ok(result) = rx.try_recv() {
                self.pending_send = None;
                self.is_sending = false;
                match result {
                    Ok(()) => {
                        // Trust only the server echo: clear the compose
                        // state and refetch the thread.
                        self.compose_input.clear();
                        self.attachment = None;
                        self.load_messages(config, session);
                    }
                    Err(e) => {
                        tracing::error!("failed to send message: {}", e);
                        self.banner = Some(e.user_message());
                    }
                }
            }
        }

        if let Some(rx) = &self.pending_delete {
            if let Ok(result) = rx.try_recv() {
                self.pending_delete = None;
                match result {
                    Ok(()) => self.load_messages(config, session),
                    Err(e) => tracing::error!("failed to delete message: {}", e),
                }
            }
        }

        if let Some(rx) = &self.pending_thread_delete {
            if let Ok(result) = rx.try_recv() {
                self.pending_thread_delete = None;
                match result {
                    Ok(()) => self.load_messages(config, session),
                    Err(e) => tracing::error!("failed to delete thread: {}", e),
                }
            }
        }
    }

    fn recompute_partition(&mut self) {
        let Some(user_id) = self.initialized_for else {
            return;
        };
        let (conversations, available) = partition(user_id, &self.contacts, &self.messages);
        self.conversations = conversations;
        self.available = available;
    }

    /// Test-only seeding of directory contents
    #[doc(hidden)]
    pub fn seed_for_test(&mut self, user_id: i64, contacts: Vec<Contact>, messages: Vec<Message>) {
        self.initialized_for = Some(user_id);
        self.contacts = contacts;
        self.messages = messages;
        self.recompute_partition();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::model::Role;
    use std::io::Write;

    fn contact(id: i64, name: &str) -> Contact {
        Contact { id, name: name.to_string(), role: Role::Student }
    }

    fn message(id: i64, sender: i64, receiver: i64, content: &str, timestamp: &str) -> Message {
        Message {
            id,
            sender_id: sender,
            receiver_id: receiver,
            content: content.to_string(),
            timestamp: timestamp.to_string(),
            sender_name: "someone".to_string(),
            attachment_url: None,
        }
    }

    #[test]
    fn test_partition_splits_by_history() {
        let contacts = vec![contact(1, "Lucía"), contact(2, "Martín"), contact(3, "Sofía")];
        let messages = vec![
            message(10, 7, 1, "hola", "2026-03-02T10:00:00Z"),
            message(11, 3, 7, "consulta", "2026-03-02T11:00:00Z"),
        ];

        let (conversations, available) = partition(7, &contacts, &messages);

        let conversation_ids: Vec<i64> = conversations.iter().map(|e| e.contact.id).collect();
        let available_ids: Vec<i64> = available.iter().map(|c| c.id).collect();
        assert_eq!(conversation_ids, vec![3, 1]); // newest thread first
        assert_eq!(available_ids, vec![2]);
    }

    #[test]
    fn test_partition_every_contact_in_exactly_one_set() {
        let contacts = vec![contact(1, "A"), contact(2, "B")];
        let messages = vec![message(10, 1, 7, "x", "2026-03-02T10:00:00Z")];
        let (conversations, available) = partition(7, &contacts, &messages);
        assert_eq!(conversations.len() + available.len(), contacts.len());
        for entry in &conversations {
            assert!(!available.iter().any(|c| c.id == entry.contact.id));
        }
    }

    #[test]
    fn test_partition_annotates_latest_message() {
        let contacts = vec![contact(1, "Lucía")];
        let messages = vec![
            message(10, 7, 1, "first", "2026-03-02T10:00:00Z"),
            message(11, 1, 7, "second", "2026-03-02T12:00:00Z"),
        ];
        let (conversations, _) = partition(7, &contacts, &messages);
        assert_eq!(conversations[0].preview, "second");
        assert_eq!(conversations[0].timestamp, "2026-03-02T12:00:00Z");
    }

    #[test]
    fn test_partition_attachment_only_preview() {
        let contacts = vec![contact(1, "Lucía")];
        let mut msg = message(10, 7, 1, "  ", "2026-03-02T10:00:00Z");
        msg.attachment_url = Some("/uploads/7/notes.pdf".to_string());
        let (conversations, _) = partition(7, &contacts, &[msg]);
        assert_eq!(conversations[0].preview, ATTACHMENT_PREVIEW);
    }

    #[test]
    fn test_partition_ignores_third_party_messages() {
        let contacts = vec![contact(1, "Lucía")];
        // A message between two other users must not create a conversation.
        let messages = vec![message(10, 1, 2, "not ours", "2026-03-02T10:00:00Z")];
        let (conversations, available) = partition(7, &contacts, &messages);
        assert!(conversations.is_empty());
        assert_eq!(available.len(), 1);
    }

    #[test]
    fn test_filtered_conversations_is_local_and_case_insensitive() {
        let mut state = MessagingState::new();
        state.seed_for_test(
            7,
            vec![contact(1, "Lucía Gómez"), contact(2, "Martín Suárez")],
            vec![
                message(10, 7, 1, "hola", "2026-03-02T10:00:00Z"),
                message(11, 7, 2, "hola", "2026-03-02T11:00:00Z"),
            ],
        );

        state.filter_input = "lucía".to_string();
        let filtered = state.filtered_conversations();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].contact.id, 1);
    }

    #[test]
    fn test_thread_messages_sorted_ascending() {
        let mut state = MessagingState::new();
        state.seed_for_test(
            7,
            vec![contact(1, "Lucía")],
            vec![
                message(11, 1, 7, "later", "2026-03-02T12:00:00Z"),
                message(10, 7, 1, "earlier", "2026-03-02T10:00:00Z"),
                message(12, 7, 2, "other thread", "2026-03-02T11:00:00Z"),
            ],
        );
        state.selected_contact_id = Some(1);

        let thread = state.thread_messages();
        let contents: Vec<&str> = thread.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["earlier", "later"]);
    }

    #[test]
    fn test_select_conversation_clears_search_and_panel() {
        let mut state = MessagingState::new();
        state.show_new_chat = true;
        state.search.query = "ana".to_string();

        state.select_conversation(5);

        assert_eq!(state.selected_contact_id, Some(5));
        assert!(!state.show_new_chat);
        assert!(state.search.query.is_empty());
        assert!(state.search.results().is_empty());
    }

    #[test]
    fn test_start_conversation_adds_unknown_contact() {
        let mut state = MessagingState::new();
        state.seed_for_test(7, vec![contact(1, "Lucía")], vec![]);

        state.start_conversation(contact(9, "Nuevo"));

        assert!(state.contacts.iter().any(|c| c.id == 9));
        assert_eq!(state.selected_contact_id, Some(9));
    }

    #[test]
    fn test_can_send_requires_text_or_attachment() {
        let mut state = MessagingState::new();
        assert!(!state.can_send());

        state.compose_input = "   ".to_string();
        assert!(!state.can_send());

        state.compose_input = "hola".to_string();
        assert!(state.can_send());

        state.compose_input.clear();
        state.attachment = Some(PendingAttachment {
            path: PathBuf::from("/tmp/x"),
            file_name: "x".to_string(),
            size: 1,
        });
        assert!(state.can_send());
    }

    #[test]
    fn test_request_delete_outside_window_warns_without_network() {
        let mut state = MessagingState::new();
        let config = Config::new();
        let session = Session {
            id: 7,
            first_name: "Ana".to_string(),
            last_name: "Pereyra".to_string(),
            role: Role::Student,
            token: "tok".to_string(),
        };
        let old = message(10, 7, 1, "old", "2020-01-01T00:00:00Z");

        state.request_delete(&config, &session, &old);

        assert!(state.banner.as_deref().unwrap_or("").contains("10 minutes"));
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_pending_attachment_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let pending = PendingAttachment::from_path(file.path().to_path_buf()).unwrap();
        assert_eq!(pending.size, 2048);
        assert_eq!(pending.human_size(), "2.0 KB");
    }

    #[test]
    fn test_pending_attachment_rejects_missing_file() {
        let result = PendingAttachment::from_path(PathBuf::from("/definitely/not/here.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
