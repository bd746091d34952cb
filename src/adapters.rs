//! Adapters from Telegram (teloxide) types to core types.

use teloxide::types::UpdateKind;

use crate::types::Update;

/// Wraps a teloxide Update for extraction of the echoable core [`Update`].
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> TelegramUpdateWrapper<'a> {
    /// Returns the core update when the wrapped update is a new message that
    /// carries text. Edits, channel posts, media without text and every other
    /// update kind yield `None` and are not echoed.
    pub fn to_update(&self) -> Option<Update> {
        let UpdateKind::Message(message) = &self.0.kind else {
            return None;
        };
        let text = message.text()?;

        Some(Update {
            chat_id: message.chat.id.0,
            message_id: message.id.0,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> teloxide::types::Update {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_message_becomes_update() {
        let wire = parse(
            r#"{
                "update_id": 1,
                "message": {
                    "message_id": 7,
                    "date": 1700000000,
                    "chat": {"id": 42, "type": "private"},
                    "text": "hi"
                }
            }"#,
        );

        let update = TelegramUpdateWrapper(&wire).to_update().unwrap();
        assert_eq!(update.chat_id, 42);
        assert_eq!(update.message_id, 7);
        assert_eq!(update.text, "hi");
    }

    #[test]
    fn test_edited_message_is_skipped() {
        let wire = parse(
            r#"{
                "update_id": 2,
                "edited_message": {
                    "message_id": 8,
                    "date": 1700000000,
                    "chat": {"id": 42, "type": "private"},
                    "text": "edited"
                }
            }"#,
        );

        assert!(TelegramUpdateWrapper(&wire).to_update().is_none());
    }

    #[test]
    fn test_message_without_text_is_skipped() {
        let wire = parse(
            r#"{
                "update_id": 3,
                "message": {
                    "message_id": 9,
                    "date": 1700000000,
                    "chat": {"id": 42, "type": "private"},
                    "photo": [{"file_id": "f", "file_unique_id": "u", "width": 1, "height": 1}]
                }
            }"#,
        );

        assert!(TelegramUpdateWrapper(&wire).to_update().is_none());
    }

    #[test]
    fn test_group_chat_ids_survive_extraction() {
        let wire = parse(
            r#"{
                "update_id": 4,
                "message": {
                    "message_id": 10,
                    "date": 1700000000,
                    "chat": {"id": -1001234567890, "type": "supergroup", "title": "g"},
                    "text": "from a group"
                }
            }"#,
        );

        let update = TelegramUpdateWrapper(&wire).to_update().unwrap();
        assert_eq!(update.chat_id, -1001234567890);
        assert_eq!(update.text, "from a group");
    }
}
