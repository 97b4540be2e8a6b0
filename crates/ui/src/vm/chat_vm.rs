use mindcare_core::model::{ChatMessage, MessageId};

use crate::vm::time_fmt::format_clock_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub id: MessageId,
    pub text: String,
    pub from_user: bool,
    pub time_label: String,
}

impl From<&ChatMessage> for ChatBubbleVm {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            from_user: message.is_user(),
            time_label: format_clock_time(message.sent_at),
        }
    }
}

#[must_use]
pub fn map_chat_bubbles(messages: &[ChatMessage]) -> Vec<ChatBubbleVm> {
    messages.iter().map(ChatBubbleVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::time::fixed_clock;
    use services::AppServices;

    #[test]
    fn transcript_maps_in_order() {
        let services = AppServices::in_memory(fixed_clock()).unwrap();
        let mut chat = services.chat_simulator();
        let pending = chat.submit("hello").unwrap();
        chat.deliver(pending);

        let bubbles = map_chat_bubbles(chat.messages());
        assert_eq!(bubbles.len(), 3);
        assert!(!bubbles[0].from_user);
        assert!(bubbles[1].from_user);
        assert_eq!(bubbles[1].text, "hello");
        assert!(!bubbles[2].from_user);
        assert!(bubbles.iter().all(|b| b.time_label == "22:13"));
    }
}
