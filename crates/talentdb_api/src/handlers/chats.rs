//! Chat board endpoints.

use crate::error::ApiResult;
use crate::handlers::{new_id, require, ApiContext};
use crate::request::{CreateChat, ListQuery, PostMessage};
use chrono::Utc;
use talentdb_core::{ChatBoard, ChatMessage, Page};

impl ApiContext {
    /// `GET /api/chats`.
    pub fn list_chats(&self, query: &ListQuery) -> ApiResult<Page<ChatBoard>> {
        self.list_page(&self.chats(), query)
    }

    /// `POST /api/chats`.
    pub fn create_chat(&self, request: CreateChat) -> ApiResult<ChatBoard> {
        require(&request.title, "title required")?;
        let board = ChatBoard {
            id: new_id(),
            title: request.title.trim().to_string(),
            messages: Vec::new(),
        };
        Ok(self.chats().create(board)?)
    }

    /// `GET /api/chats/:chatId/messages` - 404 on an unknown board.
    pub fn list_messages(&self, chat_id: &str) -> ApiResult<Vec<ChatMessage>> {
        Ok(self.chats().get(chat_id)?.messages)
    }

    /// `POST /api/chats/:chatId/messages`.
    ///
    /// Appends through `mutate`, so racing posts to the same board
    /// resolve through the backend's per-key write serialization.
    pub fn post_message(&self, chat_id: &str, request: PostMessage) -> ApiResult<ChatMessage> {
        require(&request.user_id, "userId and text required")?;
        require(&request.text, "userId and text required")?;

        let message = ChatMessage {
            id: new_id(),
            chat_id: chat_id.to_string(),
            user_id: request.user_id,
            text: request.text.trim().to_string(),
            ts: Utc::now().timestamp_millis(),
        };

        let appended = message.clone();
        self.chats().mutate(chat_id, move |mut board| {
            board.messages.push(appended);
            board
        })?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use talentdb_storage::InMemoryBackend;

    fn ctx() -> ApiContext {
        ApiContext::new(Arc::new(InMemoryBackend::new()))
    }

    fn board(ctx: &ApiContext, title: &str) -> String {
        ctx.create_chat(CreateChat { title: title.into() }).unwrap().id
    }

    #[test]
    fn create_chat_starts_empty() {
        let ctx = ctx();
        let created = ctx.create_chat(CreateChat { title: "general".into() }).unwrap();
        assert!(created.messages.is_empty());
        assert!(ctx.list_messages(&created.id).unwrap().is_empty());
    }

    #[test]
    fn messages_append_in_post_order() {
        let ctx = ctx();
        let chat_id = board(&ctx, "general");

        ctx.post_message(
            &chat_id,
            PostMessage {
                user_id: "u1".into(),
                text: "first".into(),
            },
        )
        .unwrap();
        ctx.post_message(
            &chat_id,
            PostMessage {
                user_id: "u2".into(),
                text: "second".into(),
            },
        )
        .unwrap();

        let messages = ctx.list_messages(&chat_id).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "first");
        assert_eq!(messages[1].text, "second");
        assert_eq!(messages[0].chat_id, chat_id);
    }

    #[test]
    fn post_requires_user_and_text() {
        let ctx = ctx();
        let chat_id = board(&ctx, "general");
        let err = ctx
            .post_message(
                &chat_id,
                PostMessage {
                    user_id: String::new(),
                    text: "hi".into(),
                },
            )
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn unknown_board_is_404() {
        let ctx = ctx();
        assert_eq!(ctx.list_messages("missing").unwrap_err().status_code(), 404);
        let err = ctx
            .post_message(
                "missing",
                PostMessage {
                    user_id: "u1".into(),
                    text: "hi".into(),
                },
            )
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
