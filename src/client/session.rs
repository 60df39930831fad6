use crate::domain::{ConversationId, MessageRole, Transcript, TranscriptTurn};

/// Session-scoped state held by the browser side of the protocol: the running
/// transcript, the draft input, and the conversation id captured from the
/// first response. Lives only as long as the page; "new chat" resets it
/// without any server call.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    input: String,
    in_flight: bool,
    conversation_id: Option<ConversationId>,
}

/// Payload for one `POST /api/chat` call: the full transcript plus the
/// conversation id from an earlier turn, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub transcript: Transcript,
    pub conversation_id: Option<ConversationId>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.conversation_id
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Moves the draft input onto the transcript as a user turn and returns
    /// the request payload to send. Returns `None` when the input is empty or
    /// a request is already in flight.
    pub fn submit(&mut self) -> Option<OutboundRequest> {
        if self.input.is_empty() || self.in_flight {
            return None;
        }

        let content = std::mem::take(&mut self.input);
        self.transcript
            .push(TranscriptTurn::new(MessageRole::User, content));
        self.in_flight = true;

        Some(OutboundRequest {
            transcript: self.transcript.clone(),
            conversation_id: self.conversation_id,
        })
    }

    /// Records the conversation id returned in the response header. Only the
    /// first response sets it; later turns reuse the stored id.
    pub fn capture_conversation_id(&mut self, id: ConversationId) {
        if self.conversation_id.is_none() {
            self.conversation_id = Some(id);
        }
    }

    /// Appends a streamed fragment to the trailing assistant turn, creating
    /// that turn when the first fragment arrives.
    pub fn apply_fragment(&mut self, fragment: &str) {
        match self.transcript.last_mut() {
            Some(turn) if turn.role == MessageRole::Assistant => {
                turn.content.push_str(fragment);
            }
            _ => {
                self.transcript
                    .push(TranscriptTurn::new(MessageRole::Assistant, fragment));
            }
        }
    }

    pub fn finish_reply(&mut self) {
        self.in_flight = false;
    }

    /// Clears the transcript and conversation id locally.
    pub fn new_chat(&mut self) {
        self.transcript = Transcript::default();
        self.conversation_id = None;
        self.input.clear();
        self.in_flight = false;
    }
}
