//! System prompt assembly

use super::context::RequestContext;
use crate::llm::ChatMessage;

const ROLE_DESCRIPTION: &str = "You are an Enterprise AI Assistant. \
Your primary goal is to provide accurate and helpful information.\n\
Pay close attention to the user's context provided below.";

const INSTRUCTIONS: [&str; 3] = [
    "If the user is 'Premium' or 'Enterprise', provide more detailed, comprehensive answers.",
    "If the severity is 'High' or 'Critical', be direct, concise, and prioritize actionable solutions.",
    "If the query required a web search, the relevant context is provided below. Use it to formulate your answer.",
];

/// Render the system prompt for a request. The output depends only on the
/// arguments; the search context block is always present, even when empty.
pub fn build_system_prompt(context: &RequestContext, search_context: &str) -> String {
    let mut prompt = String::with_capacity(768 + search_context.len());

    prompt.push_str(ROLE_DESCRIPTION);
    prompt.push_str("\n\n**User Context:**\n");
    prompt.push_str(&format!("- User Tier: {}\n", context.tier.label()));
    prompt.push_str(&format!("- Request Severity: {}\n", context.severity.label()));

    prompt.push_str("\n**Instructions:**\n");
    for line in INSTRUCTIONS {
        prompt.push_str("- ");
        prompt.push_str(line);
        prompt.push('\n');
    }

    prompt.push_str("\n**Response Style:**\n");
    prompt.push_str(&format!("- {}\n", response_style(context)));

    prompt.push_str("\n**Search Context:**\n");
    prompt.push_str(search_context);

    prompt
}

/// One-line summary of the policy that applies to this context
fn response_style(context: &RequestContext) -> &'static str {
    match (context.tier.wants_detail(), context.severity.is_urgent()) {
        (true, true) => "Lead with the actionable fix, then add the supporting detail.",
        (true, false) => "Detailed and comprehensive.",
        (false, true) => "Direct and concise; lead with actionable steps.",
        (false, false) => "Clear and helpful.",
    }
}

/// Outgoing message list: the system prompt followed by the history, in order
pub fn assemble_messages(system_prompt: String, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend_from_slice(history);
    messages
}
