//! Prompt construction for the completion service
//!
//! The prompt structure is fixed: a system message pinning the output style
//! and a user message embedding the question and code verbatim. The format
//! rules keep answers as plain numbered text the site can display without
//! any markup handling.

/// Model requested from the completion service
pub const COMPLETION_MODEL: &str = "gpt-4.1-mini";

/// System message sent with every request
pub const SYSTEM_PROMPT: &str = "You help users integrate Unity C# snippets into their own projects. Always follow the format rules in the user prompt: plain text only, no Markdown.";

/// A prepared request: system message plus assembled user prompt
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

/// Build the request for `question` about `code`
pub fn build_request(question: &str, code: &str) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user: user_prompt(question, code),
    }
}

fn user_prompt(question: &str, code: &str) -> String {
    format!(
        r#"
You are a helpful assistant for game developers using Unity C#.

User question:
{question}

Here is the code snippet from the website:
{code}

TASK:
Explain how to integrate or adapt this code into their Unity project.
Give clear, step-by-step instructions and mention important components, settings, or common pitfalls.

FORMAT RULES:
- If the user writes in Chinese, answer in Chinese. Otherwise, answer in English.
- Use short paragraphs and numbered steps (1., 2., 3., ...).
- Do NOT use any Markdown syntax: no headings (###), no bullet points (-, *), no horizontal rules (---), no bold (**text**).
- Do NOT wrap code in backticks. If you need to show code, prefix the line with "Code: ".
- Keep the answer compact and focused on integration steps, not theory.
"#
    )
}
