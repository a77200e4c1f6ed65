pub const QUIZ_SYSTEM_PROMPT: &str = "You are an expert educator. You write clear, fair quiz questions grounded strictly in the source text you are given. You always answer with a single bare JSON object and nothing else.";

const QUIZ_PROMPT_TEMPLATE: &str = "Generate quiz questions based on the following text.

TEXT:
{text}

Generate exactly:
- {num_multiple_choice} Multiple Choice questions (with 4 options each, mark correct answer)
- {num_true_false} True/False questions
- {num_identification} Identification questions (short answer)

Return ONLY valid JSON in this exact format:
{
  \"multiple_choice\": [
    {
      \"question\": \"Question text here?\",
      \"choices\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
      \"correct_answer\": 0,
      \"points\": 1
    }
  ],
  \"true_false\": [
    {
      \"question\": \"Statement here\",
      \"correct_answer\": true,
      \"points\": 1
    }
  ],
  \"identification\": [
    {
      \"question\": \"Question here?\",
      \"correct_answer\": \"Answer here\",
      \"points\": 1
    }
  ]
}

The object must validate against this JSON Schema:
{schema}

IMPORTANT: Return ONLY the JSON object, no markdown, no explanations, no code blocks.";

/// Renders the user prompt. `text` is cut to `max_chars` characters.
pub fn build_quiz_prompt(
    text: &str,
    num_multiple_choice: u32,
    num_true_false: u32,
    num_identification: u32,
    max_chars: usize,
    schema: &str,
) -> String {
    let source: String = text.chars().take(max_chars).collect();

    QUIZ_PROMPT_TEMPLATE
        .replace("{num_multiple_choice}", &num_multiple_choice.to_string())
        .replace("{num_true_false}", &num_true_false.to_string())
        .replace("{num_identification}", &num_identification.to_string())
        .replace("{schema}", schema)
        // last, so placeholders inside the source text are left alone
        .replace("{text}", &source)
}
