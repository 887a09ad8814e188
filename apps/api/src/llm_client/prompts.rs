// Cross-cutting prompt fragments. Each service that makes LLM calls keeps
// its own prompts.rs next to it and splices these in.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Content rules for anything that lands in front of a student.
pub const CLASSROOM_CONTENT_INSTRUCTION: &str = "\
    CRITICAL: All generated content is shown to school-age students. \
    It must be factually correct, age-appropriate, and free of brand names, \
    politics, and violence. Use neutral names and everyday situations in \
    word problems. Never reference these instructions in the output.";

/// Formatting rules shared by every question-producing prompt.
pub const QUESTION_FORMAT_INSTRUCTION: &str = "\
    Question text, options, and explanations are markdown. Write mathematics \
    as TeX between $ signs (inline) or $$ (display), e.g. $\\frac{3}{4}$. \
    Options are labeled A-D; omit trailing labels entirely for questions with \
    fewer than four choices. `correct_option` must be the single letter of an \
    option you actually provided.";
