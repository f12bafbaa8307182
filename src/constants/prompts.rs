pub const BASE_RULES: &str = "You are an intelligent learning assistant.
Rules:
- Be clear and structured
- Student-friendly language
- Do NOT use markdown symbols like ** or ###
- No emojis
- Avoid unnecessary filler
";

/// Layout every embedded multiple-choice item must follow.
pub const QUESTION_LAYOUT: &str = "STRICT FORMAT for every question:
Question: [Question Text]
A) [Option A]
B) [Option B]
C) [Option C]
Correct Answer: [Full Text of Correct Option]
";

pub const MEMORIZE_TASK: &str = "Task:
Convert the slide into content optimized for memorization.";

pub const MEMORIZE_OUTPUT: &str = "Required Output Structure:
1. Simple explanation (2-3 lines)
2. One mnemonic
3. One real-world example
4. Two quiz questions with answers";

pub const QUIZ_TASK: &str = "Task:
Generate exactly 5 exam-oriented questions. Mix multiple-choice and short-answer questions.";

pub const QUIZ_FORMAT: &str = "STRICT FORMATTING RULES:
- Number the questions 1 to 5
- Put multiple-choice options on their own lines as A), B), C), D)
- Do not write any answer next to its question
- Put ALL answers at the very bottom under a line reading exactly ANSWERS:
";

pub const REVISE_TASK: &str = "Task:
Create a revision cheat-sheet.

Rules:
- Bullet points only
- Keywords only
- No explanations or full sentences";

pub const VISUALIZE_TASK: &str = "Task:
Identify the core concepts for a mind map.

Rules:
- List exactly 10 key concepts
- Use short, concise phrases (max 4 words)
- No punctuation, special characters or markdown
- No emojis
- Format as a simple list (one concept per line, nothing else)";

pub const GAME_TASK: &str = "Task:
Turn the slide into a three-round quiz game.

Rounds:
1. Fill in the Blanks: exactly 3 sentences based on the slide, each with one key term replaced by ____
2. True or False: exactly 2 statements about the slide
3. Rapid Fire: exactly 1 question answerable in one or two words

Do not reveal any answer inside the rounds.";

pub const GAME_ANSWER_FORMAT: &str = "STRICT FORMAT for the final block (write nothing after it):
ANSWERS:
FILL: 1=[answer] 2=[answer] 3=[answer]
TF: 1=[True or False] 2=[True or False]
RAPID=[answer]
";

pub const STANDARD_ELABORATION: &str = "Convert the following slide into study-friendly content optimized for memorization.

1) Core Concept: A simple explanation (2-3 lines).
2) Mnemonic: A memory trick or acronym.
3) Example: One easy real-world example.
4) Quiz: 2 simple review questions.";

pub const DEEP_ELABORATION: &str = "Analyze the following slide and generate rich, elaborate study content.
This is a regenerate request, so avoid generic summaries.

1) Deep Dive Explanation: A detailed, comprehensive explanation (4-6 lines) covering nuances and why it matters.
2) Advanced Mnemonic: A creative memory aid.
3) Real-World Application: A concrete, detailed example.
4) Challenge Quiz: 3 NEW, challenging multiple-choice questions.";

pub const DECK_REVIEW: &str = "Create a comprehensive final review for this entire presentation.
The output should be structured as:

1) Executive Summary: A paragraph summarizing the entire deck.
2) Top 5 Key Takeaways: Bullet points.
3) Final Exam: 5 challenging multiple-choice questions with answers.";
