use crate::domain::ClassLevel;

const EXTRACT_TEMPLATE: &str = r#"You are an expert educational content processor for CBSE board exams, classes 10 to 12.
Extract every multiple-choice question from the following page text:

{content}

For each question:
- copy the complete question text
- copy all answer options, usually labelled A, B, C and D
- copy the correct answer if the text gives one, otherwise leave it empty
- name the subject (Physics, Chemistry, Biology or Mathematics)
- decide the class level (10, 11 or 12) from the complexity
- name the specific topic within the subject

Reply with a JSON array whose elements look like:
{
  "question": "Full question text",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "answer": "The correct answer or an empty string",
  "subject": "Subject area",
  "class": "10, 11 or 12",
  "topic": "Specific topic"
}

If the text contains no multiple-choice questions, reply with [].
"#;

const FORMAT_TEMPLATE: &str = r#"You are an expert educational content creator for CBSE board exam preparation.
Format and improve the following multiple-choice questions for class {class_level} students:

{mcq_data}

Requirements:
1. Every question is clear and follows the CBSE exam format.
2. Every question has exactly 4 options (A, B, C, D).
3. Use proper scientific notation and display units correctly.
4. Where a diagram would help, describe it in the question text.
5. Every question tests one specific concept from the CBSE syllabus.
6. Fill in the correct answer and a brief "explanation" for every question that lacks one.

Reply with a JSON array using the same fields as the input plus "explanation".
"#;

const GENERATE_TEMPLATE: &str = r#"You are an expert educational content creator for CBSE board exams.
Write {count} new multiple-choice questions for class {class_level} students on the topic: {topic}.

Requirements:
1. Follow CBSE exam patterns and difficulty levels.
2. Every question has exactly 4 options (A, B, C, D).
3. Exactly one option is correct; the other three are plausible distractors.
4. Mix cognitive levels: knowledge, understanding, application and analysis.
5. Mix difficulty: Easy, Medium and Hard.
6. Cover different aspects of the topic.

Reply with a JSON array of {count} elements that look like:
{
  "question": "Full question text",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correct_option": "A, B, C or D",
  "explanation": "Why the correct option is correct",
  "difficulty": "Easy, Medium or Hard",
  "topic": "{topic}",
  "subject": "Physics/Chemistry/Biology/Mathematics",
  "class": "{class_level}"
}
"#;

pub fn extraction_prompt(content: &str) -> String {
    EXTRACT_TEMPLATE.replace("{content}", content)
}

pub fn formatting_prompt(mcq_data: &str, class_level: ClassLevel) -> String {
    FORMAT_TEMPLATE
        .replace("{class_level}", &class_level.to_string())
        .replace("{mcq_data}", mcq_data)
}

pub fn generation_prompt(topic: &str, count: usize, class_level: ClassLevel) -> String {
    GENERATE_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{class_level}", &class_level.to_string())
        .replace("{topic}", topic)
}
