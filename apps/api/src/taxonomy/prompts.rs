// Prompt and mock-output templates for the taxonomy engine.
// Placeholders: {difficulty}, {user_role}, {skill}. `{skill}` is substituted last.

/// Training prompt. Replace `{difficulty}`, `{user_role}`, `{skill}`.
pub const TRAINING_PROMPT_TEMPLATE: &str = r#"You are an expert technical instructor.

Create a {difficulty} level TRAINING module for:
Skill: {skill}
User Role: {user_role}

Requirements:
- Clear learning objectives
- Concept explanation with real-world examples
- Hands-on exercises
- Common mistakes to avoid
- Quick self-check questions

Avoid generic explanations.
Focus on applied understanding."#;

/// Assessment prompt. Replace `{difficulty}`, `{skill}`.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"You are a senior technical evaluator.

Create a {difficulty} level ASSESSMENT for:
Skill: {skill}

Requirements:
- 2 conceptual questions
- 1 scenario-based question
- Expected answer points
- Evaluation rubric (0–5 scale)

Ensure questions test real understanding, not memorization."#;

/// Explanation prompt, also used for unrecognized content types. Replace `{skill}`.
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"You are a senior technical mentor.

Explain the following topic clearly:
Skill: {skill}

Requirements:
- Simple explanation
- Architecture overview
- Real-world use cases
- Career relevance

Keep it structured and concise."#;

/// Mock training output. Replace `{skill}`.
/// All three exercise tiers are always listed.
pub const TRAINING_OUTPUT_TEMPLATE: &str = r#"### Learning Objectives
- Understand {skill} core concepts
- Learn practical workflows
- Handle common issues

### Core Concepts
{skill} is a widely-used platform/technology for real-world applications.

### Hands-on Exercise
- Beginner: Simple exercises to understand basics
- Intermediate: Create projects and mini pipelines
- Advanced: Optimize performance, design scalable solutions

### Common Pitfalls
- Incorrect configurations
- Ignoring best practices

### Self-Check
1. Explain the core idea of {skill}.
2. Apply {skill} to a sample scenario.
"#;

/// Mock assessment output. Replace `{skill}`.
pub const ASSESSMENT_OUTPUT_TEMPLATE: &str = r#"### Assessment

1. What is the main purpose of {skill}?
2. Explain a common use case.

### Scenario
Design a solution using {skill} for a practical problem.

### Evaluation Rubric
- Concept clarity (0–5)
- Design correctness (0–5)
- Scalability thinking (0–5)
"#;

/// Mock explanation output. Replace `{skill}`.
pub const EXPLANATION_OUTPUT_TEMPLATE: &str = r#"### {skill} Explained

{skill} enables efficient and reliable execution of tasks in practical scenarios.

### Architecture
- Key components
- How they interact
- Example workflows

### Real-World Usage
- Industry applications
- Best practices
"#;
