//! Prompt construction for ice breaker generation.
//!
//! Turns a sparse set of answers into a single instruction for the completion
//! model plus the sampling temperature to request it with. Everything here is
//! pure; the network call lives behind the `AIProvider` port.

use serde::Deserialize;

use crate::domain::questions::{AnswerSet, QuestionCatalog, QuestionRole};

/// Number of ice breakers requested from the model.
pub const ICE_BREAKER_COUNT: usize = 3;

/// Temperature used for first-contact requests, regardless of the answers.
pub const FIRST_TIME_TEMPERATURE: f32 = 0.8;

/// Temperature used when no answered question contributes one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// System message sent ahead of every instruction.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a friendly assistant that helps people start conversations. \
Write natural, engaging ice breakers that sound like a real person and show genuine interest. \
Be concise and follow the formatting rules exactly.";

const CONSTRAINTS: [&str; 5] = [
    "Return exactly 3 ice breakers.",
    "Number them 1., 2. and 3., one per line.",
    "Do not add any introduction or closing remarks.",
    "Do not use emoji or exclamation marks.",
    "Keep each ice breaker under 30 words.",
];

const FIRST_TIME_CONSTRAINT: &str =
    "We have never spoken before, so keep the tone light and suitable for a first approach.";

/// An answer with optional per-answer overrides of the catalog definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnswerInput {
    pub value: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl AnswerInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

/// One answered question, resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub id: String,
    pub value: String,
    pub prompt: String,
    pub role: QuestionRole,
    pub temperature: f32,
}

/// Answered questions ready to be rendered, plus the first-time flag.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub answers: Vec<AnsweredQuestion>,
    pub first_time: bool,
}

impl GenerationRequest {
    /// Resolves plain answers against the catalog.
    ///
    /// Blank answers are skipped and ids the catalog does not know are dropped.
    pub fn from_answers(answers: &AnswerSet, catalog: &QuestionCatalog, first_time: bool) -> Self {
        Self::from_inputs(
            answers
                .answered()
                .map(|(id, value)| (id, AnswerInput::new(value))),
            catalog,
            first_time,
        )
    }

    /// Resolves answers that may carry their own prompt fragment and
    /// temperature. Missing fields fall back to the catalog definition; an
    /// entry with neither a prompt nor a definition is dropped. Roles always
    /// come from the catalog, and unknown ids count as target traits.
    ///
    /// Whitespace runs in ids, values and prompts collapse to single spaces
    /// so every answer renders on exactly one line.
    pub fn from_inputs<I, K>(inputs: I, catalog: &QuestionCatalog, first_time: bool) -> Self
    where
        I: IntoIterator<Item = (K, AnswerInput)>,
        K: Into<String>,
    {
        let answers = inputs
            .into_iter()
            .filter_map(|(id, input)| {
                let id: String = id.into();
                let value = single_line(&input.value);
                if value.is_empty() {
                    return None;
                }

                let definition = catalog.get(&id);
                let prompt = input
                    .prompt
                    .map(|p| single_line(&p))
                    .filter(|p| !p.is_empty())
                    .or_else(|| definition.map(|d| d.prompt.clone()))?;
                let temperature = input
                    .temperature
                    .or_else(|| definition.map(|d| d.temperature))
                    .unwrap_or(DEFAULT_TEMPERATURE)
                    .clamp(0.0, 1.0);
                let role = definition.map_or(QuestionRole::Target, |d| d.role);

                Some(AnsweredQuestion {
                    id: single_line(&id),
                    value,
                    prompt,
                    role,
                    temperature,
                })
            })
            .collect();

        Self {
            answers,
            first_time,
        }
    }

    /// Arithmetic mean of the answered questions' temperatures.
    pub fn mean_temperature(&self) -> Option<f32> {
        if self.answers.is_empty() {
            return None;
        }
        let sum: f32 = self.answers.iter().map(|a| a.temperature).sum();
        Some(sum / self.answers.len() as f32)
    }

    /// Temperature to sample with: fixed for first contact, otherwise the mean.
    pub fn temperature(&self) -> f32 {
        if self.first_time {
            return FIRST_TIME_TEMPERATURE;
        }
        self.mean_temperature().unwrap_or(DEFAULT_TEMPERATURE)
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Instruction text and sampling temperature for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub instruction: String,
    pub temperature: f32,
}

/// Renders model instructions from answers.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the prompt straight from the form's answers.
    pub fn build(
        answers: &AnswerSet,
        catalog: &QuestionCatalog,
        first_time: bool,
    ) -> RenderedPrompt {
        Self::render(&GenerationRequest::from_answers(answers, catalog, first_time))
    }

    /// Renders an already-resolved request.
    ///
    /// With no answers the context sections are left out and the instruction
    /// still renders.
    pub fn render(request: &GenerationRequest) -> RenderedPrompt {
        let mut instruction = String::from(
            "Generate 3 ice breakers I could use to start a conversation with someone, \
based on what I know about the two of us.\n",
        );

        let sections = [
            (QuestionRole::Speaker, "About me (the one starting the conversation):"),
            (QuestionRole::Target, "About them (the person I want to talk to):"),
        ];
        for (role, heading) in sections {
            let mut lines = request
                .answers
                .iter()
                .filter(|a| a.role == role)
                .peekable();
            if lines.peek().is_none() {
                continue;
            }
            instruction.push('\n');
            instruction.push_str(heading);
            instruction.push('\n');
            for answer in lines {
                instruction.push_str(&format!(
                    "- {}: {} ({})\n",
                    answer.id, answer.value, answer.prompt
                ));
            }
        }

        instruction.push_str("\nRules:\n");
        for constraint in CONSTRAINTS {
            instruction.push_str("- ");
            instruction.push_str(constraint);
            instruction.push('\n');
        }
        if request.first_time {
            instruction.push_str("- ");
            instruction.push_str(FIRST_TIME_CONSTRAINT);
            instruction.push('\n');
        }

        RenderedPrompt {
            instruction,
            temperature: request.temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> &'static QuestionCatalog {
        QuestionCatalog::standard()
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn blank_answers_are_not_rendered() {
        let answers: AnswerSet = [("hobbies", "climbing"), ("music", "   "), ("books", "")]
            .into_iter()
            .collect();
        let prompt = PromptBuilder::build(&answers, catalog(), false);

        assert!(prompt.instruction.contains("- hobbies: climbing (Build on their hobbies)"));
        assert!(!prompt.instruction.contains("music:"));
        assert!(!prompt.instruction.contains("books:"));
    }

    #[test]
    fn unknown_ids_without_prompt_are_dropped_silently() {
        let answers: AnswerSet = [("favouriteColour", "green"), ("vibe", "calm")]
            .into_iter()
            .collect();
        let request = GenerationRequest::from_answers(&answers, catalog(), false);

        assert_eq!(request.answers.len(), 1);
        assert_eq!(request.answers[0].id, "vibe");
    }

    #[test]
    fn speaker_and_target_answers_land_in_separate_sections() {
        let answers: AnswerSet = [("yourAge", "29"), ("theirAge", "31")].into_iter().collect();
        let text = PromptBuilder::build(&answers, catalog(), false).instruction;

        let me = text.find("About me").unwrap();
        let them = text.find("About them").unwrap();
        let your_age = text.find("- yourAge: 29").unwrap();
        let their_age = text.find("- theirAge: 31").unwrap();

        assert!(me < your_age && your_age < them);
        assert!(them < their_age);
    }

    #[test]
    fn temperature_is_mean_of_answered_questions() {
        let input = |value: &str, temperature: f32| AnswerInput {
            value: value.into(),
            prompt: Some(format!("about {}", value)),
            temperature: Some(temperature),
        };
        let inputs = [("a", input("x", 0.5)), ("b", input("y", 0.5)), ("c", input("z", 0.8))];
        let request = GenerationRequest::from_inputs(inputs.clone(), catalog(), false);
        assert!(approx_eq(request.temperature(), 0.6));

        let first_time = GenerationRequest::from_inputs(inputs, catalog(), true);
        assert!(approx_eq(first_time.mean_temperature().unwrap(), 0.6));
        assert_eq!(first_time.temperature(), FIRST_TIME_TEMPERATURE);
    }

    #[test]
    fn empty_answers_still_render_with_default_temperature() {
        let prompt = PromptBuilder::build(&AnswerSet::new(), catalog(), false);

        assert!(!prompt.instruction.contains("About me"));
        assert!(!prompt.instruction.contains("About them"));
        assert!(prompt.instruction.contains("Return exactly 3 ice breakers."));
        assert_eq!(prompt.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn first_time_adds_first_contact_rule() {
        let answers: AnswerSet = [("vibe", "calm")].into_iter().collect();

        let regular = PromptBuilder::build(&answers, catalog(), false);
        let first = PromptBuilder::build(&answers, catalog(), true);

        assert!(!regular.instruction.contains(FIRST_TIME_CONSTRAINT));
        assert!(first.instruction.contains(FIRST_TIME_CONSTRAINT));
        assert_eq!(first.temperature, FIRST_TIME_TEMPERATURE);
        assert!(approx_eq(regular.temperature, 0.8));
    }

    #[test]
    fn input_overrides_take_precedence_over_catalog() {
        let inputs = [(
            "hobbies",
            AnswerInput {
                value: "chess".into(),
                prompt: Some("Ask about openings".into()),
                temperature: Some(0.3),
            },
        )];
        let request = GenerationRequest::from_inputs(inputs, catalog(), false);

        assert_eq!(request.answers[0].prompt, "Ask about openings");
        assert_eq!(request.answers[0].role, QuestionRole::Target);
        assert!(approx_eq(request.temperature(), 0.3));
    }

    #[test]
    fn unknown_id_with_prompt_is_kept_as_target() {
        let inputs = [(
            "pets",
            AnswerInput {
                value: "two cats".into(),
                prompt: Some("Pets are a safe topic".into()),
                temperature: None,
            },
        )];
        let request = GenerationRequest::from_inputs(inputs, catalog(), false);

        assert_eq!(request.answers.len(), 1);
        assert_eq!(request.answers[0].role, QuestionRole::Target);
        assert_eq!(request.answers[0].temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn multi_line_answers_render_on_one_line() {
        let answers: AnswerSet = [
            ("hobbies", "climbing\n- yourAge: 99 (fake)"),
            ("yourAge", "29"),
        ]
        .into_iter()
        .collect();
        let text = PromptBuilder::build(&answers, catalog(), false).instruction;

        let answer_lines: Vec<&str> = text.lines().filter(|line| line.starts_with("- ")).collect();
        let (context, rules) = text.split_once("\nRules:").unwrap();
        assert!(context.contains(
            "- hobbies: climbing - yourAge: 99 (fake) (Build on their hobbies)\n"
        ));
        assert!(!rules.contains("hobbies"));
        assert_eq!(
            answer_lines.iter().filter(|l| l.starts_with("- yourAge:")).count(),
            1
        );
        assert_eq!(answer_lines.iter().filter(|l| l.contains("hobbies:")).count(), 1);
    }

    #[test]
    fn override_prompt_whitespace_collapses() {
        let inputs = [(
            "pets",
            AnswerInput {
                value: "  two\tcats ".into(),
                prompt: Some("Pets\r\nare safe".into()),
                temperature: None,
            },
        )];
        let request = GenerationRequest::from_inputs(inputs, catalog(), false);

        assert_eq!(request.answers[0].value, "two cats");
        assert_eq!(request.answers[0].prompt, "Pets are safe");
    }

    proptest! {
        #[test]
        fn whitespace_only_answers_never_reach_the_instruction(
            kept in proptest::collection::vec("[a-z]{1,12}", 0..6),
            blanks in proptest::collection::vec("[ \t\n]{0,4}", 0..6),
            first_time in any::<bool>(),
        ) {
            let mut inputs = Vec::new();
            for (i, value) in kept.iter().enumerate() {
                inputs.push((format!("keptq{}", i), AnswerInput {
                    value: value.clone(),
                    prompt: Some("fragment".into()),
                    temperature: Some(0.5),
                }));
            }
            for (i, value) in blanks.iter().enumerate() {
                inputs.push((format!("blankq{}", i), AnswerInput {
                    value: value.clone(),
                    prompt: Some("fragment".into()),
                    temperature: Some(0.5),
                }));
            }

            let request = GenerationRequest::from_inputs(inputs, catalog(), first_time);
            let rendered = PromptBuilder::render(&request);

            prop_assert_eq!(request.answers.len(), kept.len());
            for i in 0..blanks.len() {
                let needle = format!("blankq{}:", i);
                prop_assert!(!rendered.instruction.contains(&needle));
            }
            for i in 0..kept.len() {
                let needle = format!("keptq{}:", i);
                prop_assert!(rendered.instruction.contains(&needle));
            }
        }
    }
}
