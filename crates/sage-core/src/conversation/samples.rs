//! Built-in sample conversations.
//!
//! A small set of pre-seeded study conversations used to populate the
//! sidebar on first launch, covering each kind of generated study
//! material:
//! - A study guide request (biology)
//! - A flashcard deck (Spanish vocabulary)
//! - A practice quiz (history)
//! - An audio recap (cell biology)
//!
//! Each sample follows the shape every conversation has: the assistant
//! greeting first, then the user's request, then the resolved response
//! with its artifact.

use super::message::{ArtifactKind, Message, StudyArtifact};
use super::model::Conversation;
use crate::config::ChatConfig;

/// Returns the built-in sample conversations, most recent first.
///
/// Ids are fixed readable strings so tests and first-launch flows can
/// refer to them; timestamps are stamped when the set is built.
pub fn sample_conversations() -> Vec<Conversation> {
    let greeting = ChatConfig::default().greeting;

    vec![
        Conversation {
            id: "sample-photosynthesis".to_string(),
            title: "Photosynthesis Review".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_active_at: chrono::Utc::now().to_rfc3339(),
            messages: vec![
                Message::assistant(greeting.clone()),
                Message::user(
                    "Can you make me a study guide for photosynthesis? I have a bio test on Friday.",
                ),
                Message::generated(
                    "Here's a study guide covering both stages of photosynthesis. \
                     Focus on where each stage happens and what goes in and out.",
                    StudyArtifact {
                        kind: ArtifactKind::StudyGuide,
                        title: "Photosynthesis Study Guide".to_string(),
                        content: "\
1. Overview
   - Converts light energy into chemical energy (glucose)
   - Overall equation: 6CO2 + 6H2O + light -> C6H12O6 + 6O2
2. Light-dependent reactions
   - Location: thylakoid membranes
   - Inputs: light, H2O; outputs: ATP, NADPH, O2
3. Calvin cycle (light-independent)
   - Location: stroma
   - Inputs: CO2, ATP, NADPH; output: G3P (glucose precursor)
4. Common test traps
   - O2 comes from splitting water, not CO2
   - The Calvin cycle still needs light indirectly (ATP/NADPH supply)"
                            .to_string(),
                    },
                ),
            ],
        },
        Conversation {
            id: "sample-spanish-vocab".to_string(),
            title: "Spanish Travel Phrases".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_active_at: chrono::Utc::now().to_rfc3339(),
            messages: vec![
                Message::assistant(greeting.clone()),
                Message::user("I need flashcards for common Spanish travel phrases."),
                Message::generated(
                    "Here's a starter deck of travel phrases. Flip through them a few \
                     times a day and they'll stick quickly.",
                    StudyArtifact {
                        kind: ArtifactKind::Flashcards,
                        title: "Spanish Travel Phrases".to_string(),
                        content: "\
Front: Where is the train station? / Back: ¿Dónde está la estación de tren?
Front: How much does it cost? / Back: ¿Cuánto cuesta?
Front: I would like the check, please / Back: La cuenta, por favor
Front: Do you speak English? / Back: ¿Habla inglés?
Front: I don't understand / Back: No entiendo"
                            .to_string(),
                    },
                ),
            ],
        },
        Conversation {
            id: "sample-ww2-quiz".to_string(),
            title: "World War II Quiz Prep".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_active_at: chrono::Utc::now().to_rfc3339(),
            messages: vec![
                Message::assistant(greeting.clone()),
                Message::user("Quiz me on the major events of World War II."),
                Message::generated(
                    "Try this practice quiz. Answers are at the bottom so you can \
                     check yourself afterwards.",
                    StudyArtifact {
                        kind: ArtifactKind::Quiz,
                        title: "World War II Practice Quiz".to_string(),
                        content: "\
Q1. What event in September 1939 started the war in Europe?
Q2. Which battle in 1942-43 marked the turning point on the Eastern Front?
Q3. What was the codename for the Allied invasion of Normandy?
Q4. When did Japan formally surrender?

Answers: 1) Germany's invasion of Poland  2) Stalingrad  3) Operation Overlord  4) September 2, 1945"
                            .to_string(),
                    },
                ),
            ],
        },
        Conversation {
            id: "sample-cell-audio".to_string(),
            title: "Cell Biology Recap".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_active_at: chrono::Utc::now().to_rfc3339(),
            messages: vec![
                Message::assistant(greeting),
                Message::user(
                    "Can you turn my cell biology notes into an audio recap I can listen to on the bus?",
                ),
                Message::generated(
                    "Done! Here's the transcript of your audio recap.",
                    StudyArtifact {
                        kind: ArtifactKind::Audio,
                        title: "Cell Biology Audio Recap".to_string(),
                        content: "\
Welcome to your cell biology recap. Every cell is wrapped in a membrane that \
controls what enters and leaves. The nucleus stores DNA and directs the cell. \
Mitochondria burn glucose to make ATP, the cell's energy currency. Ribosomes \
build proteins, and the endoplasmic reticulum and Golgi apparatus fold, sort, \
and ship them. Remember: structure follows function for every organelle."
                            .to_string(),
                    },
                ),
            ],
        },
    ]
}
