use crate::quiz_engine::{error::Result, helpers::question, models::QuestionBank};

pub const PENGUIN_RESCUE_ID: &str = "penguin-rescue";

/// "Penguin chicks get a helping hand" story quiz.
pub fn penguin_rescue() -> Result<QuestionBank> {
    QuestionBank::new(
        PENGUIN_RESCUE_ID,
        "Penguin Chicks Get a Helping Hand",
        vec![
            question(
                "Where do the penguin chicks live?",
                &["In a desert", "On a cold, icy coast", "In a rainforest"],
                1,
            ),
            question(
                "Who helped the chicks?",
                &["Scientists", "Firefighters", "Astronauts", "Farmers"],
                0,
            ),
            question(
                "What did the helpers give the chicks?",
                &["Toys", "Warm shelters", "Bicycles"],
                1,
            ),
            question(
                "How do penguins stay warm together?",
                &["They huddle in a group", "They fly south", "They dig tunnels"],
                0,
            ),
        ],
    )
}
