use crate::quiz_engine::{error::Result, helpers::question, models::QuestionBank};

pub const OCEAN_ROBOT_ID: &str = "ocean-robot";

/// "Robots and buses that help the planet" story quiz.
pub fn ocean_robot() -> Result<QuestionBank> {
    QuestionBank::new(
        OCEAN_ROBOT_ID,
        "Robots and Buses That Help the Planet",
        vec![
            question(
                "What does the ocean robot look like?",
                &["A whale", "A shark", "A turtle"],
                0,
            ),
            question(
                "What problem does it solve?",
                &["Noise", "Plastic pollution", "Flooding"],
                1,
            ),
            question(
                "What powers the solar bus?",
                &["Gas", "Wind", "Solar energy"],
                2,
            ),
        ],
    )
}
