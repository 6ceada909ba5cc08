use serde_json::{json, Value};
use crate::quiz_engine::{
    helpers::option_letter,
    models::{OptionState, QuizState},
    session::QuizSession,
};

/// Build the options array for the current question.
///
/// `is_correct` stays out of the payload until the question is answered, so a
/// client can't peek at the answer.
fn options(session: &QuizSession) -> Value {
    let Some(question) = session.current_question() else {
        return Value::Array(Vec::new());
    };
    let states = session.option_states();
    let answered = session.selected_answer().is_some();

    let slots = question
        .options
        .iter()
        .zip(states)
        .enumerate()
        .map(|(i, (text, state))| {
            let mut slot = json!({
                "index": i,
                "letter": option_letter(i).to_string(),
                "text": text,
                "state": state,
                "enabled": state == OptionState::Neutral,
            });
            if answered {
                slot["is_correct"] = json!(question.is_correct(i));
            }
            slot
        })
        .collect();
    Value::Array(slots)
}

/// Snapshot of a session for a quiz screen.
///
/// In progress: the question, option states and a progress counter. Finished:
/// the score, tier label and message for the results card.
pub fn to_client_view(session: &QuizSession) -> Value {
    let bank = session.bank();
    let base = json!({
        "quiz_id": bank.id(),
        "title": bank.title(),
        "total": session.total(),
        "score": session.score(),
    });

    let body = match session.state() {
        QuizState::InProgress { index, answered } => {
            let question = session.current_question().map(|q| q.text.as_str()).unwrap_or_default();
            json!({
                "status": "in_progress",
                "question_number": index + 1,
                "question": question,
                "answered": answered,
                "is_correct": session.is_correct(),
                "options": options(session),
                "can_advance": answered,
                "is_last": index + 1 == session.total(),
            })
        }
        QuizState::Finished { score } => {
            let tier = session.outcome_tier();
            json!({
                "status": "finished",
                "score": score,
                "tier": tier,
                "tier_label": tier.map(|t| t.to_string()),
                "message": tier.map(|t| t.message()),
                "answers": session.answers(),
            })
        }
    };

    merge(base, body)
}

fn merge(mut base: Value, extra: Value) -> Value {
    if let (Value::Object(b), Value::Object(e)) = (&mut base, extra) {
        b.extend(e);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{catalog::tech_news::ocean_robot, models::Progress};
    use std::sync::Arc;

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(ocean_robot().unwrap()))
    }

    #[test]
    fn unanswered_view_hides_correctness() {
        let view = to_client_view(&session());
        assert_eq!(view["status"], "in_progress");
        assert_eq!(view["question_number"], 1);
        assert_eq!(view["question"], "What does the ocean robot look like?");
        assert_eq!(view["is_correct"], Value::Null);
        for opt in view["options"].as_array().unwrap() {
            assert!(opt.get("is_correct").is_none());
            assert_eq!(opt["state"], "neutral");
            assert_eq!(opt["enabled"], true);
        }
    }

    #[test]
    fn answered_view_highlights_options() {
        let mut s = session();
        s.submit_answer(1).unwrap();
        let view = to_client_view(&s);
        let opts = view["options"].as_array().unwrap();
        assert_eq!(opts[0]["state"], "correct");
        assert_eq!(opts[1]["state"], "incorrect");
        assert_eq!(opts[2]["state"], "dimmed");
        assert_eq!(opts[0]["is_correct"], true);
        assert_eq!(view["is_correct"], false);
        assert_eq!(view["can_advance"], true);
    }

    #[test]
    fn finished_view_carries_tier() {
        let mut s = session();
        for pick in [0, 1, 2] {
            s.submit_answer(pick).unwrap();
            if let Progress::Finished(_) = s.advance().unwrap() {
                break;
            }
        }
        let view = to_client_view(&s);
        assert_eq!(view["status"], "finished");
        assert_eq!(view["score"], 3);
        assert_eq!(view["tier"], "perfect");
        assert_eq!(view["tier_label"], "perfect");
        assert_eq!(view["answers"].as_array().unwrap().len(), 3);
    }
}
