use rand::Rng;

use super::model::Expression;

/// The canned expressions used whenever the live provider path cannot
/// be used or fails. Content is fixed; tests rely on these exact
/// values.
pub fn fallback_expressions() -> Vec<Expression> {
    vec![
        Expression {
            topic: "Asking for directions".to_string(),
            context: "You're lost and need help finding a place".to_string(),
            direct_expression: "Where is the bank?".to_string(),
            native_expression: "Do you know where the bank is?".to_string(),
            category: "Daily Life".to_string(),
            image_prompt: Some("person asking directions".to_string()),
        },
        Expression {
            topic: "Ordering coffee".to_string(),
            context: "You want to buy coffee at a cafe".to_string(),
            direct_expression: "I want one coffee.".to_string(),
            native_expression: "I'll take a coffee, please.".to_string(),
            category: "Food".to_string(),
            image_prompt: Some("coffee shop counter".to_string()),
        },
        Expression {
            topic: "Expressing gratitude".to_string(),
            context: "Someone helps you with something".to_string(),
            direct_expression: "Thank you very much.".to_string(),
            native_expression: "I really appreciate it!".to_string(),
            category: "Social".to_string(),
            image_prompt: Some("people helping each other".to_string()),
        },
        Expression {
            topic: "Making small talk".to_string(),
            context: "You meet someone in an elevator".to_string(),
            direct_expression: "The weather is good today.".to_string(),
            native_expression: "Nice day, isn't it?".to_string(),
            category: "Social".to_string(),
            image_prompt: Some("people in elevator".to_string()),
        },
        Expression {
            topic: "Declining an offer".to_string(),
            context: "Someone offers you food you don't want".to_string(),
            direct_expression: "No, I do not want it.".to_string(),
            native_expression: "I'm good, thanks!".to_string(),
            category: "Social".to_string(),
            image_prompt: Some("person declining food".to_string()),
        },
    ]
}

/// Uniform pick among the fallback expressions. The rng is injected so
/// tests can seed it.
pub fn pick_fallback(rng: &mut impl Rng) -> Expression {
    let mut expressions = fallback_expressions();
    let index = rng.random_range(0..expressions.len());
    expressions.swap_remove(index)
}
