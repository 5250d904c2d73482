//! Domain layer: pure validation for question authoring.

pub mod choices;
pub mod question_text;

#[cfg(test)]
mod tests_props_choices;
