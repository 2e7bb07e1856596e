//! Predefined goal checklists and selectable option lists.

/// Interests offered in the sidebar multi-select.
pub(crate) const INTERESTS: &[&str] = &[
    "Programming",
    "Reading",
    "Gaming",
    "Traveling",
    "Cooking",
    "Sports",
];

/// Selectable primary goals.
pub(crate) const GOALS: &[&str] = &[
    "Learn a new skill",
    "Improve fitness",
    "Read more books",
    "Travel more",
    "Cook new recipes",
];

pub(crate) fn builtin_checklists() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        (
            "Learn a new skill",
            &[
                "Identify the skill you want to learn",
                "Gather resources (books, courses, articles)",
                "Set daily/weekly practice schedule",
                "Join a community or find a mentor",
                "Track progress and adjust learning plan",
            ],
        ),
        (
            "Improve fitness",
            &[
                "Set specific fitness goals",
                "Create a workout plan",
                "Find a workout buddy",
                "Track your progress",
                "Adjust your plan as needed",
            ],
        ),
        (
            "Read more books",
            &[
                "Create a reading list",
                "Set reading goals",
                "Find a reading spot",
                "Join a book club",
                "Track your progress",
            ],
        ),
        (
            "Travel more",
            &[
                "Create a travel bucket list",
                "Set a travel budget",
                "Research destinations",
                "Plan your trips",
                "Track your experiences",
            ],
        ),
        (
            "Cook new recipes",
            &[
                "Identify recipes to try",
                "Gather ingredients",
                "Set a cooking schedule",
                "Join a cooking class",
                "Track your experiments",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_goal_has_a_checklist() {
        let checklists = builtin_checklists();
        for goal in GOALS {
            assert!(
                checklists.iter().any(|(g, _)| g == goal),
                "goal {goal} has no checklist"
            );
        }
    }

    #[test]
    fn checklists_have_five_steps_each() {
        for (goal, steps) in builtin_checklists() {
            assert_eq!(steps.len(), 5, "checklist for {goal}");
        }
    }
}
