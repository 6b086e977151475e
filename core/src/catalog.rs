//! # Lesson Catalog
//!
//! The prose side of every lesson: the rule, what breaking it looks like, and
//! what following it looks like. The functions implementing each lesson live
//! in the module of the same name.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Understandability,
    Comments,
    Naming,
    Functions,
    Design,
    Structure,
    ErrorHandling,
    Testing,
    Rigidity,
    Boundaries,
    ValueObjects,
}

impl Topic {
    pub const ALL: [Topic; 11] = [
        Topic::Understandability,
        Topic::Comments,
        Topic::Naming,
        Topic::Functions,
        Topic::Design,
        Topic::Structure,
        Topic::ErrorHandling,
        Topic::Testing,
        Topic::Rigidity,
        Topic::Boundaries,
        Topic::ValueObjects,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Topic::Understandability => "understandability",
            Topic::Comments => "comments",
            Topic::Naming => "naming",
            Topic::Functions => "functions",
            Topic::Design => "design",
            Topic::Structure => "structure",
            Topic::ErrorHandling => "error-handling",
            Topic::Testing => "testing",
            Topic::Rigidity => "rigidity",
            Topic::Boundaries => "boundaries",
            Topic::ValueObjects => "value-objects",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Topic {
    type Err = String;

    /// Parses a topic slug, ignoring case and treating `_` like `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.slug() == normalized)
            .ok_or_else(|| format!("unknown topic: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub topic: Topic,
    pub title: &'static str,
    pub principle: &'static str,
    pub bad: &'static str,
    pub good: &'static str,
}

static LESSONS: [Lesson; 11] = [
    Lesson {
        topic: Topic::Understandability,
        title: "Positive vs negative conditionals",
        principle: "Name predicates so their true branch reads as an affirmative statement. \
                    Prefer `!is_valid(x)` over `is_invalid(x)` when a negative check is needed.",
        bad: "fn is_user_not_authorized(user) ... if !is_user_not_authorized(user) { grant() }",
        good: "fn is_user_authorized(user) ... if is_user_authorized(user) { grant() }",
    },
    Lesson {
        topic: Topic::Comments,
        title: "Proper use of comments",
        principle: "Document what a function does and what its inputs mean; \
                    do not narrate each statement.",
        bad: "// This function calculates the total amount\n// It adds tax to the price",
        good: "/// Calculate the total amount including tax.\n/// * `price` - The base price.",
    },
    Lesson {
        topic: Topic::Naming,
        title: "Meaningful names reveal intent",
        principle: "Types are nouns, functions are verbs, booleans start with is/has/can. \
                    Avoid abbreviations and generic words like Manager or Data.",
        bad: "struct X { d: i32 } fn do_it(o: O) fn calc() -> i32",
        good: "struct OrderProcessor { processing_time_in_minutes: u32 } fn process_order(order: &Order)",
    },
    Lesson {
        topic: Topic::Functions,
        title: "Small functions with a single responsibility",
        principle: "Each function does one thing at one level of abstraction. \
                    Replace magic numbers with named constants.",
        bad: "process_order validates, discounts (0.9), taxes (0.15), notifies (> 100) and pays inline",
        good: "validate_order, apply_discount, apply_tax, notify_customer_if_high_value, process_payment",
    },
    Lesson {
        topic: Topic::Design,
        title: "Polymorphism over conditionals",
        principle: "Let each type implement its own behaviour instead of branching on a type tag.",
        bad: "fn area(shape_type: &str) { if shape_type == \"circle\" { .. } else if .. }",
        good: "trait Shape { fn area(&self) -> f64 } impl Shape for Circle / Square / Triangle",
    },
    Lesson {
        topic: Topic::Structure,
        title: "Vertical formatting",
        principle: "Read top to bottom like a newspaper: constants, fields, constructors, \
                    public API, then private helpers in the order they are called.",
        bad: "fields, constructors and helpers interleaved at random",
        good: "const DEFAULT_TAX_RATE_PERCENT; struct fields; new(); process(); validate()",
    },
    Lesson {
        topic: Topic::ErrorHandling,
        title: "Never swallow errors",
        principle: "Log with context, keep the original cause, fail fast on invalid input, \
                    and retry only transient failures.",
        bad: "if let Err(_) = process_file(path) {}",
        good: "process_file(path).map_err(|e| { error!(..); FileProcessing { path, source: e } })?",
    },
    Lesson {
        topic: Topic::Testing,
        title: "Clear and maintainable tests",
        principle: "Name tests after the behaviour they check, follow Arrange-Act-Assert, \
                    and cover edge cases. Full coverage does not mean bug-free.",
        bad: "#[test] fn validate_email() { if !is_valid_email(..) { panic!(\"failed\") } }",
        good: "#[test] fn test_email_missing_at_or_dot() { assert!(!is_valid_email(\"abc\")) }",
    },
    Lesson {
        topic: Topic::Rigidity,
        title: "Rigidity: hard to change",
        principle: "Depend on abstractions so new variants are added, not edited in.",
        bad: "generate_from_database(db), generate_from_csv(csv), ...",
        good: "generate(&dyn DataSource)",
    },
    Lesson {
        topic: Topic::Boundaries,
        title: "Boundary conditions",
        principle: "Compute a boundary value once and give it a name.",
        bad: "if value + 1 < length { print(value + 1) }",
        good: "let next_value = value + 1; if next_value < length { print(next_value) }",
    },
    Lesson {
        topic: Topic::ValueObjects,
        title: "Value objects",
        principle: "Wrap primitives that carry rules so the rule is checked once.",
        bad: "fn register(name: String, age: i32)",
        good: "fn register(name: Name, age: Age)",
    },
];

pub fn lessons() -> &'static [Lesson] {
    &LESSONS
}

pub fn lesson(topic: Topic) -> &'static Lesson {
    // LESSONS is declared in Topic::ALL order.
    &LESSONS[topic as usize]
}
