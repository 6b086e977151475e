use colored::*;
use tidy_common::config::Config;
use tidy_core::catalog::{self, Lesson, Topic};

use crate::terminal::{colors, print};

pub fn list(cfg: &Config) {
    for (idx, lesson) in catalog::lessons().iter().enumerate() {
        if cfg.quiet > 1 {
            print::print(lesson.topic.slug());
            continue;
        }
        print::tree_head(idx, lesson.title);
        print::as_tree_one_level(vec![(
            "Topic".to_string(),
            lesson.topic.slug().color(colors::ACCENT),
        )]);
    }
}

pub fn show(topic: Topic, cfg: &Config) {
    let lesson: &Lesson = catalog::lesson(topic);

    print::header(lesson.title, cfg.quiet);
    print::aligned_line("Rule", lesson.principle, cfg.quiet);

    if cfg.quiet > 1 {
        return;
    }

    print::fat_separator();
    print_example("Avoid", lesson.bad, colors::BAD);
    print_example("Prefer", lesson.good, colors::GOOD);
}

fn print_example(label: &str, snippet: &str, color: Color) {
    print::print_status(format!("{}", label.color(color).bold()));
    for line in snippet.lines() {
        print::print(&format!("    {}", line.color(color)));
    }
}
