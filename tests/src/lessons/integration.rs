#![cfg(test)]
use tidy_common::models::question::Question;
use tidy_core::adapters::StaticSource;
use tidy_core::catalog::{self, Topic};
use tidy_core::reports::ReportGenerator;
use tidy_core::scoring::quiz_score;
use tidy_core::shapes::{Circle, Shape, Square, Triangle, total_area};
use tidy_core::tennis::tennis_score;

#[test]
fn every_lesson_is_reachable_by_slug() {
    for lesson in catalog::lessons() {
        let topic: Topic = lesson.topic.slug().parse().unwrap();
        assert_eq!(catalog::lesson(topic), lesson);
        assert!(!lesson.principle.is_empty());
    }
}

#[test]
fn shapes_mix_in_one_collection() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(1.0).unwrap()),
        Box::new(Square::new(1.0).unwrap()),
        Box::new(Triangle::new(2.0, 1.0).unwrap()),
    ];
    let expected = std::f64::consts::PI + 1.0 + 1.0;
    assert!((total_area(&shapes) - expected).abs() < 1e-12);
}

#[test]
fn report_from_static_source() {
    let report = ReportGenerator.generate(&StaticSource::new("42 rows")).unwrap();
    assert_eq!(report, "Report: 42 rows");
}

#[test]
fn quiz_and_tennis_examples() {
    let questions = [Question::new(true, 3), Question::new(false, 5), Question::new(true, 3)];
    assert_eq!(quiz_score(&questions), 6);
    assert_eq!(tennis_score(3, 3), "Deuce");
    assert_eq!(tennis_score(5, 3), "Win for player1");
}
