use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizmark_core::model::{AnswerOption, MultipleChoiceQuestion};
use quizmark_core::quiz::Quiz;
use quizmark_core::report::QuizReport;

fn make_quiz(questions: usize, options: usize) -> Quiz {
    let mut quiz = Quiz::new("bench");
    for q in 0..questions {
        let opts = (0..options)
            .map(|o| AnswerOption::new(format!("option {o}"), o % 2 == 0).unwrap())
            .collect();
        quiz.add_question(MultipleChoiceQuestion::new(format!("question {q}"), opts).unwrap());
    }
    quiz
}

fn make_answers(questions: usize) -> Vec<Vec<i64>> {
    (0..questions)
        .map(|q| match q % 3 {
            0 => vec![0, 2],
            1 => vec![1],
            _ => vec![],
        })
        .collect()
}

fn bench_evaluate_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_answer");
    let quiz = make_quiz(1, 8);
    let question = &quiz.questions()[0];

    group.bench_function("single_correct", |b| {
        b.iter(|| question.evaluate_answer(black_box(&[0])))
    });

    group.bench_function("all_correct_of_8", |b| {
        b.iter(|| question.evaluate_answer(black_box(&[0, 2, 4, 6])))
    });

    group.bench_function("short_circuit", |b| {
        b.iter(|| question.evaluate_answer(black_box(&[1, 0, 2, 4, 6])))
    });

    group.finish();
}

fn bench_quiz_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_scoring");

    for size in [10usize, 100, 1000] {
        let quiz = make_quiz(size, 4);
        let answers = make_answers(size);

        group.bench_function(format!("score_percentage/{size}"), |b| {
            b.iter(|| quiz.score_percentage(black_box(answers.as_slice())))
        });

        group.bench_function(format!("report/{size}"), |b| {
            b.iter(|| QuizReport::grade(black_box(&quiz), black_box(&answers)))
        });
    }

    group.finish();
}

fn bench_add_question(c: &mut Criterion) {
    c.bench_function("add_question/200_with_duplicate_scan", |b| {
        b.iter(|| make_quiz(black_box(200), 4))
    });
}

criterion_group!(
    benches,
    bench_evaluate_answer,
    bench_quiz_scoring,
    bench_add_question
);
criterion_main!(benches);
