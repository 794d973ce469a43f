//! Quiz generation: eligibility filtering, sampling without replacement,
//! distractor generation and question assembly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::QuizError;
use crate::models::{Country, Question, QuizMode};
use crate::names;

/// Return a new vector with the same elements in uniformly random order.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Countries usable for `mode`. Capitals and currencies require the relevant
/// field; flags and mixed use the full pool.
pub fn eligible_pool(countries: &[Country], mode: QuizMode) -> Vec<&Country> {
    countries
        .iter()
        .filter(|c| match mode {
            QuizMode::Capitals => c.capital.is_some(),
            QuizMode::Currencies => c.currency.is_some(),
            QuizMode::Flags | QuizMode::Mixed => true,
        })
        .collect()
}

/// The answer text a country contributes for a concrete mode.
fn answer_text(country: &Country, mode: QuizMode) -> Option<&str> {
    match mode {
        QuizMode::Flags => Some(country.name.as_str()),
        QuizMode::Capitals => country.capital.as_deref(),
        QuizMode::Currencies => country.currency.as_deref(),
        QuizMode::Mixed => None,
    }
}

/// Pick up to [`names::DISTRACTOR_COUNT`] wrong options for one question.
///
/// Each candidate is drawn uniformly from the remaining pool and removed
/// whether or not it is accepted, so the loop always terminates. A candidate
/// is rejected when its text is missing, duplicates an accepted distractor or
/// equals the correct answer (two countries can share a capital or currency
/// name). May return fewer than requested when the pool runs out; the caller
/// treats that as a build failure.
fn pick_distractors<R: Rng>(
    pool: &[&Country],
    correct: &Country,
    correct_answer: &str,
    mode: QuizMode,
    rng: &mut R,
) -> Vec<String> {
    let mut available: Vec<&Country> = pool
        .iter()
        .filter(|c| c.code != correct.code)
        .copied()
        .collect();
    let mut distractors = Vec::with_capacity(names::DISTRACTOR_COUNT);

    while distractors.len() < names::DISTRACTOR_COUNT && !available.is_empty() {
        let idx = rng.gen_range(0..available.len());
        let candidate = available.swap_remove(idx);

        if let Some(text) = answer_text(candidate, mode) {
            if text != correct_answer && !distractors.iter().any(|d| d == text) {
                distractors.push(text.to_string());
            }
        }
    }

    distractors
}

/// Build one question for `country`, or `None` when the country cannot
/// produce a valid question from the current pool.
fn build_question<R: Rng>(
    country: &Country,
    pool: &[&Country],
    mode: QuizMode,
    index: usize,
    rng: &mut R,
) -> Option<Question> {
    let (prompt, correct_answer, image_url) = match mode {
        QuizMode::Flags => (
            "Which country does this flag belong to?".to_string(),
            country.name.clone(),
            Some(country.flag_url.clone()),
        ),
        QuizMode::Capitals => (
            format!("What is the capital of {}?", country.name),
            country.capital.clone()?,
            None,
        ),
        QuizMode::Currencies => (
            format!("What is the currency of {}?", country.name),
            country.currency.clone()?,
            None,
        ),
        QuizMode::Mixed => return None,
    };

    let distractors = pick_distractors(pool, country, &correct_answer, mode, rng);
    if distractors.len() < names::DISTRACTOR_COUNT {
        return None;
    }

    let mut options = Vec::with_capacity(names::OPTION_COUNT);
    options.push(correct_answer.clone());
    options.extend(distractors);
    options.shuffle(rng);

    Some(Question {
        id: format!("q-{}-{}-{}", mode, country.code, index),
        mode,
        country_code: country.code.clone(),
        country_name: country.name.clone(),
        prompt,
        image_url,
        correct_answer,
        options,
        time_limit: None,
    })
}

/// Resolve the concrete mode for one question. Mixed picks uniformly among
/// the modes the country has data for; the other modes pass through.
fn resolve_mode<R: Rng>(country: &Country, mode: QuizMode, rng: &mut R) -> QuizMode {
    if mode != QuizMode::Mixed {
        return mode;
    }

    let mut choices = vec![QuizMode::Flags];
    if country.capital.is_some() {
        choices.push(QuizMode::Capitals);
    }
    if country.currency.is_some() {
        choices.push(QuizMode::Currencies);
    }
    choices[rng.gen_range(0..choices.len())]
}

/// Generate a full quiz of up to `count` questions.
///
/// Fails with [`QuizError::InsufficientData`] when the eligible pool is
/// smaller than `count + 3`. Countries whose question cannot be built are
/// dropped, so the result may be shorter than `count`; that is logged as a
/// warning, never retried.
pub fn generate_quiz<R: Rng>(
    countries: &[Country],
    mode: QuizMode,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    let eligible = eligible_pool(countries, mode);
    let required = count + names::POOL_MARGIN;

    if eligible.len() < required {
        return Err(QuizError::InsufficientData {
            mode,
            eligible: eligible.len(),
            required,
        });
    }

    let sampled: Vec<&Country> = shuffled(&eligible, rng).into_iter().take(count).collect();

    let mut questions = Vec::with_capacity(count);
    for (index, country) in sampled.iter().enumerate() {
        let concrete = resolve_mode(country, mode, rng);
        if let Some(question) = build_question(country, &eligible, concrete, index, rng) {
            questions.push(question);
        }
    }

    if questions.len() < count {
        tracing::warn!(
            "generated {} of {count} requested questions for {mode} mode",
            questions.len()
        );
    }

    questions.truncate(count);
    Ok(questions)
}
