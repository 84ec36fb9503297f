//! Line-based prompt loop over a commit style's questions.
//!
//! Prompts are written to `output` and answers read from `input`, one line
//! each. A text answer rejected by its filter is reported and asked again.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::debug;

use emoticz_commit::{AnswerValue, Answers};
use emoticz_plugin::{Question, QuestionKind};

/// Asks every question in order and assembles the answers.
pub fn ask<R: BufRead, W: Write>(
    questions: &[Question],
    input: &mut R,
    output: &mut W,
) -> Result<Answers> {
    let mut values = Vec::with_capacity(questions.len());

    for question in questions {
        let value = ask_one(question, input, output)?;
        debug!(answer = %question.name, ?value, "answered");
        values.push((question.name, value));
    }

    Ok(Answers::from_values(values)?)
}

fn ask_one<R: BufRead, W: Write>(
    question: &Question,
    input: &mut R,
    output: &mut W,
) -> Result<AnswerValue> {
    let message = question.message.trim_end();

    match &question.kind {
        QuestionKind::List { choices } => {
            writeln!(output, "? {message}")?;
            for (i, choice) in choices.iter().enumerate() {
                writeln!(output, "  {:>2}) [{}] {}", i + 1, choice.key, choice.name)?;
            }

            loop {
                let line = read_answer(input, output, "> ")?;
                match question.find_choice(&line) {
                    Some(choice) => return Ok(AnswerValue::Choice(choice.value)),
                    None => writeln!(output, "  invalid selection: {}", line.trim())?,
                }
            }
        }
        QuestionKind::Input => {
            writeln!(output, "? {message}")?;

            loop {
                let line = read_answer(input, output, "> ")?;
                match question.apply_filter(&line) {
                    Ok(text) => return Ok(AnswerValue::Text(text)),
                    Err(e) => writeln!(output, "  {e}")?,
                }
            }
        }
        QuestionKind::Confirm { default } => {
            let hint = if *default { "(Y/n)" } else { "(y/N)" };

            loop {
                let line = read_answer(input, output, &format!("? {message} {hint} "))?;
                match line.trim().to_lowercase().as_str() {
                    "" => return Ok(AnswerValue::Flag(*default)),
                    "y" | "yes" => return Ok(AnswerValue::Flag(true)),
                    "n" | "no" => return Ok(AnswerValue::Flag(false)),
                    other => writeln!(output, "  please answer y or n, got {other:?}")?,
                }
            }
        }
    }
}

/// Writes the prompt and reads one line, without its line terminator.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before all questions were answered");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
