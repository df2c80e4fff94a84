use crate::operation::MathOperation;
use crate::record::{Attempt, Player};
use std::fmt;
use std::io::{self, Write};

/// Numbered list, starting at 1
pub fn list<W: Write, S: AsRef<str>>(out: &mut W, title: &str, names: &[S]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for (i, name) in names.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, name.as_ref())?;
    }
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{msg}")?;
    out.flush()
}

pub fn question<W: Write>(out: &mut W, question: &MathOperation) -> io::Result<()> {
    writeln!(out, "{question} =")?;
    out.flush()
}

pub fn attempt<W: Write>(out: &mut W, attempt: &Attempt) -> io::Result<()> {
    writeln!(out, "{attempt}")?;
    out.flush()
}

/// Every attempt so far followed by the correct/wrong totals
pub fn history<W: Write>(out: &mut W, player: &Player) -> io::Result<()> {
    writeln!(out, "Questions/Results Record:")?;
    for attempt in player.history() {
        writeln!(out, "[{}] {attempt}", attempt.answered_at.format("%H:%M:%S"))?;
    }
    let summary = player.summarize();
    writeln!(out)?;
    writeln!(out, "Correct answers: {}", summary.correct)?;
    writeln!(out, "Wrong answers: {}", summary.wrong)?;
    writeln!(out)?;
    out.flush()
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.correct { "correct" } else { "wrong" };
        writeln!(f, "{} = {}: {verdict}.", self.question, self.answer)?;
        writeln!(f, "{} is the correct answer.", self.question.result())?;
        write!(
            f,
            "The time you took to answer: {:.2}s",
            self.elapsed.as_secs_f64()
        )
    }
}
