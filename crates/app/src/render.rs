use std::io::{self, Write};

use services::{OptionState, QuestionView, RenderSink, ResultsView, SessionView};

const BAR_WIDTH: usize = 20;

/// Paints session snapshots as plain text.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, view: &SessionView) -> io::Result<()> {
        match view {
            SessionView::Question(question) => self.paint_question(question),
            SessionView::Results(results) => self.paint_results(results),
        }?;
        self.out.flush()
    }

    fn paint_question(&mut self, view: &QuestionView) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} | {} {}",
            view.title,
            view.label(),
            progress_bar(view.progress.fraction())
        )?;
        writeln!(self.out, "{}", view.prompt)?;
        for option in &view.options {
            writeln!(
                self.out,
                "  {}{}. {}",
                marker(option.state),
                option.index + 1,
                option.text
            )?;
        }
        if !view.feedback.is_none() {
            writeln!(self.out, "{}", view.feedback)?;
        }
        if view.can_advance {
            writeln!(self.out, "(n: next)")?;
        }
        Ok(())
    }

    fn paint_results(&mut self, view: &ResultsView) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{} complete", view.title)?;
        writeln!(
            self.out,
            "Score: {}/{} ({}%)",
            view.score, view.total, view.percentage
        )?;
        writeln!(self.out, "{}", view.message())?;
        if !view.missed.is_empty() {
            writeln!(self.out, "Review:")?;
            for missed in &view.missed {
                writeln!(
                    self.out,
                    "  - {} you chose \"{}\", correct: \"{}\"",
                    missed.prompt, missed.chosen_text, missed.correct_text
                )?;
            }
        }
        if let Some(notice) = view.notice {
            writeln!(self.out, "{notice}")?;
        }
        writeln!(self.out, "(r: restart, s: reshuffle, q: quit)")
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn render(&mut self, view: &SessionView) {
        if let Err(err) = self.paint(view) {
            tracing::warn!(%err, "failed to paint session view");
        }
    }
}

fn marker(state: OptionState) -> &'static str {
    match state {
        OptionState::Neutral => "  ",
        OptionState::Selected => "> ",
        OptionState::Correct => "+ ",
        OptionState::Wrong => "x ",
    }
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
