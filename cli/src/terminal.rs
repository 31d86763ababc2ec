//! Line-oriented terminal: renders the list and the form, and implements the
//! modal prompts on the same input the commands come from.

use std::io::{self, BufRead, Write};

use food_core::{Field, FoodForm, FormMode, ListView, Prompt};
use tracing::warn;

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line without its line ending, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn render_list(&mut self, list: &ListView) -> io::Result<()> {
        if list.is_empty() {
            return writeln!(self.output, "(no foods)");
        }
        for (index, item) in list.items().iter().enumerate() {
            let position = index + 1;
            writeln!(self.output, "{position:>3}. {}", item.name)?;
            writeln!(self.output, "     {}", item.description)?;
            writeln!(self.output, "     image: {}", item.image_url)?;
            writeln!(
                self.output,
                "     [{} {position}] [{} {position}]",
                item.edit.label.to_lowercase(),
                item.delete.label.to_lowercase()
            )?;
        }
        Ok(())
    }

    pub fn render_form(&mut self, form: &FoodForm) -> io::Result<()> {
        match form.mode() {
            FormMode::Create => writeln!(self.output, "-- form: new food --")?,
            FormMode::Edit(id) => writeln!(self.output, "-- form: editing {id} --")?,
        }
        for field in [Field::Name, Field::Description, Field::ImageUrl] {
            writeln!(self.output, "  {:<12} {}", field.as_str(), form.fields().get(field))?;
        }
        writeln!(self.output, "  [{}] (submit)", form.submit_label())
    }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "! {message}") {
            warn!(error = %err, "failed to show alert");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.ask(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}
