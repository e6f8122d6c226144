//! User input utilities for interactive command-line prompts.
//!
//! The wizard talks to the user only through [`Prompter`], so flows can be
//! driven by scripted answers in tests. [`LinePrompter`] is the terminal
//! implementation: numbered lists, line-based answers.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::{Context, Result};
use console::{strip_ansi_codes, style};
use thiserror::Error;

/// Standard input reached end-of-file while a prompt was waiting.
#[derive(Debug, Error)]
#[error("Input closed")]
pub struct PromptClosed;

/// Source of interactive answers.
pub trait Prompter {
    /// Free-text answer, trimmed. An empty line yields `default` when given.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Index of exactly one of `choices`.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;

    /// Ascending, non-empty indices into `choices`.
    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts on a line-oriented reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter and return the writer (for inspecting output).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, message: &str, suffix: &str) -> Result<String> {
        write!(self.writer, "{} {} {}", style("?").green(), style(message).bold(), suffix)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            return Err(PromptClosed.into());
        }
        Ok(line.trim().to_string())
    }

    fn print_choices<'a>(&mut self, choices: impl Iterator<Item = (usize, &'a String)>) -> Result<()> {
        for (index, label) in choices {
            writeln!(self.writer, "{} {label}", style(format!("{:>2}.", index + 1)).cyan())?;
        }
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", style(format!(">> {message}")).red())?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let suffix = default.map_or_else(String::new, |d| style(format!("({d})")).dim().to_string());
        let answer = self.ask(message, &suffix)?;
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        self.print_choices(choices.iter().enumerate())?;
        loop {
            let answer = self.ask(message, "")?;
            if answer.is_empty() {
                self.warn("Enter a number or part of a name")?;
                continue;
            }

            if let Ok(number) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&number) {
                    return Ok(number - 1);
                }
                self.warn(&format!("Choose a number between 1 and {}", choices.len()))?;
                continue;
            }

            let matches = filter_choices(choices, &answer);
            match matches.as_slice() {
                [] => self.warn(&format!("Nothing matches '{answer}'"))?,
                [only] => return Ok(*only),
                _ => self.print_choices(matches.iter().map(|&i| (i, &choices[i])))?,
            }
        }
    }

    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>> {
        self.print_choices(choices.iter().enumerate())?;
        loop {
            let answer = self.ask(message, "")?;
            match parse_selection(&answer, choices.len()) {
                Ok(indices) => return Ok(indices),
                Err(reason) => self.warn(&reason)?,
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let suffix = style(if default { "(Y/n)" } else { "(y/N)" }).dim().to_string();
        loop {
            let answer = self.ask(message, &suffix)?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("Please enter 'y' for yes or 'n' for no.")?,
            }
        }
    }
}

/// Indices of choices whose label contains `needle`, ignoring case and
/// terminal styling.
fn filter_choices(choices: &[String], needle: &str) -> Vec<usize> {
    let needle = needle.to_lowercase();
    choices
        .iter()
        .enumerate()
        .filter(|(_, label)| strip_ansi_codes(label).to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Parse `"1,3-5"` or `"all"` into ascending zero-based indices below
/// `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("You must select at least one file.".to_string());
    }
    if input.eq_ignore_ascii_case("all") {
        return Ok((0..count).collect());
    }

    let parse_number = |text: &str| -> Result<usize, String> {
        let number: usize = text
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", text.trim()))?;
        if (1..=count).contains(&number) {
            Ok(number - 1)
        } else {
            Err(format!("{number} is out of range (1-{count})"))
        }
    };

    let mut selected = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((start, end)) = part.split_once('-') {
            let (start, end) = (parse_number(start)?, parse_number(end)?);
            if start > end {
                return Err(format!("Range '{part}' is reversed"));
            }
            selected.extend(start..=end);
        } else {
            selected.push(parse_number(part)?);
        }
    }

    selected.sort_unstable();
    selected.dedup();
    if selected.is_empty() {
        return Err("You must select at least one file.".to_string());
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_selection_ranges_and_lists() {
        assert_eq!(parse_selection("1,3-5", 6), Ok(vec![0, 2, 3, 4]));
        assert_eq!(parse_selection(" 2 , 2,1 ", 3), Ok(vec![0, 1]));
        assert_eq!(parse_selection("ALL", 3), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection(",", 3).is_err());
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("x", 3).is_err());
        assert!(parse_selection("3-1", 3).is_err());
    }

    #[test]
    fn test_input_uses_default_on_empty_line() {
        let mut p = prompter("\n  /data  \n");
        assert_eq!(p.input("Dir:", Some("/opt")).unwrap(), "/opt");
        assert_eq!(p.input("Dir:", Some("/opt")).unwrap(), "/data");
    }

    #[test]
    fn test_select_by_number_and_filter() {
        let choices = labels(&["org/llama-7b", "org/mistral-7b", "other/llama-13b"]);

        let mut p = prompter("2\n");
        assert_eq!(p.select("Pick:", &choices).unwrap(), 1);

        // Ambiguous filter, then out of range, then unique filter
        let mut p = prompter("llama\n9\n13b\n");
        assert_eq!(p.select("Pick:", &choices).unwrap(), 2);
        let output = String::from_utf8(p.into_writer()).unwrap();
        assert!(output.contains("Choose a number between 1 and 3"));
    }

    #[test]
    fn test_multi_select_retries_until_valid() {
        let choices = labels(&["a", "b", "c"]);
        let mut p = prompter("\n1-2\n");
        assert_eq!(p.multi_select("Files:", &choices).unwrap(), vec![0, 1]);
        let output = String::from_utf8(p.into_writer()).unwrap();
        assert!(output.contains("You must select at least one file."));
    }

    #[test]
    fn test_confirm_default_and_answers() {
        let mut p = prompter("\nno\nmaybe\ny\n");
        assert!(p.confirm("Retry?", true).unwrap());
        assert!(!p.confirm("Retry?", true).unwrap());
        assert!(p.confirm("Retry?", false).unwrap());
    }

    #[test]
    fn test_closed_input_is_reported() {
        let mut p = prompter("");
        let err = p.input("Query:", None).unwrap_err();
        assert!(err.is::<PromptClosed>());
    }
}
