use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::HistoryHinter;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{Context, Helper, Hinter, Validator};

use crate::category::Category;

const PROMPT_STYLE: &str = "1;32";
const HINT_STYLE: &str = "2";

const COMMANDS: [&str; 10] = ["add", "list", "ls", "summary", "sum", "categories", "init", "help", "exit", "quit"];

#[derive(Helper, Hinter, Validator)]
pub(crate) struct SpendlogHelper {
    pub(crate) highlighter: MatchingBracketHighlighter,
    #[rustyline(Validator)]
    pub(crate) validator: MatchingBracketValidator,
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored_prompt: String,
}

impl SpendlogHelper {
    pub(crate) fn new(prompt: &str) -> SpendlogHelper {
        SpendlogHelper {
            highlighter: MatchingBracketHighlighter::new(),
            validator: MatchingBracketValidator::new(),
            hinter: HistoryHinter::new(),
            colored_prompt: paint(PROMPT_STYLE, prompt),
        }
    }
}

/// Wrap `text` in an ANSI SGR sequence
fn paint(style: &str, text: &str) -> String {
    format!("\x1b[{style}m{text}\x1b[0m")
}

/// Completes command keywords in first position, and category names where a category is expected:
/// `list <category>` and `add <amount> <category>`.
/// Returns the start position of the word being completed and the candidates.
pub(crate) fn complete_word(line: &str, pos: usize) -> (usize, Vec<String>) {
    let before = &line[..pos];
    let start = before.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &before[start..];
    let previous: Vec<String> = before[..start].split_whitespace().map(str::to_ascii_lowercase).collect();

    let options: Vec<&str> = match previous.as_slice() {
        [] => COMMANDS.to_vec(),
        [command] if command == "list" || command == "ls" => Category::ALL.iter().map(|c| c.name()).collect(),
        [command, _amount] if command == "add" => Category::ALL.iter().map(|c| c.name()).collect(),
        _ => vec![],
    };

    let word = word.to_ascii_lowercase();
    let candidates = options.into_iter()
        .filter(|option| option.to_ascii_lowercase().starts_with(&word))
        .map(str::to_string)
        .collect();

    (start, candidates)
}

impl Completer for SpendlogHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = complete_word(line, pos);
        let pairs = candidates.into_iter()
            .map(|c| Pair { display: c.clone(), replacement: c })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for SpendlogHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        // only the shell's own prompt is colored
        match default {
            true => Cow::Borrowed(&self.colored_prompt),
            false => Cow::Borrowed(prompt),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(paint(HINT_STYLE, hint))
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

#[cfg(test)]
mod tests {
    use crate::editor::{complete_word, paint, SpendlogHelper};

    #[test]
    fn test_prompt_is_colored() {
        let helper = SpendlogHelper::new("spendlog> ");
        assert_eq!(helper.colored_prompt, "\x1b[1;32mspendlog> \x1b[0m");
        assert_eq!(paint("2", "hint"), "\x1b[2mhint\x1b[0m");
    }

    #[test]
    fn test_complete_command() {
        assert_eq!(complete_word("su", 2), (0, vec!["summary".to_string(), "sum".to_string()]));
        assert_eq!(complete_word("", 0).1.len(), 10);
        assert_eq!(complete_word("x", 1), (0, vec![]));
    }

    #[test]
    fn test_complete_category() {
        assert_eq!(complete_word("list t", 6), (5, vec!["Transport".to_string()]));
        assert_eq!(complete_word("add 12.5 e", 10), (9, vec!["Entertainment".to_string()]));
        assert_eq!(complete_word("ADD 12.5 ", 9).1.len(), 6);
        // description is free text
        assert_eq!(complete_word("add 12.5 food l", 15), (14, vec![]));
    }
}
