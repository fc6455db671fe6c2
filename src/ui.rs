// UI layer: the menu loop and all decorative rendering. The loop is
// generic over its reader and writer so the whole state machine can be
// driven from in-memory buffers in tests.

use crate::api::{Category, JokeClient};
use anyhow::Result;
use chrono::Utc;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, ErrorKind, Write};
use std::thread;
use std::time::Duration;

/// Display width for boxes, centering and wrapping.
const WIDTH: usize = 80;

const TITLE_BANNER: &str = r#"
       __      __           ______                           __
      / /___  / /_____     / ____/__  ____  ___  _________ _/ /_____  _____
 __  / / __ \/ //_/ _ \   / / __/ _ \/ __ \/ _ \/ ___/ __ `/ __/ __ \/ ___/
/ /_/ / /_/ / ,< /  __/  / /_/ /  __/ / / /  __/ /  / /_/ / /_/ /_/ / /
\____/\____/_/|_|\___/   \____/\___/_/ /_/\___/_/   \__,_/\__/\____/_/
"#;

const FAREWELL_BANNER: &str = r#"
   ______                 ____                __
  / ____/___  ____  ____/ / /_  __  _____   / /
 / / __/ __ \/ __ \/ __  / __ \/ / / / _ \ / /
/ /_/ / /_/ / /_/ / /_/ / /_/ / /_/ /  __//_/
\____/\____/\____/\__,_/_.___/\__, /\___/(_)
                             /____/
"#;

/// Menu rows: key, label, emoji.
const MENU_ITEMS: [(&str, &str, &str); 6] = [
    ("1", "Random Joke", "😄"),
    ("2", "Dad Joke", "👨"),
    ("3", "Chuck Norris Joke", "💪"),
    ("4", "Hindi Joke (हिंदी जोक)", "🇮🇳"),
    ("5", "Indian English Joke", "🎭"),
    ("6", "Exit", "👋"),
];

/// One parsed line of menu input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Joke(Category),
    Exit,
}

impl Choice {
    /// Map one input line to a menu choice. Leading and trailing
    /// whitespace is ignored; anything outside "1".."6" is invalid.
    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim() {
            "1" => Some(Choice::Joke(Category::Official)),
            "2" => Some(Choice::Joke(Category::Dad)),
            "3" => Some(Choice::Joke(Category::ChuckNorris)),
            "4" => Some(Choice::Joke(Category::Hindi)),
            "5" => Some(Choice::Joke(Category::IndianEnglish)),
            "6" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// OS username for the session box. Read from the environment on every
/// render rather than cached, with a fixed default when unset.
pub fn current_user() -> String {
    std::env::var("USER").unwrap_or_else(|_| "Unknown".to_string())
}

/// Rendering helpers bound to an output sink. `tick` paces the cosmetic
/// loading bar and the invalid-input pause; tests pass `Duration::ZERO`.
pub struct Screen<W: Write> {
    out: W,
    width: usize,
    tick: Duration,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Screen {
            out,
            width: WIDTH,
            tick: Duration::from_millis(100),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Print `text` in a decorative box, each line centered.
    fn print_box(&mut self, text: &str, color: Color) -> Result<()> {
        let inner = self.width - 2;
        writeln!(self.out, "{}", style(format!("┌{}┐", "─".repeat(inner))).with(color))?;
        for raw in text.lines() {
            for line in wrap(raw, self.width - 4) {
                let row = format!("│{}│", center(&line, inner));
                writeln!(self.out, "{}", style(row).with(color))?;
            }
        }
        writeln!(self.out, "{}", style(format!("└{}┘", "─".repeat(inner))).with(color))?;
        Ok(())
    }

    /// The main menu: banner, session box, category list.
    pub fn display_menu(&mut self) -> Result<()> {
        self.clear_screen()?;
        writeln!(self.out, "{}", TITLE_BANNER.cyan())?;

        let now = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        self.print_box(&format!("Date: {}\nUser: {}", now, current_user()), Color::Yellow)?;

        writeln!(self.out, "\n{}", "📜 Choose your joke category:".green())?;
        for (num, label, emoji) in MENU_ITEMS {
            writeln!(
                self.out,
                "{} {}",
                format!("{} [{}]", emoji, num).cyan(),
                label.white()
            )?;
        }
        Ok(())
    }

    pub fn prompt_choice(&mut self) -> Result<()> {
        write!(self.out, "\n{}", "Enter your choice (1-6): ".yellow())?;
        self.out.flush()?;
        Ok(())
    }

    /// One joke screen: header, loading bar, boxed joke, continue prompt.
    pub fn display_joke(&mut self, joke: &str, category: Category) -> Result<()> {
        self.clear_screen()?;

        let header = format!("=== {} ===", category.label());
        writeln!(self.out, "{}", style(center(&header, self.width)).with(Color::Yellow))?;
        writeln!(self.out)?;

        self.show_loading();
        writeln!(self.out)?;

        self.print_box(joke, Color::Green)?;

        write!(self.out, "\n{}", "Press Enter to continue...".cyan())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn warn_invalid_choice(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\n{}",
            "❌ Invalid choice! Please enter a number between 1 and 6.".red()
        )?;
        self.out.flush()?;
        thread::sleep(self.tick * 10);
        Ok(())
    }

    pub fn display_farewell(&mut self) -> Result<()> {
        self.clear_screen()?;
        writeln!(self.out, "{}", FAREWELL_BANNER.cyan())?;
        self.print_box("Thanks for using Joke Generator!", Color::Yellow)?;
        Ok(())
    }

    /// Cosmetic loading bar. Purely decorative: the fetch has already
    /// finished by the time this runs.
    fn show_loading(&mut self) {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("Loading joke {bar:40.green} {pos:>3}%").unwrap(),
        );
        for _ in 0..10 {
            thread::sleep(self.tick);
            bar.inc(10);
        }
        bar.finish();
    }
}

/// Main interactive loop. Renders the menu, reads one line per prompt and
/// dispatches to the joke client until the user exits or input runs out.
pub fn menu_loop<R, W>(api: &JokeClient, mut input: R, screen: &mut Screen<W>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        screen.display_menu()?;
        screen.prompt_choice()?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break,
        };

        match Choice::parse(&line) {
            Some(Choice::Exit) => break,
            Some(Choice::Joke(category)) => {
                let joke = api.fetch(category);
                screen.display_joke(&joke, category)?;
                // wait for acknowledgment before returning to the menu
                if read_line(&mut input)?.is_none() {
                    break;
                }
            }
            None => screen.warn_invalid_choice()?,
        }
    }
    screen.display_farewell()?;
    Ok(())
}

/// One line of input. `Ok(None)` means the stream ended or the read was
/// interrupted; both wind the session down through the farewell screen.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line)),
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Center `text` in `width` columns, extra padding going to the right.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Greedy word wrap on whitespace. Words longer than `width` are split
/// into `width`-sized chunks so no line ever exceeds the limit.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace().flat_map(|w| split_long(w, width)) {
        let word = word.as_str();
        let fits = current.chars().count() + 1 + word.chars().count() <= width;
        if !current.is_empty() && !fits {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Break a token that cannot fit on one line into `width`-sized chunks.
fn split_long(word: &str, width: usize) -> Vec<String> {
    if word.chars().count() <= width {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}
