use console::{style, Term};

/// Source of interactive answers for `adr new`.
pub trait Prompter {
    /// Ask for free text until `validate` accepts it.
    fn text(
        &mut self,
        label: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> anyhow::Result<String>;

    /// Ask for one of `items`, returning its index.
    fn select(&mut self, label: &str, items: &[&str]) -> anyhow::Result<usize>;
}

/// Prompts on the controlling terminal.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn ensure_terminal(&self) -> anyhow::Result<()> {
        if !self.term.is_term() {
            anyhow::bail!("no terminal to prompt on; pass --title and --status");
        }
        Ok(())
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn text(
        &mut self,
        label: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> anyhow::Result<String> {
        self.ensure_terminal()?;
        loop {
            self.term.write_str(&format!("{} ", style(format!("{label}:")).bold()))?;
            let input = self.term.read_line()?;
            match validate(&input) {
                Ok(()) => return Ok(input),
                Err(msg) => self.term.write_line(&style(msg).red().to_string())?,
            }
        }
    }

    fn select(&mut self, label: &str, items: &[&str]) -> anyhow::Result<usize> {
        self.ensure_terminal()?;
        self.term.write_line(&style(format!("{label}:")).bold().to_string())?;
        for (i, item) in items.iter().enumerate() {
            self.term.write_line(&format!("  {}) {item}", i + 1))?;
        }
        loop {
            self.term.write_str(&format!("Choose 1-{}: ", items.len()))?;
            let input = self.term.read_line()?;
            match input.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
                _ => self
                    .term
                    .write_line(&style("not a valid choice").red().to_string())?,
            }
        }
    }
}
