//! Interactive Dashboard Session
//!
//! Terminal rendition of the assessment form. Operator input and service
//! responses are multiplexed on one task; all state lives in the
//! [`AssessmentController`].

use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::commands::{check_health, recent_decisions};
use crate::constants;
use crate::logic::assessment::{AssessmentController, Completion};
use crate::logic::display::render;
use crate::logic::features::FeatureId;
use crate::logic::trust_api::TrustApi;

const BUSY_TEXT: &str = "Analyzing...";

const HELP: &str = "\
Commands:
  set <field> = <value>   edit a form field (name or position 1-10)
  submit                  run trust assessment
  show                    show the latest result
  form                    show the form
  health                  check the trust service
  logs [n]                show recent decisions
  help                    this text
  quit                    leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { feature: FeatureId, raw: String },
    Submit,
    Show,
    Form,
    Health,
    Logs(Option<usize>),
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "set" => {
            let (field, raw) = rest
                .split_once('=')
                .ok_or_else(|| "usage: set <field> = <value>".to_string())?;
            let feature = FeatureId::resolve(field).map_err(|e| e.to_string())?;
            if !feature.is_editable() {
                return Err(format!("'{}' is not on the form", feature));
            }
            Command::Set {
                feature,
                raw: raw.trim().to_string(),
            }
        }
        "submit" => Command::Submit,
        "show" => Command::Show,
        "form" => Command::Form,
        "health" => Command::Health,
        "logs" if rest.is_empty() => Command::Logs(None),
        "logs" => Command::Logs(Some(
            rest.parse().map_err(|_| format!("invalid count '{}'", rest))?,
        )),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<W> {
    controller: AssessmentController,
    api: Arc<dyn TrustApi>,
    out: W,
    ansi: bool,
    log_limit: usize,
}

impl<W: Write> Session<W> {
    pub fn new(api: Arc<dyn TrustApi>, out: W, ansi: bool) -> Self {
        Self {
            controller: AssessmentController::new(Arc::clone(&api)),
            api,
            out,
            ansi,
            log_limit: constants::DEFAULT_LOG_LIMIT,
        }
    }

    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit;
        self
    }

    #[cfg(test)]
    pub fn controller(&self) -> &AssessmentController {
        &self.controller
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `quit`, or until input ends and no request is pending
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        writeln!(self.out, "{} v{}  (type 'help' for commands)", constants::APP_NAME, constants::APP_VERSION)?;
        self.print_form()?;
        self.print_result()?;

        loop {
            if !input_open && !self.controller.is_busy() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => match line? {
                    Some(line) => {
                        if self.handle_line(&line).await? == Flow::Quit {
                            break;
                        }
                    }
                    None => input_open = false,
                },
                completion = self.controller.next_completion(), if self.controller.is_busy() => {
                    self.report(completion)?;
                }
            }
        }

        self.out.flush()
    }

    async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(message) => {
                writeln!(self.out, "  {}", message)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Set { feature, raw } => {
                self.controller.set_value(feature, &raw);
                writeln!(self.out, "  {} = {}", feature, self.controller.state().features.get(feature))?;
            }
            Command::Submit => {
                // The form disables submit while a request is outstanding
                if !self.controller.is_busy() {
                    self.controller.submit();
                }
                writeln!(self.out, "  {}", BUSY_TEXT)?;
            }
            Command::Show => self.print_result()?,
            Command::Form => self.print_form()?,
            Command::Health => match check_health(self.api.as_ref()).await {
                Ok(health) => writeln!(self.out, "  service {} (version {})", health.status, health.version)?,
                Err(e) => writeln!(self.out, "  health check failed: {}", e)?,
            },
            Command::Logs(limit) => {
                let limit = limit.unwrap_or(self.log_limit);
                match recent_decisions(self.api.as_ref(), limit).await {
                    Ok(rows) if rows.is_empty() => writeln!(self.out, "  no decisions logged yet")?,
                    Ok(rows) => {
                        for row in rows {
                            writeln!(self.out, "  {}", row)?;
                        }
                    }
                    Err(e) => writeln!(self.out, "  could not fetch logs: {}", e)?,
                }
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, completion: Completion) -> io::Result<()> {
        match completion {
            Completion::Updated => self.print_result(),
            Completion::Failed(notice) => writeln!(self.out, "  ! {}", notice),
            Completion::Stale => Ok(()),
        }
    }

    fn print_form(&mut self) -> io::Result<()> {
        writeln!(self.out, "Feature Configuration")?;
        let features = &self.controller.state().features;
        for feature in FeatureId::editable() {
            writeln!(self.out, "  {:>2}. {:<24} {}", feature.index() + 1, feature.name(), features.get(feature))?;
        }
        Ok(())
    }

    fn print_result(&mut self) -> io::Result<()> {
        let assessment = &self.controller.state().assessment;
        let display = render(assessment.last_result.as_ref());
        if let Some(at) = assessment.last_completed_at {
            writeln!(self.out, "Trust Assessment ({})", at.format("%H:%M:%S"))?;
        } else {
            writeln!(self.out, "Trust Assessment")?;
        }
        write!(self.out, "{}", display.to_terminal(self.ansi))
    }
}
