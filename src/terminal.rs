// src/terminal.rs
//! Interactive booking form on stdin/stdout

use std::collections::{HashMap, HashSet};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use crate::booking::{
    BookingField, BookingForm, BookingView, DispatchOutcome, FormEvent, FormInput, ServiceKind,
    SubmissionOutcome, SubmitResult, FORM_ID,
};
use crate::services::MessageRelay;

/// Renders the booking form as plain text lines.
pub struct TerminalView<W: Write> {
    input: FormInput,
    out: W,
    form_visible: bool,
    /// Inline errors currently on screen.
    shown_errors: HashMap<BookingField, String>,
    /// Fields re-entered since their error was last printed.
    retyped: HashSet<BookingField>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: FormInput::default(),
            out,
            form_visible: true,
            shown_errors: HashMap::new(),
            retyped: HashSet::new(),
        }
    }

    pub fn set_value(&mut self, field: BookingField, value: String) {
        self.input.set(field, value);
        self.retyped.insert(field);
    }

    #[allow(dead_code)]
    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }

    // Write errors on a terminal are not actionable, so they are dropped.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    pub fn prompt(&mut self, field: BookingField) {
        let _ = writeln!(self.out);
        if field == BookingField::Service {
            for (i, kind) in ServiceKind::ALL.iter().enumerate() {
                let _ = writeln!(self.out, "  {}) {}", i + 1, kind.label());
            }
        }

        let hint = match field {
            BookingField::Date => " (ГГГГ-ММ-ДД, необязательно)",
            BookingField::Service => " (номер)",
            f if !f.is_required() => " (необязательно)",
            _ => "",
        };
        let marker = if field.is_required() { "*" } else { "" };
        let _ = write!(self.out, "{}{}{}: ", field.label(), marker, hint);
        let _ = self.out.flush();
    }

    pub fn ask(&mut self, question: &str) {
        let _ = write!(self.out, "{} ", question);
        let _ = self.out.flush();
    }
}

impl<W: Write> BookingView for TerminalView<W> {
    fn field_value(&self, field: BookingField) -> String {
        self.input.get(field).to_string()
    }

    // A terminal cannot repaint a line, so an error is printed once per
    // entry and a cleared error gets a confirmation line.
    fn show_field_error(&mut self, field: BookingField, message: Option<&str>) {
        let retyped = self.retyped.remove(&field);
        match message {
            Some(message) => {
                let unchanged = self.shown_errors.get(&field).map(String::as_str) == Some(message);
                if unchanged && !retyped {
                    return;
                }
                self.shown_errors.insert(field, message.to_string());
                let text = format!("  ✗ {}: {}", field.label(), message);
                self.line(&text);
            }
            None => {
                if self.shown_errors.remove(&field).is_some() {
                    let text = format!("  ✓ {}", field.label());
                    self.line(&text);
                }
            }
        }
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        if enabled {
            debug!(label, "Submit control enabled");
        } else {
            let text = format!("\n⏳ {}", label);
            self.line(&text);
        }
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn show_success(&mut self) {
        self.line("");
        self.line("✅ Заявка отправлена!");
        self.line("Мы свяжемся с вами в ближайшее время, чтобы подтвердить запись.");
    }

    fn alert(&mut self, message: &str) {
        let border = "!".repeat(message.chars().count().min(72));
        self.line("");
        self.line(&border);
        self.line(message);
        self.line(&border);
    }
}

/// Maps a menu number to its service value; anything else is taken as typed.
pub fn parse_service_choice(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=ServiceKind::ALL.len()).contains(&n) => {
            ServiceKind::ALL[n - 1].value().to_string()
        }
        _ => trimmed.to_string(),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да")
}

/// Runs the form until the booking is delivered, the user gives up, or
/// input ends.
pub async fn run<W, R, I>(
    form: &mut BookingForm<TerminalView<W>, R>,
    lines: &mut Lines<I>,
) -> anyhow::Result<Option<SubmissionOutcome>>
where
    W: Write,
    R: MessageRelay,
    I: AsyncBufRead + Unpin,
{
    let mut pending: Vec<BookingField> = BookingField::ALL.to_vec();

    loop {
        for field in pending {
            form.view_mut().prompt(field);
            let Some(raw) = lines.next_line().await? else {
                return Ok(None);
            };
            let value = match field {
                BookingField::Service => parse_service_choice(&raw),
                _ => raw,
            };
            form.view_mut().set_value(field, value);
            form.dispatch(FormEvent::Input, field.id()).await;
        }

        match form.dispatch(FormEvent::Submit, FORM_ID).await {
            Some(DispatchOutcome::Submitted(SubmitResult::Rejected(fields))) => {
                pending = fields;
            }
            Some(DispatchOutcome::Submitted(SubmitResult::Sent(outcome))) => {
                if outcome.is_success() {
                    return Ok(Some(outcome));
                }
                form.view_mut().ask("Попробовать ещё раз? [д/н]");
                match lines.next_line().await? {
                    Some(answer) if is_yes(&answer) => pending = Vec::new(),
                    _ => return Ok(Some(outcome)),
                }
            }
            _ => return Ok(None),
        }
    }
}

/// Interactive session on the process's stdin and stdout.
pub async fn run_stdio<R: MessageRelay>(relay: R) -> anyhow::Result<Option<SubmissionOutcome>> {
    let mut view = TerminalView::new(std::io::stdout());
    view.line("Запись на сеанс");
    view.line("Поля со * обязательны.");

    let mut form = BookingForm::new(view, relay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    run(&mut form, &mut lines).await
}
