//! Implements InputPort. Inquire-based interactive form.
//!
//! Shows the recommended bedtime after every change; there is no calculate step.

use crate::domain::{
    BEDTIME_FAILURE_MESSAGE, CoffeeAmount, DomainError, SleepAmount, WakeTime,
};
use crate::ports::InputPort;
use crate::usecases::{BedtimeForm, LiveBedtime};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use tracing::debug;

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("☾").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// Entries of the "what to change" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    WakeTime,
    SleepAmount,
    CoffeeAmount,
    Quit,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::WakeTime,
        FormField::SleepAmount,
        FormField::CoffeeAmount,
        FormField::Quit,
    ];
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::WakeTime => "When do you want to wake up",
            FormField::SleepAmount => "Desired amount of sleep",
            FormField::CoffeeAmount => "Daily coffee intake",
            FormField::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Outcome of a single prompt.
enum Answer<T> {
    Value(T),
    /// Esc: keep the current value.
    Back,
    /// Ctrl-C: leave the form.
    Quit,
}

fn answer<T>(result: Result<T, InquireError>) -> Result<Answer<T>, DomainError> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(InquireError::OperationCanceled) => Ok(Answer::Back),
        Err(InquireError::OperationInterrupted) => Ok(Answer::Quit),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Section header / value pairs shown above the menu.
fn summary_lines(form: &BedtimeForm, bedtime: &str) -> Vec<(&'static str, String)> {
    vec![
        ("When do you want to wake up", form.wake_time().to_string()),
        ("Desired amount of sleep", form.sleep_amount().label()),
        ("Daily coffee intake", form.coffee_amount().label()),
        ("Recommended bed time", bedtime.to_string()),
    ]
}

fn print_summary(form: &BedtimeForm, bedtime: &str) {
    println!();
    println!("{}", "Better Rest".bold());
    for (header, value) in summary_lines(form, bedtime) {
        println!("  {}", header.dark_grey());
        if header == "Recommended bed time" {
            println!("    {}", value.bold().magenta());
        } else {
            println!("    {value}");
        }
    }
    println!();
}

/// TUI adapter. Inquire prompts over a [`BedtimeForm`].
pub struct TuiInputPort {
    initial: BedtimeForm,
    live: LiveBedtime,
}

impl TuiInputPort {
    pub fn new(initial: BedtimeForm, live: LiveBedtime) -> Self {
        Self { initial, live }
    }

    async fn current_bedtime(&self, form: &BedtimeForm) -> String {
        let generation = self.live.submit(form.request());
        self.live
            .wait_for(generation)
            .await
            .map(|update| update.display)
            .unwrap_or_else(|| BEDTIME_FAILURE_MESSAGE.to_string())
    }

    fn prompt_wake_time(&self, current: WakeTime) -> Result<Answer<WakeTime>, DomainError> {
        let default = current.to_string();
        loop {
            let raw = Text::new("When do you want to wake up?")
                .with_default(&default)
                .with_help_message("24-hour time, e.g. 07:00")
                .prompt();
            match answer(raw)? {
                Answer::Value(text) => match text.parse::<WakeTime>() {
                    Ok(wake) => return Ok(Answer::Value(wake)),
                    Err(e) => println!("{}", e.to_string().red()),
                },
                Answer::Back => return Ok(Answer::Back),
                Answer::Quit => return Ok(Answer::Quit),
            }
        }
    }

    fn prompt_sleep_amount(&self, form: &BedtimeForm) -> Result<Answer<SleepAmount>, DomainError> {
        let range = form.sleep_range();
        let values = range.values();
        let labels: Vec<String> = values.iter().map(SleepAmount::label).collect();
        let picked = Select::new("Desired amount of sleep", labels)
            .with_starting_cursor(range.nearest_index(form.sleep_amount()))
            .raw_prompt();
        Ok(match answer(picked)? {
            Answer::Value(option) => values
                .get(option.index)
                .copied()
                .map(Answer::Value)
                .unwrap_or(Answer::Back),
            Answer::Back => Answer::Back,
            Answer::Quit => Answer::Quit,
        })
    }

    fn prompt_coffee_amount(&self, form: &BedtimeForm) -> Result<Answer<CoffeeAmount>, DomainError> {
        let range = form.coffee_range();
        let help = format!("{} to {} cups", range.min(), range.max());
        loop {
            let raw = CustomType::<u32>::new("Daily coffee intake")
                .with_default(form.coffee_amount().cups())
                .with_help_message(&help)
                .with_error_message("Please type a whole number of cups")
                .prompt();
            match answer(raw)? {
                Answer::Value(cups) => {
                    let amount = CoffeeAmount::new(cups);
                    if range.contains(amount) {
                        return Ok(Answer::Value(amount));
                    }
                    println!("{}", format!("Pick between {help}").red());
                }
                Answer::Back => return Ok(Answer::Back),
                Answer::Quit => return Ok(Answer::Quit),
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut form = self.initial.clone();
        loop {
            let bedtime = self.current_bedtime(&form).await;
            print_summary(&form, &bedtime);

            let choice = Select::new("What would you like to change?", FormField::ALL.to_vec()).prompt();
            let field = match answer(choice)? {
                Answer::Value(FormField::Quit) | Answer::Back | Answer::Quit => break,
                Answer::Value(field) => field,
            };
            debug!(field = %field, "editing form field");

            let quit = match field {
                FormField::WakeTime => match self.prompt_wake_time(form.wake_time())? {
                    Answer::Value(wake) => {
                        form.set_wake_time(wake);
                        false
                    }
                    Answer::Back => false,
                    Answer::Quit => true,
                },
                FormField::SleepAmount => match self.prompt_sleep_amount(&form)? {
                    Answer::Value(amount) => {
                        form.set_sleep_amount(amount);
                        false
                    }
                    Answer::Back => false,
                    Answer::Quit => true,
                },
                FormField::CoffeeAmount => match self.prompt_coffee_amount(&form)? {
                    Answer::Value(amount) => {
                        form.set_coffee_amount(amount);
                        false
                    }
                    Answer::Back => false,
                    Answer::Quit => true,
                },
                FormField::Quit => true,
            };
            if quit {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_match_sections() {
        let labels: Vec<String> = FormField::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "When do you want to wake up",
                "Desired amount of sleep",
                "Daily coffee intake",
                "Quit",
            ]
        );
    }

    #[test]
    fn test_summary_lines_show_form_and_bedtime() {
        let form = BedtimeForm::default();
        let lines = summary_lines(&form, "10:54 PM");
        assert_eq!(lines[0], ("When do you want to wake up", "07:00".to_string()));
        assert_eq!(lines[1].1, "8 hours");
        assert_eq!(lines[2].1, "1 cup");
        assert_eq!(lines[3], ("Recommended bed time", "10:54 PM".to_string()));
    }

    #[test]
    fn test_answer_maps_cancellation() {
        assert!(matches!(
            answer::<u32>(Err(InquireError::OperationCanceled)),
            Ok(Answer::Back)
        ));
        assert!(matches!(
            answer::<u32>(Err(InquireError::OperationInterrupted)),
            Ok(Answer::Quit)
        ));
        assert!(matches!(answer(Ok(3u32)), Ok(Answer::Value(3))));
        assert!(matches!(
            answer::<u32>(Err(InquireError::NotTTY)),
            Err(DomainError::Ui(_))
        ));
    }
}
