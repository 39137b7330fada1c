//! Line-oriented commands driving one user's booking session.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::domain::notification::Notification;
use crate::dto::bookings::BookingDto;
use crate::dto::categories::CategoryDto;
use crate::dto::dashboard::DashboardDto;
use crate::dto::summary::BookingSummaryDto;
use crate::forms::booking::{
    BookingActionForm, BookingActionFormPayload, BookingForm, BookingFormPayload,
};
use crate::repository::InMemoryRepository;
use crate::services::booking::BookingFlow;
use crate::services::{ServiceResult, bookings, catalog, dashboard};

pub const HELP: &str = "\
Booking form:
  date <YYYY-MM-DD>    pick the day
  chair <id>           pick the chair type
  time <h:mm AM|PM>    pick the start time
  duration <minutes>   pick the length
  clear                reset the form
  summary              show the current selection
  submit               review the booking
  confirm              store the booking under review
  back                 discard the booking under review
Browsing:
  chairs               list chair types
  slots                list start times and durations
  upcoming             bookings from today on
  past                 bookings before today
  cancel <id>          cancel a booking
  complete <id>        mark a booking as used
  edit <id>            ask to change a booking
  dashboard            weekly and monthly overview
  help                 show this text";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid booking id: {0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Date(String),
    Chair(String),
    Time(String),
    Duration(String),
    Clear,
    Submit,
    Confirm,
    Back,
    Summary,
    Chairs,
    Slots,
    Upcoming,
    Past,
    Cancel(i32),
    Complete(i32),
    Edit(i32),
    Dashboard,
    Help,
}

fn required(name: &'static str, arg: &str) -> Result<String, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(arg.to_string())
    }
}

fn booking_id(name: &'static str, arg: &str) -> Result<i32, CommandError> {
    required(name, arg)?
        .parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((line, ""));

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "date" => Ok(Self::Date(required("date", arg)?)),
            "chair" => Ok(Self::Chair(required("chair", arg)?)),
            "time" => Ok(Self::Time(required("time", arg)?)),
            "duration" => Ok(Self::Duration(required("duration", arg)?)),
            "clear" => Ok(Self::Clear),
            "submit" => Ok(Self::Submit),
            "confirm" => Ok(Self::Confirm),
            "back" => Ok(Self::Back),
            "summary" => Ok(Self::Summary),
            "chairs" => Ok(Self::Chairs),
            "slots" => Ok(Self::Slots),
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            "cancel" => Ok(Self::Cancel(booking_id("cancel", arg)?)),
            "complete" => Ok(Self::Complete(booking_id("complete", arg)?)),
            "edit" => Ok(Self::Edit(booking_id("edit", arg)?)),
            "dashboard" => Ok(Self::Dashboard),
            "help" | "?" => Ok(Self::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What a command produced, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// The form after an edit, or on request.
    Summary(BookingSummaryDto),
    /// The frozen selection awaiting confirmation.
    Review(BookingSummaryDto),
    Confirmed(BookingDto),
    ReviewDiscarded,
    Categories(Vec<CategoryDto>),
    SlotOptions {
        slots: Vec<String>,
        durations: Vec<(u32, String)>,
    },
    Bookings(Vec<BookingDto>),
    /// Result of cancel or complete; `changed` is false for a no-op.
    StatusChanged { id: i32, changed: bool },
    EditRequested,
    Dashboard(DashboardDto),
    Help,
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &BookingSummaryDto) -> fmt::Result {
    writeln!(f, "Date:     {}", summary.date)?;
    writeln!(f, "Chair:    {}", summary.category)?;
    writeln!(f, "Time:     {}", summary.time)?;
    write!(f, "Duration: {}", summary.duration)
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary(summary) => write_summary(f, summary),
            Self::Review(summary) => {
                writeln!(f, "Please review your booking ('confirm' or 'back'):")?;
                write_summary(f, summary)
            }
            Self::Confirmed(booking) => write!(
                f,
                "#{} {} on {}, {} at {}",
                booking.id, booking.category, booking.date, booking.time, booking.location
            ),
            Self::ReviewDiscarded => write!(f, "Review discarded"),
            Self::Categories(categories) => {
                for (i, c) in categories.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{:<12} {} ({}/{} available, {})",
                        c.id, c.name, c.available, c.total, c.location
                    )?;
                    if c.is_fully_booked() {
                        write!(f, " fully booked")?;
                    }
                }
                Ok(())
            }
            Self::SlotOptions { slots, durations } => {
                writeln!(f, "Start times: {}", slots.join(", "))?;
                let durations: Vec<String> = durations
                    .iter()
                    .map(|(minutes, label)| format!("{minutes} ({label})"))
                    .collect();
                write!(f, "Durations:   {}", durations.join(", "))
            }
            Self::Bookings(bookings) if bookings.is_empty() => write!(f, "No bookings"),
            Self::Bookings(bookings) => {
                for (i, b) in bookings.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "#{:<3} {:<10} {} {:<20} {} [{}]",
                        b.id, b.date, b.category, b.time, b.location, b.status_label
                    )?;
                }
                Ok(())
            }
            Self::StatusChanged { id, changed: true } => write!(f, "Booking #{id} updated"),
            Self::StatusChanged { id, changed: false } => {
                write!(f, "Booking #{id} already had that status")
            }
            Self::EditRequested => write!(f, "Edit request noted"),
            Self::Dashboard(d) => {
                writeln!(f, "{}", d.greeting)?;
                writeln!(f, "Active bookings: {}", d.active_bookings)?;
                writeln!(f, "Hours this week: {:.1}", d.hours_this_week)?;
                writeln!(f, "Hours this month: {:.1}", d.hours_this_month)?;
                writeln!(
                    f,
                    "Favorite chair: {}",
                    d.favorite_category.as_deref().unwrap_or("-")
                )?;
                match d.success_rate {
                    Some(rate) => write!(f, "Success rate: {rate}%")?,
                    None => write!(f, "Success rate: -")?,
                }
                for upcoming in &d.upcoming {
                    write!(
                        f,
                        "\n  #{} {} {} {}",
                        upcoming.id, upcoming.day, upcoming.category, upcoming.time
                    )?;
                }
                Ok(())
            }
            Self::Help => write!(f, "{HELP}"),
        }
    }
}

/// One user's session: the booking store, the form and pending notifications.
#[derive(Debug)]
pub struct Session {
    repo: InMemoryRepository,
    flow: BookingFlow,
    notifications: Vec<Notification>,
    user_name: String,
    upcoming_preview: usize,
    today: Option<NaiveDate>,
}

impl Session {
    pub fn new(
        repo: InMemoryRepository,
        user_name: impl Into<String>,
        upcoming_preview: usize,
    ) -> Self {
        Self {
            repo,
            flow: BookingFlow::new(),
            notifications: Vec::new(),
            user_name: user_name.into(),
            upcoming_preview,
            today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    pub fn repository(&self) -> &InMemoryRepository {
        &self.repo
    }

    /// Notifications emitted since the last call.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Parses and runs a single input line.
    pub fn execute(&mut self, line: &str) -> ServiceResult<CommandOutput> {
        let command: Command = line.parse()?;
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: Command) -> ServiceResult<CommandOutput> {
        log::debug!("Dispatching {command:?}");
        let today = self.today();

        match command {
            Command::Date(date) => self.update_form(BookingForm {
                date: Some(date),
                ..Default::default()
            }),
            Command::Chair(category_id) => self.update_form(BookingForm {
                category_id: Some(category_id),
                ..Default::default()
            }),
            Command::Time(start_slot) => self.update_form(BookingForm {
                start_slot: Some(start_slot),
                ..Default::default()
            }),
            Command::Duration(duration) => self.update_form(BookingForm {
                duration: Some(duration),
                ..Default::default()
            }),
            Command::Clear => {
                self.flow.clear_draft()?;
                Ok(self.summary())
            }
            Command::Summary => Ok(match self.flow.review() {
                Some(snapshot) => CommandOutput::Review(snapshot.into()),
                None => self.summary(),
            }),
            Command::Submit => {
                let snapshot = self.flow.submit(today, &self.repo, &mut self.notifications)?;
                Ok(CommandOutput::Review((&snapshot).into()))
            }
            Command::Confirm => {
                let booking = self.flow.confirm(&mut self.repo, &mut self.notifications)?;
                Ok(CommandOutput::Confirmed(booking.into()))
            }
            Command::Back => {
                self.flow.cancel_review()?;
                Ok(CommandOutput::ReviewDiscarded)
            }
            Command::Chairs => Ok(CommandOutput::Categories(catalog::show_categories(
                &self.repo,
            )?)),
            Command::Slots => {
                let (slots, durations) = catalog::show_slot_options(&self.repo)?;
                Ok(CommandOutput::SlotOptions { slots, durations })
            }
            Command::Upcoming => Ok(CommandOutput::Bookings(
                bookings::show_upcoming_bookings(today, &self.repo)?,
            )),
            Command::Past => Ok(CommandOutput::Bookings(bookings::show_past_bookings(
                today, &self.repo,
            )?)),
            Command::Cancel(id) => {
                let changed = bookings::cancel_booking(
                    action(id)?,
                    &mut self.repo,
                    &mut self.notifications,
                )?;
                Ok(CommandOutput::StatusChanged { id, changed })
            }
            Command::Complete(id) => {
                let changed = bookings::complete_booking(action(id)?, &mut self.repo)?;
                Ok(CommandOutput::StatusChanged { id, changed })
            }
            Command::Edit(id) => {
                bookings::request_booking_edit(action(id)?, &self.repo, &mut self.notifications)?;
                Ok(CommandOutput::EditRequested)
            }
            Command::Dashboard => Ok(CommandOutput::Dashboard(dashboard::show_dashboard(
                today,
                &self.user_name,
                self.upcoming_preview,
                &self.repo,
            )?)),
            Command::Help => Ok(CommandOutput::Help),
        }
    }

    fn update_form(&mut self, form: BookingForm) -> ServiceResult<CommandOutput> {
        let payload: BookingFormPayload = form.try_into()?;
        self.flow.update_draft(payload)?;
        Ok(self.summary())
    }

    fn summary(&self) -> CommandOutput {
        CommandOutput::Summary(catalog::show_booking_summary(self.flow.draft(), &self.repo))
    }
}

fn action(booking_id: i32) -> ServiceResult<BookingActionFormPayload> {
    let payload: BookingActionFormPayload = BookingActionForm { booking_id }.try_into()?;
    Ok(payload)
}
